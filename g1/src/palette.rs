use std::ops::Range;

use crate::{error::DecodeError, types::G1};

/// Sprite indices holding the palette strips in the retail g1.dat. Each one
/// stores `width` raw RGB triples destined for palette slot `x_offset + i`.
pub const G1_PALETTE_SPRITES: Range<u32> = 761..773;

/// 256 RGB triples, read-only after construction and shared by reference
/// across every decode in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(pub Vec<[u8; 3]>);

impl Palette {
    pub fn get(&self, index: u8) -> Option<[u8; 3]> {
        self.0.get(index as usize).copied()
    }

    /// Assembles a 256-entry palette from the container's own palette
    /// sprites. Palette sprites carry no row-offset table; their data region
    /// is `width` contiguous RGB triples landing at slot `x_offset + i`.
    /// Out-of-range destination slots are dropped, not fatal; unassigned
    /// slots stay black.
    pub fn from_container(g1: &G1, sprites: Range<u32>) -> Result<Palette, DecodeError> {
        let mut colors = vec![[0u8; 3]; 256];

        for index in sprites {
            let entry = g1.entry(index)?;

            if entry.width <= 0 {
                continue;
            }

            let base = entry.offset as usize;
            let end = base + entry.width as usize * 3;
            let triples = g1
                .data()
                .get(base..end)
                .ok_or(DecodeError::Truncated { offset: end })?;

            for (i, rgb) in triples.chunks_exact(3).enumerate() {
                let dest = entry.x_offset as i32 + i as i32;

                if (0..256).contains(&dest) {
                    colors[dest as usize] = [rgb[0], rgb[1], rgb[2]];
                }
            }
        }

        Ok(Palette(colors))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette(RCT2_PALETTE.to_vec())
    }
}

/// The stock RCT2 palette. The circulating reference table only defines the
/// first 217 slots; the tail is padded with black so every 8-bit index
/// resolves.
pub const RCT2_PALETTE: [[u8; 3]; 256] = [
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [35, 35, 23], [51, 51, 35],
    [67, 67, 47], [83, 83, 63], [99, 99, 75], [115, 115, 91],
    [131, 131, 111], [151, 151, 131], [175, 175, 159], [195, 195, 183],
    [219, 219, 211], [243, 243, 239], [0, 47, 51], [0, 59, 63],
    [11, 75, 79], [19, 91, 91], [31, 107, 107], [43, 127, 119],
    [59, 143, 135], [79, 155, 147], [95, 171, 159], [115, 187, 171],
    [135, 199, 183], [159, 215, 195], [183, 231, 211], [207, 247, 227],
    [227, 255, 239], [0, 47, 111], [0, 47, 159], [0, 47, 203],
    [0, 51, 255], [0, 87, 255], [0, 123, 255], [0, 155, 255],
    [0, 183, 255], [0, 219, 255], [0, 255, 255], [11, 67, 35],
    [15, 91, 47], [19, 111, 63], [23, 131, 75], [31, 151, 87],
    [39, 171, 99], [51, 187, 115], [63, 203, 131], [75, 219, 147],
    [91, 239, 167], [111, 255, 183], [43, 39, 27], [55, 51, 39],
    [67, 63, 51], [83, 75, 67], [95, 91, 83], [111, 111, 103],
    [127, 127, 123], [143, 147, 143], [159, 167, 163], [179, 187, 183],
    [199, 207, 203], [219, 227, 223], [0, 43, 0], [0, 63, 0],
    [7, 87, 0], [15, 107, 7], [19, 127, 15], [27, 147, 19],
    [35, 167, 31], [43, 187, 39], [55, 207, 51], [67, 227, 67],
    [83, 247, 87], [15, 7, 0], [27, 15, 0], [43, 23, 0],
    [55, 31, 0], [67, 43, 0], [83, 55, 0], [99, 67, 7],
    [115, 83, 15], [131, 99, 23], [147, 119, 35], [163, 135, 47],
    [183, 155, 63], [195, 175, 83], [207, 195, 103], [223, 215, 127],
    [239, 235, 159], [255, 255, 195], [111, 47, 0], [131, 59, 0],
    [151, 75, 0], [175, 91, 0], [191, 107, 7], [215, 127, 19],
    [235, 147, 35], [255, 171, 51], [255, 195, 75], [255, 219, 103],
    [255, 243, 139], [255, 255, 179], [75, 47, 11], [95, 59, 23],
    [115, 75, 35], [135, 95, 51], [159, 119, 67], [179, 139, 87],
    [199, 167, 111], [219, 187, 139], [239, 215, 167], [255, 239, 199],
    [255, 255, 227], [51, 31, 0], [63, 39, 0], [79, 51, 0],
    [95, 63, 7], [111, 75, 15], [131, 91, 27], [151, 111, 43],
    [171, 131, 59], [191, 155, 79], [207, 179, 99], [227, 203, 123],
    [247, 227, 147], [255, 255, 183], [255, 255, 219], [255, 255, 255],
    [107, 0, 0], [127, 0, 0], [151, 0, 0], [171, 0, 0],
    [191, 0, 0], [215, 0, 0], [239, 0, 0], [255, 23, 23],
    [255, 51, 51], [255, 83, 83], [255, 115, 115], [255, 147, 147],
    [255, 183, 183], [255, 219, 219], [255, 255, 255], [35, 0, 0],
    [59, 0, 0], [79, 0, 0], [103, 0, 0], [123, 0, 0],
    [143, 7, 7], [163, 23, 23], [183, 43, 43], [203, 63, 63],
    [223, 83, 83], [239, 111, 111], [255, 139, 139], [255, 171, 171],
    [255, 203, 203], [255, 235, 235], [255, 255, 255], [59, 31, 11],
    [75, 43, 19], [91, 55, 31], [107, 71, 43], [127, 87, 59],
    [143, 107, 75], [163, 127, 95], [179, 147, 115], [199, 167, 135],
    [215, 191, 155], [235, 215, 179], [255, 239, 207], [95, 63, 23],
    [115, 79, 39], [135, 99, 55], [155, 119, 67], [175, 139, 83],
    [195, 159, 99], [219, 183, 119], [239, 203, 139], [255, 227, 163],
    [255, 247, 191], [255, 255, 223], [99, 79, 43], [119, 99, 59],
    [143, 119, 75], [163, 139, 95], [187, 159, 115], [207, 183, 135],
    [227, 203, 159], [251, 227, 183], [255, 247, 207], [255, 255, 235],
    [111, 91, 63], [131, 111, 83], [151, 131, 103], [175, 151, 127],
    [199, 175, 147], [219, 199, 171], [243, 223, 195], [255, 247, 223],
    [255, 255, 247], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
    [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0],
];
