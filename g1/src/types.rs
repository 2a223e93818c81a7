use crate::{
    decode::decode_sprite,
    error::{DecodeError, IndexError},
    palette::Palette,
};

/// Known layouts of the container header and descriptor table.
///
/// The two revisions are distinct formats and are never merged: a `Full`
/// container read as `Compact` (or the other way around) would shear every
/// descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum G1Revision {
    /// 8-byte header (entry count + total data size) followed by 16-byte
    /// descriptors carrying `flags` and `zoomed_offset`. This is the layout
    /// of the retail g1.dat.
    Full,
    /// 4-byte header (entry count only) followed by 12-byte descriptors
    /// without the trailing `flags`/`zoomed_offset` pair.
    Compact,
}

impl G1Revision {
    pub fn header_len(&self) -> usize {
        match self {
            G1Revision::Full => 8,
            G1Revision::Compact => 4,
        }
    }

    pub fn entry_stride(&self) -> usize {
        match self {
            G1Revision::Full => 16,
            G1Revision::Compact => 12,
        }
    }

    /// Picks the first revision whose declared entry count fits the file.
    /// `Full` is tried first because a `Full` container with little pixel
    /// data can also look plausible as `Compact`.
    pub fn detect(bytes: &[u8]) -> Option<G1Revision> {
        [G1Revision::Full, G1Revision::Compact]
            .into_iter()
            .find(|revision| revision.is_plausible(bytes))
    }

    fn is_plausible(&self, bytes: &[u8]) -> bool {
        if bytes.len() < self.header_len() {
            return false;
        }

        let entry_count = u32::from_le_bytes(bytes[0..4].try_into().unwrap());
        let table_end =
            self.header_len() as u64 + entry_count as u64 * self.entry_stride() as u64;

        table_end <= bytes.len() as u64
    }
}

/// The two interpretations of the high bit of an RLE run header found in the
/// wild. They disagree on what the bit means and on which row offsets mark an
/// empty row, so the variant is explicit rather than guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RleVariant {
    /// Each chunk is a length byte whose high bit marks the last chunk of the
    /// row, then a start-x byte, then the palette indices. This matches the
    /// OpenRCT2 decompressor and is the default.
    EndOfRowBit,
    /// A control byte with the high bit set skips that many pixels; otherwise
    /// the palette indices draw at the running x cursor. The row ends once
    /// the cursor reaches the sprite width.
    TransparentBit,
}

impl RleVariant {
    pub fn is_empty_row(&self, row_offset: u16) -> bool {
        match self {
            RleVariant::EndOfRowBit => row_offset == 0 || row_offset == 0xFFFF,
            RleVariant::TransparentBit => row_offset == 0xFFFF,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct G1Header {
    pub revision: G1Revision,
    pub entry_count: u32,
    /// Total size of the data region as declared by a `Full` header. Kept as
    /// read, not validated against the file.
    pub data_size: Option<u32>,
}

/// One sprite's descriptor. `width <= 0` or `height <= 0` marks an absent
/// sprite; `x_offset`/`y_offset`/`flags`/`zoomed_offset` are placement hints
/// passed through to the caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct G1Entry {
    /// Absolute byte offset of the sprite's row-offset table.
    pub offset: u32,
    pub width: i16,
    pub height: i16,
    pub x_offset: i16,
    pub y_offset: i16,
    pub flags: u16,
    pub zoomed_offset: u16,
}

impl G1Entry {
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// A decoded sprite: tightly packed RGBA, fully transparent where no run
/// wrote a pixel. Owned by the caller, never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    // [[u8; 4]; width * height]
    pub data: Vec<u8>,
}

impl Raster {
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; (width * height * 4) as usize],
        }
    }

    pub fn put_opaque(&mut self, x: u32, y: u32, [r, g, b]: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }

        let start = ((y * self.width + x) * 4) as usize;

        self.data[start..start + 3].copy_from_slice(&[r, g, b]);
        self.data[start + 3] = 255;
    }
}

/// An opened sprite container. Immutable after construction apart from
/// `rle_variant`, so decoding different indices from the same handle is safe
/// across threads.
#[derive(Debug)]
pub struct G1 {
    pub header: G1Header,
    /// RLE interpretation used by [`G1::decode`]. Flip this if reference
    /// images come out shredded.
    pub rle_variant: RleVariant,
    pub(crate) entries: Vec<G1Entry>,
    pub(crate) data: Vec<u8>,
}

impl G1 {
    pub fn entry_count(&self) -> u32 {
        self.header.entry_count
    }

    /// The raw container bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn entry(&self, index: u32) -> Result<G1Entry, IndexError> {
        if index >= self.header.entry_count {
            return Err(IndexError::OutOfRange {
                index,
                entry_count: self.header.entry_count,
            });
        }

        Ok(self.entries[index as usize])
    }

    /// Decodes one sprite into a caller-owned raster. Failures are scoped to
    /// this sprite; the container stays usable for other indices.
    pub fn decode(&self, index: u32, palette: &Palette) -> Result<Raster, DecodeError> {
        let entry = self.entry(index)?;

        decode_sprite(&self.data, &entry, palette, self.rle_variant)
    }
}
