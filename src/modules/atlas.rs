use std::{fs, ops::Range, path::Path};

use eyre::eyre;
use g1::{Palette, Raster, RleVariant, G1};
use image::RgbaImage;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AtlasCell {
    pub index: u32,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Serialize)]
pub struct AtlasMetadata {
    pub cell_size: u32,
    pub columns: u32,
    pub cells: Vec<AtlasCell>,
}

/// Composites a sprite range into a fixed-cell grid, one decoded sprite per
/// cell, bottom-centered the way isometric terrain slopes expect. Sprites
/// that do not decode are left out of the grid rather than failing the whole
/// atlas. Writes the atlas image plus a `.json` metadata sidecar mapping each
/// sprite index to its cell position.
pub fn create_atlas(
    g1_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    indices: Range<u32>,
    cell_size: u32,
    columns: u32,
    variant: RleVariant,
) -> eyre::Result<AtlasMetadata> {
    let mut g1 = G1::from_file(g1_path.as_ref())?;
    g1.rle_variant = variant;

    let palette = Palette::default();

    let rasters: Vec<(u32, Raster)> = indices
        .filter_map(|index| match g1.decode(index, &palette) {
            Ok(raster) => Some((index, raster)),
            Err(err) => {
                println!("Leaving sprite {} out of the atlas: {}", index, err);
                None
            }
        })
        .collect();

    if rasters.is_empty() {
        return Err(eyre!("no decodable sprites in the requested range"));
    }

    let rows = (rasters.len() as u32).div_ceil(columns);
    let mut atlas = RgbaImage::new(columns * cell_size, rows * cell_size);

    let mut cells = vec![];

    for (slot, (index, raster)) in rasters.iter().enumerate() {
        let cell_x = (slot as u32 % columns) * cell_size;
        let cell_y = (slot as u32 / columns) * cell_size;

        // bottom-centered inside the cell
        let paste_x = cell_x + cell_size.saturating_sub(raster.width) / 2;
        let paste_y = cell_y + cell_size.saturating_sub(raster.height);

        copy_to_atlas(&mut atlas, raster, paste_x, paste_y);

        cells.push(AtlasCell {
            index: *index,
            x: cell_x,
            y: cell_y,
        });
    }

    let metadata = AtlasMetadata {
        cell_size,
        columns,
        cells,
    };

    atlas.save(output_path.as_ref())?;

    let metadata_path = output_path.as_ref().with_extension("json");
    fs::write(&metadata_path, serde_json::to_string_pretty(&metadata)?)?;

    Ok(metadata)
}

fn copy_to_atlas(atlas: &mut RgbaImage, raster: &Raster, x: u32, y: u32) {
    for (pixel_x, pixel_y, pixel) in raster.to_rgba8().enumerate_pixels() {
        let atlas_x = x + pixel_x;
        let atlas_y = y + pixel_y;

        // only copy if within bounds
        if atlas_x < atlas.width() && atlas_y < atlas.height() {
            atlas.put_pixel(atlas_x, atlas_y, *pixel);
        }
    }
}
