use std::{
    fs,
    ops::Range,
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use g1::{DecodeError, Palette, RleVariant, G1};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Decodes a sprite index range to `{index}.png` files under `output_dir`.
///
/// Every failure is scoped to its own sprite: empty and out-of-range indices
/// count as skips, decode failures are reported and counted, and the batch
/// always runs to the end. Indices decode in parallel; the container and
/// palette are only read.
pub fn extract_range(
    g1_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    indices: Range<u32>,
    variant: RleVariant,
) -> eyre::Result<ExtractSummary> {
    let mut g1 = G1::from_file(g1_path.as_ref())?;
    g1.rle_variant = variant;

    let palette = Palette::default();
    let output_dir = output_dir.as_ref();

    fs::create_dir_all(output_dir)?;

    let saved = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    indices.into_par_iter().for_each(|index| {
        match g1.decode(index, &palette) {
            Ok(raster) => {
                let file_path = output_dir.join(format!("{}.png", index));

                match raster.to_rgba8().save(&file_path) {
                    Ok(()) => {
                        saved.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(err) => {
                        println!("Cannot save sprite {}: {}", index, err);
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            }
            Err(DecodeError::EmptySprite) | Err(DecodeError::Index(_)) => {
                skipped.fetch_add(1, Ordering::Relaxed);
            }
            Err(err) => {
                println!("Cannot decode sprite {}: {}", index, err);
                failed.fetch_add(1, Ordering::Relaxed);
            }
        };
    });

    Ok(ExtractSummary {
        saved: saved.into_inner(),
        skipped: skipped.into_inner(),
        failed: failed.into_inner(),
    })
}
