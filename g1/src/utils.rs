use std::{ffi::OsStr, path::Path};

use image::RgbaImage;

use crate::{
    error::FormatError,
    parser,
    types::{G1Revision, Raster, RleVariant, G1},
};

impl G1 {
    /// Opens a container, detecting the revision from the declared entry
    /// count and the file size.
    pub fn from_bytes(data: Vec<u8>) -> Result<G1, FormatError> {
        let revision = G1Revision::detect(&data).ok_or(FormatError::UnknownRevision)?;

        Self::from_bytes_with_revision(data, revision)
    }

    /// Opens a container as a specific revision, for callers that know what
    /// they are holding.
    pub fn from_bytes_with_revision(
        data: Vec<u8>,
        revision: G1Revision,
    ) -> Result<G1, FormatError> {
        let (_, header) = parser::parse_header(&data, revision)
            .map_err(|_| FormatError::TooShort { revision })?;

        let table_end = revision.header_len() as u64
            + header.entry_count as u64 * revision.entry_stride() as u64;

        if table_end > data.len() as u64 {
            return Err(FormatError::BadHeader {
                entry_count: header.entry_count,
                file_len: data.len(),
            });
        }

        let table = &data[revision.header_len()..table_end as usize];
        let (_, entries) = parser::parse_entries(table, revision, header.entry_count as usize)
            .map_err(|_| FormatError::BadHeader {
                entry_count: header.entry_count,
                file_len: data.len(),
            })?;

        Ok(G1 {
            header,
            rle_variant: RleVariant::EndOfRowBit,
            entries,
            data,
        })
    }

    pub fn from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<G1, FormatError> {
        let bytes = std::fs::read(path)?;

        Self::from_bytes(bytes)
    }
}

impl Raster {
    /// Hands the pixels to the `image` crate for saving or compositing.
    pub fn to_rgba8(&self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .expect("raster length matches width * height")
    }
}
