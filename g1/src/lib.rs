//! Decoder for the G1 sprite container format used by RCT2-era game assets.
//!
//! A container is an index table over hundreds of small indexed-color
//! sprites, each stored as per-row RLE streams. [`G1`] reads the index,
//! [`G1::decode`] materializes one sprite into an RGBA [`Raster`] through a
//! shared [`Palette`]. Decoding only; there is no writing path.
pub mod error;

mod decode;
mod palette;
mod parser;
mod types;
mod utils;

pub use decode::decode_row;
pub use error::{DecodeError, FormatError, IndexError};
pub use palette::*;
pub use types::*;


#[cfg(test)]
mod test {
    use crate::{
        test_util::{build_container, test_palette, SpriteFixture},
        DecodeError, FormatError, G1Revision, IndexError, Palette, RleVariant, G1,
    };

    /// 4x2 sprite, one opaque run of {5, 9} at x=1 in row 0, row 1 empty.
    fn four_by_two() -> SpriteFixture {
        let mut payload = vec![];
        payload.extend(4u16.to_le_bytes()); // row 0 at table end
        payload.extend(0u16.to_le_bytes()); // row 1 empty sentinel
        payload.extend([0x82, 0x01, 5, 9]);

        SpriteFixture::rle(4, 2, payload)
    }

    #[test]
    fn round_trip_synthetic_sprite() {
        let bytes = build_container(G1Revision::Full, &[four_by_two()]);
        let g1 = G1::from_bytes(bytes).unwrap();

        let raster = g1.decode(0, &test_palette()).unwrap();

        assert_eq!(raster.width, 4);
        assert_eq!(raster.height, 2);

        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0, 0, 0, 0,   10, 20, 30, 255,   40, 50, 60, 255,   0, 0, 0, 0,
            0, 0, 0, 0,   0, 0, 0, 0,        0, 0, 0, 0,        0, 0, 0, 0,
        ];

        assert_eq!(raster.data, expected);
    }

    #[test]
    fn dimensions_match_descriptor() {
        let mut payload = vec![];
        payload.extend([0xFFu8, 0xFF].repeat(3)); // all rows empty

        let bytes = build_container(
            G1Revision::Full,
            &[four_by_two(), SpriteFixture::rle(7, 3, payload)],
        );
        let g1 = G1::from_bytes(bytes).unwrap();
        let palette = test_palette();

        for index in 0..g1.entry_count() {
            let entry = g1.entry(index).unwrap();
            let raster = g1.decode(index, &palette).unwrap();

            assert_eq!(raster.width, entry.width as u32);
            assert_eq!(raster.height, entry.height as u32);
        }
    }

    #[test]
    fn sentinel_rows_stay_transparent() {
        let mut payload = vec![];
        payload.extend(0xFFFFu16.to_le_bytes());
        payload.extend(6u16.to_le_bytes()); // row 1 after the table
        payload.extend(0u16.to_le_bytes());
        payload.extend([0x81, 0x00, 5]);

        let bytes = build_container(G1Revision::Full, &[SpriteFixture::rle(2, 3, payload)]);
        let g1 = G1::from_bytes(bytes).unwrap();

        let raster = g1.decode(0, &test_palette()).unwrap();

        // rows 0 and 2 fully transparent, row 1 has one pixel
        assert_eq!(&raster.data[0..8], &[0; 8]);
        assert_eq!(&raster.data[8..12], &[10, 20, 30, 255]);
        assert_eq!(&raster.data[16..24], &[0; 8]);
    }

    #[test]
    fn out_of_range_index() {
        let bytes = build_container(G1Revision::Full, &[four_by_two()]);
        let g1 = G1::from_bytes(bytes).unwrap();

        assert!(matches!(
            g1.entry(1),
            Err(IndexError::OutOfRange {
                index: 1,
                entry_count: 1
            })
        ));
        assert!(matches!(
            g1.decode(1, &test_palette()),
            Err(DecodeError::Index(IndexError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn zero_area_sprite_is_empty() {
        let bytes = build_container(
            G1Revision::Full,
            &[SpriteFixture::empty(), SpriteFixture::rle(-3, 5, vec![])],
        );
        let g1 = G1::from_bytes(bytes).unwrap();
        let palette = test_palette();

        assert!(matches!(g1.decode(0, &palette), Err(DecodeError::EmptySprite)));
        assert!(matches!(g1.decode(1, &palette), Err(DecodeError::EmptySprite)));
    }

    #[test]
    fn truncated_sprite_does_not_poison_others() {
        // second descriptor points its row-offset table past the container
        let bytes = build_container(
            G1Revision::Full,
            &[
                four_by_two(),
                SpriteFixture::rle(4, 2, vec![]).with_offset(0x00FF_0000),
            ],
        );
        let g1 = G1::from_bytes(bytes).unwrap();
        let palette = test_palette();

        assert!(matches!(
            g1.decode(1, &palette),
            Err(DecodeError::Truncated { .. })
        ));
        assert!(g1.decode(0, &palette).is_ok());
    }

    #[test]
    fn decoding_is_deterministic_across_handles() {
        let bytes = build_container(G1Revision::Full, &[four_by_two()]);
        let palette = test_palette();

        let first = G1::from_bytes(bytes.clone())
            .unwrap()
            .decode(0, &palette)
            .unwrap();
        let second = G1::from_bytes(bytes).unwrap().decode(0, &palette).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn transparent_bit_variant() {
        let mut payload = vec![];
        payload.extend(2u16.to_le_bytes());
        payload.extend([0x82, 0x02, 5, 9]); // skip 2, draw 2

        let bytes = build_container(G1Revision::Full, &[SpriteFixture::rle(4, 1, payload)]);
        let mut g1 = G1::from_bytes(bytes).unwrap();
        g1.rle_variant = RleVariant::TransparentBit;

        let raster = g1.decode(0, &test_palette()).unwrap();

        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0, 0, 0, 0,   0, 0, 0, 0,   10, 20, 30, 255,   40, 50, 60, 255,
        ];

        assert_eq!(raster.data, expected);
    }

    #[test]
    fn compact_revision_detected() {
        let mut payload = vec![];
        payload.extend(2u16.to_le_bytes());
        payload.extend([0x81, 0x00, 5]);

        let bytes = build_container(
            G1Revision::Compact,
            &[SpriteFixture::empty(), SpriteFixture::rle(1, 1, payload)],
        );
        let g1 = G1::from_bytes(bytes).unwrap();

        assert_eq!(g1.header.revision, G1Revision::Compact);
        assert_eq!(g1.header.data_size, None);
        assert_eq!(g1.entry(1).unwrap().flags, 0);

        let raster = g1.decode(1, &test_palette()).unwrap();

        assert_eq!(raster.data, vec![10, 20, 30, 255]);
    }

    #[test]
    fn bad_palette_index_rejects_sprite() {
        let bytes = build_container(G1Revision::Full, &[four_by_two()]);
        let g1 = G1::from_bytes(bytes).unwrap();

        // 4-entry palette cannot resolve index 5
        let short_palette = Palette(vec![[0u8; 3]; 4]);

        assert!(matches!(
            g1.decode(0, &short_palette),
            Err(DecodeError::BadPaletteIndex { index: 5 })
        ));
    }

    #[test]
    fn implausible_entry_count_is_bad_header() {
        let mut bytes = build_container(G1Revision::Full, &[four_by_two()]);
        bytes[0..4].copy_from_slice(&1000u32.to_le_bytes());

        assert!(matches!(
            G1::from_bytes_with_revision(bytes.clone(), G1Revision::Full),
            Err(FormatError::BadHeader {
                entry_count: 1000,
                ..
            })
        ));
        assert!(matches!(
            G1::from_bytes(bytes),
            Err(FormatError::UnknownRevision)
        ));
    }

    #[test]
    fn header_too_short() {
        assert!(matches!(
            G1::from_bytes_with_revision(vec![0x01, 0x00], G1Revision::Compact),
            Err(FormatError::TooShort { .. })
        ));
    }
}
