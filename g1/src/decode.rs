use crate::{
    error::DecodeError,
    palette::Palette,
    parser,
    types::{G1Entry, Raster, RleVariant},
};

/// Decodes one row's RLE stream into `(x, palette_index)` pairs.
///
/// Positions at or past `width` are read but dropped. A stream that ends
/// before its terminating condition fails softly: whatever decoded so far is
/// returned and the rest of the row stays transparent.
pub fn decode_row(stream: &[u8], width: u16, variant: RleVariant) -> Vec<(u16, u8)> {
    match variant {
        RleVariant::EndOfRowBit => decode_row_end_of_row_bit(stream, width),
        RleVariant::TransparentBit => decode_row_transparent_bit(stream, width),
    }
}

fn decode_row_end_of_row_bit(stream: &[u8], width: u16) -> Vec<(u16, u8)> {
    let mut pixels = vec![];
    let mut pos = 0usize;

    loop {
        let Some(&len_byte) = stream.get(pos) else {
            break;
        };
        let Some(&first_x) = stream.get(pos + 1) else {
            break;
        };
        pos += 2;

        let run_len = (len_byte & 0x7F) as usize;

        for i in 0..run_len {
            let Some(&palette_index) = stream.get(pos + i) else {
                return pixels;
            };

            let x = first_x as u16 + i as u16;

            if x < width {
                pixels.push((x, palette_index));
            }
        }

        pos += run_len;

        if len_byte & 0x80 != 0 {
            break;
        }
    }

    pixels
}

fn decode_row_transparent_bit(stream: &[u8], width: u16) -> Vec<(u16, u8)> {
    let mut pixels = vec![];
    let mut pos = 0usize;
    let mut x = 0u16;

    while x < width {
        let Some(&control) = stream.get(pos) else {
            break;
        };
        pos += 1;

        let run_len = (control & 0x7F) as u16;

        if control & 0x80 != 0 {
            x = x.saturating_add(run_len);
            continue;
        }

        for _ in 0..run_len {
            let Some(&palette_index) = stream.get(pos) else {
                return pixels;
            };
            pos += 1;

            if x < width {
                pixels.push((x, palette_index));
            }

            x = x.saturating_add(1);
        }
    }

    pixels
}

/// Materializes one sprite: row-offset table, then one RLE stream per
/// non-empty row, resolved through the palette into an RGBA raster.
pub fn decode_sprite(
    data: &[u8],
    entry: &G1Entry,
    palette: &Palette,
    variant: RleVariant,
) -> Result<Raster, DecodeError> {
    if entry.is_empty() {
        return Err(DecodeError::EmptySprite);
    }

    let width = entry.width as u16;
    let height = entry.height as usize;
    let base = entry.offset as usize;

    let table_end = base + height * 2;
    let table = data
        .get(base..table_end)
        .ok_or(DecodeError::Truncated { offset: table_end })?;
    let (_, row_offsets) = parser::parse_row_offsets(table, height)
        .map_err(|_| DecodeError::Truncated { offset: table_end })?;

    let mut raster = Raster::transparent(width as u32, height as u32);

    for (row, &row_offset) in row_offsets.iter().enumerate() {
        if variant.is_empty_row(row_offset) {
            continue;
        }

        let row_start = base + row_offset as usize;
        let stream = data
            .get(row_start..)
            .ok_or(DecodeError::Truncated { offset: row_start })?;

        for (x, palette_index) in decode_row(stream, width, variant) {
            let color = palette.get(palette_index).ok_or(DecodeError::BadPaletteIndex {
                index: palette_index,
            })?;

            raster.put_opaque(x as u32, row as u32, color);
        }
    }

    Ok(raster)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn end_of_row_bit_single_run() {
        // 2 opaque pixels at x=1, end-of-row bit set
        let stream = [0x82, 0x01, 5, 9];

        let pixels = decode_row(&stream, 4, RleVariant::EndOfRowBit);

        assert_eq!(pixels, vec![(1, 5), (2, 9)]);
    }

    #[test]
    fn end_of_row_bit_stops_at_flag() {
        // trailing garbage after the flagged chunk must not be read
        let stream = [0x81, 0x00, 7, 0x01, 0x00, 42];

        let pixels = decode_row(&stream, 8, RleVariant::EndOfRowBit);

        assert_eq!(pixels, vec![(0, 7)]);
    }

    #[test]
    fn end_of_row_bit_clips_past_width() {
        let stream = [0x84, 0x02, 1, 2, 3, 4];

        let pixels = decode_row(&stream, 4, RleVariant::EndOfRowBit);

        assert_eq!(pixels, vec![(2, 1), (3, 2)]);
    }

    #[test]
    fn end_of_row_bit_soft_eof_mid_run() {
        // run claims 4 pixels but the stream holds 2
        let stream = [0x84, 0x00, 1, 2];

        let pixels = decode_row(&stream, 8, RleVariant::EndOfRowBit);

        assert_eq!(pixels, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn end_of_row_bit_empty_stream() {
        let pixels = decode_row(&[], 8, RleVariant::EndOfRowBit);

        assert!(pixels.is_empty());
    }

    #[test]
    fn transparent_bit_skip_then_draw() {
        // skip 2, then 2 opaque pixels
        let stream = [0x82, 0x02, 5, 9];

        let pixels = decode_row(&stream, 4, RleVariant::TransparentBit);

        assert_eq!(pixels, vec![(2, 5), (3, 9)]);
    }

    #[test]
    fn transparent_bit_stops_at_width() {
        // the cursor reaches width after the skip, nothing further is decoded
        let stream = [0x84, 0x02, 1, 2];

        let pixels = decode_row(&stream, 4, RleVariant::TransparentBit);

        assert!(pixels.is_empty());
    }

    #[test]
    fn transparent_bit_soft_eof_mid_run() {
        let stream = [0x03, 1];

        let pixels = decode_row(&stream, 8, RleVariant::TransparentBit);

        assert_eq!(pixels, vec![(0, 1)]);
    }

    #[test]
    fn zero_length_runs_make_progress() {
        // headers with a zero length still consume bytes and terminate
        let pixels = decode_row(&[0x00, 0x00, 0x80, 0x00], 8, RleVariant::EndOfRowBit);
        assert!(pixels.is_empty());

        let pixels = decode_row(&[0x00, 0x00, 0x00], 8, RleVariant::TransparentBit);
        assert!(pixels.is_empty());
    }
}
