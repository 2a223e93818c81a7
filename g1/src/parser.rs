use nom::{
    combinator::map,
    multi::count,
    number::complete::{le_i16, le_u16, le_u32},
    IResult as _IResult, Parser,
};

use crate::types::{G1Entry, G1Header, G1Revision};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

pub fn parse_header(i: &'_ [u8], revision: G1Revision) -> IResult<'_, G1Header> {
    match revision {
        G1Revision::Full => map((le_u32, le_u32), |(entry_count, data_size)| G1Header {
            revision,
            entry_count,
            data_size: Some(data_size),
        })
        .parse(i),
        G1Revision::Compact => map(le_u32, |entry_count| G1Header {
            revision,
            entry_count,
            data_size: None,
        })
        .parse(i),
    }
}

pub fn parse_entry(i: &'_ [u8], revision: G1Revision) -> IResult<'_, G1Entry> {
    match revision {
        G1Revision::Full => map(
            (le_u32, le_i16, le_i16, le_i16, le_i16, le_u16, le_u16),
            |(offset, width, height, x_offset, y_offset, flags, zoomed_offset)| G1Entry {
                offset,
                width,
                height,
                x_offset,
                y_offset,
                flags,
                zoomed_offset,
            },
        )
        .parse(i),
        G1Revision::Compact => map(
            (le_u32, le_i16, le_i16, le_i16, le_i16),
            |(offset, width, height, x_offset, y_offset)| G1Entry {
                offset,
                width,
                height,
                x_offset,
                y_offset,
                flags: 0,
                zoomed_offset: 0,
            },
        )
        .parse(i),
    }
}

pub fn parse_entries(
    i: &'_ [u8],
    revision: G1Revision,
    entry_count: usize,
) -> IResult<'_, Vec<G1Entry>> {
    count(move |i| parse_entry(i, revision), entry_count).parse(i)
}

pub fn parse_row_offsets(i: &'_ [u8], height: usize) -> IResult<'_, Vec<u16>> {
    count(le_u16, height).parse(i)
}
