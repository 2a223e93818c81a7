use std::path::PathBuf;

/// Full-revision container with three descriptors: a decodable 2x1 sprite, a
/// zero-area sprite, and a descriptor whose offset points past the file.
pub fn synthetic_container() -> Vec<u8> {
    let data_start = (8 + 3 * 16) as u32;

    let mut payload = vec![];
    payload.extend(2u16.to_le_bytes()); // the single row sits right after its table
    payload.extend([0x82, 0x00, 5, 9]);

    let mut out = vec![];
    out.extend(3u32.to_le_bytes());
    out.extend((payload.len() as u32).to_le_bytes());

    // entry 0: 2x1 sprite
    out.extend(data_start.to_le_bytes());
    out.extend(2i16.to_le_bytes());
    out.extend(1i16.to_le_bytes());
    out.extend([0u8; 8]); // x/y offsets, flags, zoomed_offset

    // entry 1: zero area
    out.extend(data_start.to_le_bytes());
    out.extend(0i16.to_le_bytes());
    out.extend(0i16.to_le_bytes());
    out.extend([0u8; 8]);

    // entry 2: offset past the end of the file
    out.extend(0x00FF_0000u32.to_le_bytes());
    out.extend(2i16.to_le_bytes());
    out.extend(2i16.to_le_bytes());
    out.extend([0u8; 8]);

    out.extend(&payload);

    out
}

pub fn write_synthetic_container(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("g1grab_test_{}.dat", tag));

    std::fs::write(&path, synthetic_container()).unwrap();

    path
}
