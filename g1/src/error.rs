use crate::types::G1Revision;

/// The container itself is structurally invalid. Fatal to the whole session,
/// no partial decode is attempted.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("File too short for a {revision:?} header")]
    TooShort { revision: G1Revision },
    #[error("Implausible entry count {entry_count} for a {file_len} byte container")]
    BadHeader { entry_count: u32, file_len: usize },
    #[error("No known G1 revision fits this container")]
    UnknownRevision,
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Sprite index {index} out of range. Container holds {entry_count} entries")]
    OutOfRange { index: u32, entry_count: u32 },
}

/// Per-sprite failures. A batch caller should continue past any of these.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Sprite has zero area")]
    EmptySprite,
    #[error("Sprite data at offset {offset} runs past the end of the container")]
    Truncated { offset: usize },
    #[error("Palette index {index} is outside the palette")]
    BadPaletteIndex { index: u8 },
    #[error(transparent)]
    Index(#[from] IndexError),
}
