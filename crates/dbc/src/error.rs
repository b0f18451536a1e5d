use thiserror::Error;

/// Errors that may occur when reading, writing or editing a DBC file.
#[derive(Error, Debug)]
pub enum DbcError {
    #[error("invalid magic {0:02X?}, expected WDBC")]
    InvalidMagic([u8; 4]),
    #[error("{table} expects {expected_fields} fields in {expected_size} bytes, file has {fields} in {size}")]
    LayoutMismatch {
        table: &'static str,
        expected_fields: u32,
        expected_size: usize,
        fields: u32,
        size: u32,
    },
    #[error("string block starts with {0:#04X} instead of NUL")]
    InvalidStringBlock(u8),
    #[error("truncated file, expected {expected} bytes but found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("{table} already has a row with id {id}")]
    DuplicateKey { table: &'static str, id: u32 },
    #[error("{table} has no row with id {id}")]
    NoSuchRow { table: &'static str, id: u32 },
    #[error("{table} has no ids left to allocate")]
    IdsExhausted { table: &'static str },
    #[error("file is too large to address")]
    TooLarge,
    #[error("could not encode header: {0}")]
    Header(#[from] bincode::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
