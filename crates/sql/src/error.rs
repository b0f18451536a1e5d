use thiserror::Error;

/// Errors that may occur when editing or persisting a SQL table.
#[derive(Error, Debug)]
pub enum SqlError {
    #[error("{table} has {expected} columns, row has {found}")]
    ColumnCount {
        table: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{table} has a {expected} column primary key, got {found} values")]
    KeyArity {
        table: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{table} already has a row with key {key}")]
    DuplicateKey { table: &'static str, key: String },
    #[error("{table} has no row with key {key}")]
    NoSuchRow { table: &'static str, key: String },
    #[error("persistence error {0}")]
    PersistError(String),
}
