//! dbc
//!
//! Typed access to the client database files of Wrath of the Lich
//! King. A DBC file is a flat array of fixed-size records followed by
//! a block of NUL-terminated strings; every column lives at a fixed
//! byte offset inside a record.
//!
//! Columns are described by small `Copy` field descriptors (see
//! [`field`]) which tables expose as associated constants:
//!
//! ```ignore
//! let mut locks = DbcFile::<Lock>::load("Lock.dbc")?;
//! locks.add(9001)?.set(Lock::TYPE.at(0), 1).set(Lock::INDEX.at(0), 6948);
//! ```

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::useless_conversion,
    clippy::unwrap_used,
    clippy::todo,
    clippy::unimplemented
)]

pub mod error;
pub mod field;
pub mod file;
pub mod header;
pub mod query;
pub mod strings;
pub mod tables;

pub use azerust_cell::{Locale, Relation};
pub use error::DbcError;
pub use field::{
    Array, Byte, ByteArray, Field, FieldMut, Float, FloatArray, Int, IntArray, Key, Loc, LocString,
    Scalar, Str, UInt, UIntArray,
};
pub use file::{DbcFile, DbcTable, Row, RowMut};
pub use query::DbcQuery;
