//! sql
//!
//! Typed access to rows of the server's world database. Tables are held
//! in memory as rows of [`SqlValue`]s; columns are addressed through
//! typed cells, and primary key cells are read-only so a key only changes
//! by cloning a row.
//!
//! Loading and saving is delegated to a [`TableStore`].

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

pub mod cell;
pub mod error;
pub mod query;
pub mod store;
pub mod table;
pub mod tables;
pub mod value;

pub use azerust_cell::Relation;
pub use cell::{SqlCell, SqlColumn, SqlKeyCell};
pub use error::SqlError;
pub use query::SqlQuery;
pub use store::{MemoryTableStore, TableStore};
pub use table::{Column, RowState, SqlRow, SqlRowMut, SqlTable, SqlTableDef};
pub use tables::{GameObjectLootTemplate, GameObjectTemplate};
pub use value::{ColumnType, SqlType, SqlValue};
