//! cell
//!
//! Primitives shared by the DBC and SQL table layers: query
//! relations and the client locales used by localized strings.

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

pub mod locale;
pub mod relation;

pub use locale::Locale;
pub use relation::Relation;
