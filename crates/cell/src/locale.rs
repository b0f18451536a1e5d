//! locale
//!
//! The client locales, in the order their strings appear in a
//! localized DBC column.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Number of string slots in a localized column, populated or not.
pub const LOCALE_SLOTS: usize = 16;

#[allow(non_camel_case_types)]
#[repr(u8)]
#[derive(
    EnumString,
    Display,
    EnumIter,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Locale {
    enUS = 0,
    koKR,
    frFR,
    deDE,
    zhCN,
    zhTW,
    esES,
    esMX,
    ruRU,
}

impl Locale {
    /// The slot this locale occupies in a localized column.
    pub fn slot(self) -> usize {
        usize::from(u8::from(self))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::enUS
    }
}
