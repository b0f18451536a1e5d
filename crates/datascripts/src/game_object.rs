//! game object
//!
//! The `type` column of `gameobject_template` decides what the 24 data
//! columns mean.

use azerust_sql::{GameObjectTemplate, SqlRow};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumIter, EnumString};

#[allow(non_camel_case_types)]
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    Display,
    EnumIter,
)]
pub enum GameObjectType {
    DOOR = 0,
    BUTTON = 1,
    QUESTGIVER = 2,
    CHEST = 3,
    BINDER = 4,
    GENERIC = 5,
    TRAP = 6,
    CHAIR = 7,
    SPELL_FOCUS = 8,
    TEXT = 9,
    GOOBER = 10,
    TRANSPORT = 11,
    AREADAMAGE = 12,
    CAMERA = 13,
    MAP_OBJECT = 14,
    MO_TRANSPORT = 15,
    DUEL_ARBITER = 16,
    FISHINGNODE = 17,
    SUMMONING_RITUAL = 18,
    MAILBOX = 19,
    DO_NOT_USE = 20,
    GUARDPOST = 21,
    SPELLCASTER = 22,
    MEETINGSTONE = 23,
    FLAGSTAND = 24,
    FISHINGHOLE = 25,
    FLAGDROP = 26,
    MINI_GAME = 27,
    DO_NOT_USE_2 = 28,
    CAPTURE_POINT = 29,
    AURA_GENERATOR = 30,
    DUNGEON_DIFFICULTY = 31,
    BARBER_CHAIR = 32,
    DESTRUCTIBLE_BUILDING = 33,
    GUILD_BANK = 34,
    TRAPDOOR = 35,
}

impl GameObjectType {
    /// The type of a template row, if it holds a known value.
    pub fn of(row: &SqlRow<'_, GameObjectTemplate>) -> Option<Self> {
        Self::try_from(row.get(GameObjectTemplate::TYPE)).ok()
    }
}
