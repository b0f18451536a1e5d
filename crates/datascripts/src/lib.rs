//! datascripts
//!
//! Game semantics on top of the raw client and world tables: locks,
//! spell power costs and professions, plus the enums content scripts
//! need to talk about factions, stats and game objects.
//!
//! A [`Dataset`] bundles every table the object model touches together
//! with the [`Ids`] allocator, and loads and saves them as a unit.

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

pub mod conf;
pub mod dataset;
pub mod faction;
pub mod game_object;
pub mod ids;
pub mod lock;
pub mod profession;
pub mod spell_power;
pub mod stats;

pub use conf::DatasetConfig;
pub use dataset::{Dataset, Dbc, Sql};
pub use faction::CreatureFactionTemplate;
pub use game_object::GameObjectType;
pub use ids::Ids;
pub use lock::{Lock, LockIndex, LockIndexType, LockedObject};
pub use profession::{
    DefaultProfession, Profession, ProfessionKind, ProfessionTier, Professions,
    SkillRaceClassFlags,
};
pub use spell_power::{PowerCost, PowerType, SpellPower};
pub use stats::StatType;
