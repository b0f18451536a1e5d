use crate::{
    field::{Int, Key, UInt},
    file::DbcTable,
};

/// SkillRaceClassInfo.dbc: which races and classes may learn a skill
/// line, and with which tiers.
#[derive(Debug, Clone, Copy)]
pub struct SkillRaceClassInfo;

impl DbcTable for SkillRaceClassInfo {
    const TABLE_NAME: &'static str = "SkillRaceClassInfo";
    const FIELD_COUNT: u32 = 8;
    const RECORD_SIZE: usize = 32;
}

impl SkillRaceClassInfo {
    pub const ID: Key = Key::at(0);
    pub const SKILL_ID: Int = Int::at(4);
    pub const RACE_MASK: UInt = UInt::at(8);
    pub const CLASS_MASK: UInt = UInt::at(12);
    pub const FLAGS: UInt = UInt::at(16);
    pub const MIN_LEVEL: Int = Int::at(20);
    pub const SKILL_TIER_ID: Int = Int::at(24);
    pub const SKILL_COST_INDEX: Int = Int::at(28);
}
