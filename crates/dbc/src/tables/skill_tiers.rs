use crate::{
    field::{IntArray, Key},
    file::DbcTable,
};

pub const SKILL_TIER_SLOTS: usize = 16;

/// SkillTiers.dbc: the maximum skill value of each tier.
#[derive(Debug, Clone, Copy)]
pub struct SkillTiers;

impl DbcTable for SkillTiers {
    const TABLE_NAME: &'static str = "SkillTiers";
    const FIELD_COUNT: u32 = 33;
    const RECORD_SIZE: usize = 132;
}

impl SkillTiers {
    pub const ID: Key = Key::at(0);
    pub const COST: IntArray<SKILL_TIER_SLOTS> = IntArray::at_offset(4);
    pub const VALUE: IntArray<SKILL_TIER_SLOTS> = IntArray::at_offset(68);
}
