use crate::{
    field::{Int, Key, Loc},
    file::DbcTable,
};

/// SkillLine.dbc
#[derive(Debug, Clone, Copy)]
pub struct SkillLine;

impl DbcTable for SkillLine {
    const TABLE_NAME: &'static str = "SkillLine";
    const FIELD_COUNT: u32 = 56;
    const RECORD_SIZE: usize = 224;
}

impl SkillLine {
    pub const ID: Key = Key::at(0);
    /// SkillLineCategory: 11 for professions, 9 for secondary skills.
    pub const CATEGORY: Int = Int::at(4);
    pub const SKILL_COSTS_ID: Int = Int::at(8);
    pub const DISPLAY_NAME: Loc = Loc::at(12);
    pub const DESCRIPTION: Loc = Loc::at(80);
    pub const SPELL_ICON_ID: Int = Int::at(148);
    pub const ALTERNATE_VERB: Loc = Loc::at(152);
    /// Whether the trade skill window can be linked in chat.
    pub const CAN_LINK: Int = Int::at(220);
}
