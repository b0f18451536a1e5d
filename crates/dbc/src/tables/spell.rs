use crate::{
    field::{Int, IntArray, Key, Loc, UInt},
    file::DbcTable,
};

/// Spell.dbc
///
/// Only the columns used by the object model are named here; the record
/// keeps all 234 columns and unnamed ones are carried through untouched.
#[derive(Debug, Clone, Copy)]
pub struct Spell;

impl DbcTable for Spell {
    const TABLE_NAME: &'static str = "Spell";
    const FIELD_COUNT: u32 = 234;
    const RECORD_SIZE: usize = 936;
}

impl Spell {
    pub const ID: Key = Key::at(0);
    pub const CATEGORY: Int = Int::at(4);
    pub const DISPEL_TYPE: Int = Int::at(8);
    pub const MECHANIC: Int = Int::at(12);
    pub const ATTRIBUTES: UInt = UInt::at(16);
    pub const CASTING_TIME_INDEX: Int = Int::at(112);
    pub const RECOVERY_TIME: Int = Int::at(116);
    pub const DURATION_INDEX: Int = Int::at(160);

    // power and cost
    pub const POWER_TYPE: Int = Int::at(164);
    pub const MANA_COST: Int = Int::at(168);
    pub const MANA_COST_PER_LEVEL: Int = Int::at(172);
    pub const MANA_PER_SECOND: Int = Int::at(176);
    pub const MANA_PER_SECOND_PER_LEVEL: Int = Int::at(180);
    pub const RANGE_INDEX: Int = Int::at(184);

    // effects
    pub const EFFECT: IntArray<3> = IntArray::at_offset(284);
    pub const EFFECT_DIE_SIDES: IntArray<3> = IntArray::at_offset(296);
    pub const EFFECT_BASE_POINTS: IntArray<3> = IntArray::at_offset(320);
    pub const IMPLICIT_TARGET_A: IntArray<3> = IntArray::at_offset(344);
    pub const IMPLICIT_TARGET_B: IntArray<3> = IntArray::at_offset(356);
    pub const EFFECT_AURA: IntArray<3> = IntArray::at_offset(380);
    pub const EFFECT_MISC_VALUE: IntArray<3> = IntArray::at_offset(440);
    pub const EFFECT_MISC_VALUE_B: IntArray<3> = IntArray::at_offset(452);
    pub const EFFECT_TRIGGER_SPELL: IntArray<3> = IntArray::at_offset(464);

    pub const SPELL_ICON_ID: Int = Int::at(532);
    pub const NAME: Loc = Loc::at(544);
    pub const NAME_SUBTEXT: Loc = Loc::at(612);
    pub const DESCRIPTION: Loc = Loc::at(680);
    pub const AURA_DESCRIPTION: Loc = Loc::at(748);
    pub const MANA_COST_PCT: Int = Int::at(816);
    pub const SCHOOL_MASK: UInt = UInt::at(900);
    /// Pointer into SpellRuneCost, 0 for none.
    pub const RUNE_COST_ID: Int = Int::at(904);
    pub const SPELL_DIFFICULTY_ID: Int = Int::at(932);
}
