use crate::{
    field::{Int, Key},
    file::DbcTable,
};

/// SpellRuneCost.dbc
#[derive(Debug, Clone, Copy)]
pub struct SpellRuneCost;

impl DbcTable for SpellRuneCost {
    const TABLE_NAME: &'static str = "SpellRuneCost";
    const FIELD_COUNT: u32 = 5;
    const RECORD_SIZE: usize = 20;
}

impl SpellRuneCost {
    pub const ID: Key = Key::at(0);
    pub const BLOOD: Int = Int::at(4);
    pub const UNHOLY: Int = Int::at(8);
    pub const FROST: Int = Int::at(12);
    /// Runic power generated by the spell.
    pub const RUNIC_POWER: Int = Int::at(16);
}
