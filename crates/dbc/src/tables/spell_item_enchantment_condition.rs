use crate::{
    field::{ByteArray, IntArray, Key},
    file::DbcTable,
};

/// SpellItemEnchantmentCondition.dbc, the gem socket conditions of meta
/// gems. The byte columns are packed, so the int arrays that follow
/// them start at odd offsets.
#[derive(Debug, Clone, Copy)]
pub struct SpellItemEnchantmentCondition;

impl DbcTable for SpellItemEnchantmentCondition {
    const TABLE_NAME: &'static str = "SpellItemEnchantmentCondition";
    const FIELD_COUNT: u32 = 31;
    const RECORD_SIZE: usize = 64;
}

impl SpellItemEnchantmentCondition {
    pub const ID: Key = Key::at(0);
    pub const LT_OPERAND_TYPE: ByteArray<5> = ByteArray::at_offset(4);
    pub const LT_OPERAND: IntArray<5> = IntArray::at_offset(9);
    pub const OPERATOR: ByteArray<5> = ByteArray::at_offset(29);
    pub const RT_OPERAND_TYPE: ByteArray<5> = ByteArray::at_offset(34);
    pub const RT_OPERAND: IntArray<5> = IntArray::at_offset(39);
    pub const LOGIC: ByteArray<5> = ByteArray::at_offset(59);
}
