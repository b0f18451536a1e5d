use crate::{
    field::{FloatArray, Int, Key},
    file::DbcTable,
};

#[derive(Debug, Clone, Copy)]
pub struct ObjectEffectModifier;

impl DbcTable for ObjectEffectModifier {
    const TABLE_NAME: &'static str = "ObjectEffectModifier";
    const FIELD_COUNT: u32 = 8;
    const RECORD_SIZE: usize = 32;
}

impl ObjectEffectModifier {
    pub const ID: Key = Key::at(0);
    pub const INPUT_TYPE: Int = Int::at(4);
    pub const MAP_TYPE: Int = Int::at(8);
    pub const OUTPUT_TYPE: Int = Int::at(12);
    pub const PARAM: FloatArray<4> = FloatArray::at_offset(16);
}
