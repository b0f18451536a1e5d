use crate::{
    field::{FloatArray, Int, IntArray, Key},
    file::DbcTable,
};

/// LightFloatBand.dbc, a keyframed float curve used by the lighting
/// system. `NUM` is the number of keyframes in use.
#[derive(Debug, Clone, Copy)]
pub struct LightfloatBand;

impl DbcTable for LightfloatBand {
    const TABLE_NAME: &'static str = "LightFloatBand";
    const FIELD_COUNT: u32 = 34;
    const RECORD_SIZE: usize = 136;
}

impl LightfloatBand {
    pub const ID: Key = Key::at(0);
    pub const NUM: Int = Int::at(4);
    pub const TIME: IntArray<16> = IntArray::at_offset(8);
    pub const DATA: FloatArray<16> = FloatArray::at_offset(72);
}
