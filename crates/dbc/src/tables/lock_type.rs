use crate::{
    field::{Key, Loc, Str},
    file::DbcTable,
};

/// LockType.dbc, the kinds of lock a skill can open (lockpicking,
/// herbalism, mining, ...).
#[derive(Debug, Clone, Copy)]
pub struct LockType;

impl DbcTable for LockType {
    const TABLE_NAME: &'static str = "LockType";
    const FIELD_COUNT: u32 = 53;
    const RECORD_SIZE: usize = 212;
}

impl LockType {
    pub const ID: Key = Key::at(0);
    pub const NAME: Loc = Loc::at(4);
    pub const RESOURCE_NAME: Loc = Loc::at(72);
    pub const VERB: Loc = Loc::at(140);
    pub const CURSOR_NAME: Str = Str::at(208);
}
