use crate::{
    field::{IntArray, Key},
    file::DbcTable,
};

/// Number of requirement slots on a lock.
pub const LOCK_INDICES: usize = 8;

/// Lock.dbc
///
/// Each of the eight slots is a requirement to open the lock. `TYPE`
/// says how the other three columns of the slot are interpreted:
/// 0 is unused, 1 means `INDEX` is an item id and 2 means `INDEX` is a
/// LockType id with `SKILL` as the required skill level.
#[derive(Debug, Clone, Copy)]
pub struct Lock;

impl DbcTable for Lock {
    const TABLE_NAME: &'static str = "Lock";
    const FIELD_COUNT: u32 = 33;
    const RECORD_SIZE: usize = 132;
}

impl Lock {
    pub const ID: Key = Key::at(0);
    pub const TYPE: IntArray<LOCK_INDICES> = IntArray::at_offset(4);
    pub const INDEX: IntArray<LOCK_INDICES> = IntArray::at_offset(36);
    pub const SKILL: IntArray<LOCK_INDICES> = IntArray::at_offset(68);
    pub const ACTION: IntArray<LOCK_INDICES> = IntArray::at_offset(100);
}
