use crate::{
    cell::{SqlCell, SqlKeyCell},
    table::{Column, SqlTableDef},
    value::ColumnType,
};

#[derive(Debug, Clone, Copy)]
pub struct GameObjectLootTemplate;

impl SqlTableDef for GameObjectLootTemplate {
    const TABLE_NAME: &'static str = "gameobject_loot_template";
    const COLUMNS: &'static [Column] = &[
        Column::new("Entry", ColumnType::UInt),
        Column::new("Item", ColumnType::UInt),
        Column::new("Reference", ColumnType::UInt),
        Column::new("Chance", ColumnType::Float),
        Column::new("QuestRequired", ColumnType::Int),
        Column::new("LootMode", ColumnType::UInt),
        Column::new("GroupId", ColumnType::UInt),
        Column::new("MinCount", ColumnType::UInt),
        Column::new("MaxCount", ColumnType::UInt),
        Column::new("Comment", ColumnType::Text),
    ];
    const PRIMARY_KEY: &'static [usize] = &[0, 1];
}

impl GameObjectLootTemplate {
    pub const ENTRY: SqlKeyCell<u32> = SqlKeyCell::new(0);
    pub const ITEM: SqlKeyCell<u32> = SqlKeyCell::new(1);
    /// Entry in reference_loot_template, 0 for a plain item drop.
    pub const REFERENCE: SqlCell<u32> = SqlCell::new(2);
    pub const CHANCE: SqlCell<f32> = SqlCell::new(3);
    pub const QUEST_REQUIRED: SqlCell<i8> = SqlCell::new(4);
    pub const LOOT_MODE: SqlCell<u16> = SqlCell::new(5);
    pub const GROUP_ID: SqlCell<u8> = SqlCell::new(6);
    pub const MIN_COUNT: SqlCell<u8> = SqlCell::new(7);
    pub const MAX_COUNT: SqlCell<u8> = SqlCell::new(8);
    pub const COMMENT: SqlCell<String> = SqlCell::new(9);
}
