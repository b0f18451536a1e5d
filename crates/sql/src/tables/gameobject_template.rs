use crate::{
    cell::{SqlCell, SqlKeyCell},
    table::{Column, SqlTableDef},
    value::ColumnType,
};

/// Number of `DataN` columns. Their meaning depends on the object type.
pub const GAMEOBJECT_DATA_COLUMNS: usize = 24;

const FIRST_DATA_COLUMN: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct GameObjectTemplate;

impl SqlTableDef for GameObjectTemplate {
    const TABLE_NAME: &'static str = "gameobject_template";
    const COLUMNS: &'static [Column] = &[
        Column::new("entry", ColumnType::UInt),
        Column::new("type", ColumnType::UInt),
        Column::new("displayId", ColumnType::UInt),
        Column::new("name", ColumnType::Text),
        Column::new("IconName", ColumnType::Text),
        Column::new("castBarCaption", ColumnType::Text),
        Column::new("unk1", ColumnType::Text),
        Column::new("size", ColumnType::Float),
        Column::new("Data0", ColumnType::Int),
        Column::new("Data1", ColumnType::Int),
        Column::new("Data2", ColumnType::Int),
        Column::new("Data3", ColumnType::Int),
        Column::new("Data4", ColumnType::Int),
        Column::new("Data5", ColumnType::Int),
        Column::new("Data6", ColumnType::Int),
        Column::new("Data7", ColumnType::Int),
        Column::new("Data8", ColumnType::Int),
        Column::new("Data9", ColumnType::Int),
        Column::new("Data10", ColumnType::Int),
        Column::new("Data11", ColumnType::Int),
        Column::new("Data12", ColumnType::Int),
        Column::new("Data13", ColumnType::Int),
        Column::new("Data14", ColumnType::Int),
        Column::new("Data15", ColumnType::Int),
        Column::new("Data16", ColumnType::Int),
        Column::new("Data17", ColumnType::Int),
        Column::new("Data18", ColumnType::Int),
        Column::new("Data19", ColumnType::Int),
        Column::new("Data20", ColumnType::Int),
        Column::new("Data21", ColumnType::Int),
        Column::new("Data22", ColumnType::Int),
        Column::new("Data23", ColumnType::Int),
        Column::new("AIName", ColumnType::Text),
        Column::new("ScriptName", ColumnType::Text),
        Column::new("VerifiedBuild", ColumnType::Int),
    ];
    const PRIMARY_KEY: &'static [usize] = &[0];
}

impl GameObjectTemplate {
    pub const ENTRY: SqlKeyCell<u32> = SqlKeyCell::new(0);
    /// See `GameObjectType`.
    pub const TYPE: SqlCell<u8> = SqlCell::new(1);
    pub const DISPLAY_ID: SqlCell<u32> = SqlCell::new(2);
    pub const NAME: SqlCell<String> = SqlCell::new(3);
    pub const ICON_NAME: SqlCell<String> = SqlCell::new(4);
    pub const CAST_BAR_CAPTION: SqlCell<String> = SqlCell::new(5);
    pub const UNK1: SqlCell<String> = SqlCell::new(6);
    pub const SIZE: SqlCell<f32> = SqlCell::new(7);
    pub const AI_NAME: SqlCell<String> = SqlCell::new(32);
    pub const SCRIPT_NAME: SqlCell<String> = SqlCell::new(33);
    pub const VERIFIED_BUILD: SqlCell<i32> = SqlCell::new(34);

    /// The `Data{index}` column.
    ///
    /// # Panics
    ///
    /// If `index` is not below [`GAMEOBJECT_DATA_COLUMNS`].
    pub const fn data(index: usize) -> SqlCell<i32> {
        assert!(index < GAMEOBJECT_DATA_COLUMNS, "gameobject data index out of range");
        SqlCell::new(FIRST_DATA_COLUMN + index)
    }
}
