use std::{
    collections::HashMap,
    fmt::{self, Debug},
    marker::PhantomData,
};

use tracing::{debug, trace};

use crate::{
    cell::{SqlCell, SqlColumn},
    error::SqlError,
    query::SqlQuery,
    value::{ColumnType, SqlType, SqlValue},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnType,
}

impl Column {
    pub const fn new(name: &'static str, kind: ColumnType) -> Self {
        Self { name, kind }
    }
}

/// The layout of a SQL table.
pub trait SqlTableDef: Copy + Debug + Send + Sync + 'static {
    const TABLE_NAME: &'static str;
    const COLUMNS: &'static [Column];
    /// Indices into `COLUMNS`.
    const PRIMARY_KEY: &'static [usize];

    fn column_index(name: &str) -> Option<usize> {
        Self::COLUMNS.iter().position(|c| c.name == name)
    }
}

/// Where a row stands relative to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Unchanged since it was loaded or saved.
    Clean,
    /// Loaded, then modified.
    Dirty,
    /// Created in memory.
    New,
}

#[derive(Debug, Clone)]
struct RowData {
    values: Vec<SqlValue>,
    state: RowState,
    deleted: bool,
}

/// An in-memory SQL table with change tracking.
pub struct SqlTable<T> {
    rows: Vec<RowData>,
    keys: HashMap<Vec<SqlValue>, usize>,
    deletes: Vec<Vec<SqlValue>>,
    _table: PhantomData<T>,
}

impl<T: SqlTableDef> Debug for SqlTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlTable")
            .field("table", &T::TABLE_NAME)
            .field("rows", &self.len())
            .field("pending_deletes", &self.deletes.len())
            .finish()
    }
}

impl<T: SqlTableDef> Default for SqlTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn render_key(values: &[SqlValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<T: SqlTableDef> SqlTable<T> {
    pub fn new() -> Self {
        Self {
            rows: vec![],
            keys: HashMap::new(),
            deletes: vec![],
            _table: PhantomData,
        }
    }

    /// Build a table from stored rows, each given in column order.
    pub fn from_rows(rows: Vec<Vec<SqlValue>>) -> Result<Self, SqlError> {
        let mut table = Self::new();
        for values in rows {
            let values = Self::coerce_row(values)?;
            table.insert(values, RowState::Clean)?;
        }
        debug!("Built {} with {} rows", T::TABLE_NAME, table.len());
        Ok(table)
    }

    /// Number of live rows.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = SqlRow<'_, T>> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.deleted)
            .map(move |(index, _)| SqlRow { table: self, index })
    }

    pub fn first(&self) -> Option<SqlRow<'_, T>> {
        self.rows().next()
    }

    pub fn find(&self, keys: &[SqlValue]) -> Option<SqlRow<'_, T>> {
        let index = self.index_of(keys)?;
        Some(SqlRow { table: self, index })
    }

    pub fn find_mut(&mut self, keys: &[SqlValue]) -> Option<SqlRowMut<'_, T>> {
        let index = self.index_of(keys)?;
        Some(SqlRowMut { table: self, index })
    }

    /// Add a row under `keys`. The new row starts as a copy of the first
    /// row; an empty table falls back to column defaults.
    pub fn add(&mut self, keys: Vec<SqlValue>) -> Result<SqlRowMut<'_, T>, SqlError> {
        let template = match self.first() {
            Some(row) => row.values().to_vec(),
            None => T::COLUMNS.iter().map(|c| c.kind.default_value()).collect(),
        };
        self.insert_with_keys(template, keys)
    }

    /// Append a copy of the row at `source` under `keys`.
    pub fn clone_row(
        &mut self,
        source: &[SqlValue],
        keys: Vec<SqlValue>,
    ) -> Result<SqlRowMut<'_, T>, SqlError> {
        let template = self
            .find(source)
            .ok_or_else(|| SqlError::NoSuchRow {
                table: T::TABLE_NAME,
                key: render_key(source),
            })?
            .values()
            .to_vec();
        self.insert_with_keys(template, keys)
    }

    pub fn query_all(&self, query: &SqlQuery<T>) -> Vec<SqlRow<'_, T>> {
        self.rows()
            .filter(|row| query.matches(row.values()))
            .collect()
    }

    pub fn query_first(&self, query: &SqlQuery<T>) -> Option<SqlRow<'_, T>> {
        self.rows().find(|row| query.matches(row.values()))
    }

    /// Rows that must be written back: new and modified ones.
    pub fn pending_writes(&self) -> impl Iterator<Item = SqlRow<'_, T>> {
        self.rows().filter(|row| row.state() != RowState::Clean)
    }

    /// Primary keys of stored rows that were deleted.
    pub fn pending_deletes(&self) -> &[Vec<SqlValue>] {
        &self.deletes
    }

    /// Forget pending changes once they have been persisted.
    pub fn mark_clean(&mut self) {
        for row in &mut self.rows {
            row.state = RowState::Clean;
        }
        self.deletes.clear();
    }

    fn coerce_row(values: Vec<SqlValue>) -> Result<Vec<SqlValue>, SqlError> {
        if values.len() != T::COLUMNS.len() {
            return Err(SqlError::ColumnCount {
                table: T::TABLE_NAME,
                expected: T::COLUMNS.len(),
                found: values.len(),
            });
        }
        Ok(values
            .into_iter()
            .zip(T::COLUMNS)
            .map(|(v, c)| c.kind.coerce(v))
            .collect())
    }

    fn key_of(values: &[SqlValue]) -> Vec<SqlValue> {
        T::PRIMARY_KEY.iter().map(|i| values[*i].clone()).collect()
    }

    fn index_of(&self, keys: &[SqlValue]) -> Option<usize> {
        if keys.len() != T::PRIMARY_KEY.len() {
            return None;
        }
        let key = T::PRIMARY_KEY
            .iter()
            .zip(keys)
            .map(|(i, v)| T::COLUMNS[*i].kind.coerce(v.clone()))
            .collect::<Vec<_>>();
        self.keys.get(&key).copied()
    }

    fn insert_with_keys(
        &mut self,
        mut values: Vec<SqlValue>,
        keys: Vec<SqlValue>,
    ) -> Result<SqlRowMut<'_, T>, SqlError> {
        if keys.len() != T::PRIMARY_KEY.len() {
            return Err(SqlError::KeyArity {
                table: T::TABLE_NAME,
                expected: T::PRIMARY_KEY.len(),
                found: keys.len(),
            });
        }
        for (column, key) in T::PRIMARY_KEY.iter().zip(keys) {
            values[*column] = T::COLUMNS[*column].kind.coerce(key);
        }
        let index = self.insert(values, RowState::New)?;
        trace!("Added {} row {}", T::TABLE_NAME, render_key(&self.rows[index].keys::<T>()));
        Ok(SqlRowMut { table: self, index })
    }

    fn insert(&mut self, values: Vec<SqlValue>, state: RowState) -> Result<usize, SqlError> {
        let key = Self::key_of(&values);
        if self.keys.contains_key(&key) {
            return Err(SqlError::DuplicateKey {
                table: T::TABLE_NAME,
                key: render_key(&key),
            });
        }
        let index = self.rows.len();
        self.rows.push(RowData {
            values,
            state,
            deleted: false,
        });
        self.keys.insert(key, index);
        Ok(index)
    }
}

impl RowData {
    fn keys<T: SqlTableDef>(&self) -> Vec<SqlValue> {
        T::PRIMARY_KEY
            .iter()
            .map(|i| self.values[*i].clone())
            .collect()
    }
}

/// A read-only view of one row.
pub struct SqlRow<'a, T> {
    table: &'a SqlTable<T>,
    index: usize,
}

impl<'a, T> Clone for SqlRow<'a, T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table,
            index: self.index,
        }
    }
}

impl<'a, T> Copy for SqlRow<'a, T> {}

impl<'a, T: SqlTableDef> Debug for SqlRow<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", T::TABLE_NAME, render_key(&self.keys()))
    }
}

impl<'a, T: SqlTableDef> SqlRow<'a, T> {
    pub fn get<C: SqlColumn>(&self, cell: C) -> C::Value {
        C::Value::from_value(&self.values()[cell.column()])
    }

    pub fn values(&self) -> &'a [SqlValue] {
        &self.table.rows[self.index].values
    }

    pub fn keys(&self) -> Vec<SqlValue> {
        self.table.rows[self.index].keys::<T>()
    }

    pub fn state(&self) -> RowState {
        self.table.rows[self.index].state
    }
}

/// A mutable view of one row.
pub struct SqlRowMut<'a, T> {
    table: &'a mut SqlTable<T>,
    index: usize,
}

impl<'a, T: SqlTableDef> Debug for SqlRowMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", T::TABLE_NAME, render_key(&self.keys()))
    }
}

impl<'a, T: SqlTableDef> SqlRowMut<'a, T> {
    pub fn get<C: SqlColumn>(&self, cell: C) -> C::Value {
        C::Value::from_value(&self.table.rows[self.index].values[cell.column()])
    }

    /// Write a column. Only [`SqlCell`]s are accepted, so primary keys
    /// cannot be overwritten in place.
    pub fn set<V: SqlType>(&mut self, cell: SqlCell<V>, value: impl Into<V>) -> &mut Self {
        let column = cell.column();
        let value: V = value.into();
        let row = &mut self.table.rows[self.index];
        row.values[column] = T::COLUMNS[column].kind.coerce(value.into_value());
        if row.state == RowState::Clean {
            row.state = RowState::Dirty;
        }
        self
    }

    pub fn keys(&self) -> Vec<SqlValue> {
        self.table.rows[self.index].keys::<T>()
    }

    pub fn state(&self) -> RowState {
        self.table.rows[self.index].state
    }

    /// Remove the row. Rows that exist in storage are remembered so the
    /// store can delete them on the next save.
    pub fn delete(self) {
        let keys = self.keys();
        let row = &mut self.table.rows[self.index];
        row.deleted = true;
        if row.state != RowState::New {
            self.table.deletes.push(keys.clone());
        }
        self.table.keys.remove(&SqlTable::<T>::key_of(&self.table.rows[self.index].values));
        trace!("Deleted {} row {}", T::TABLE_NAME, render_key(&keys));
    }

    pub fn as_row(&self) -> SqlRow<'_, T> {
        SqlRow {
            table: &*self.table,
            index: self.index,
        }
    }
}

#[cfg(test)]
mod test {
    use test_case::test_case;

    use super::{Column, RowState, SqlTable, SqlTableDef};
    use crate::{
        cell::{SqlCell, SqlKeyCell},
        error::SqlError,
        query::SqlQuery,
        value::{ColumnType, SqlValue},
        Relation,
    };

    #[derive(Debug, Clone, Copy)]
    struct Loot;

    impl SqlTableDef for Loot {
        const TABLE_NAME: &'static str = "loot";
        const COLUMNS: &'static [Column] = &[
            Column::new("Entry", ColumnType::UInt),
            Column::new("Item", ColumnType::UInt),
            Column::new("Chance", ColumnType::Float),
            Column::new("Comment", ColumnType::Text),
        ];
        const PRIMARY_KEY: &'static [usize] = &[0, 1];
    }

    const ENTRY: SqlKeyCell<u32> = SqlKeyCell::new(0);
    const ITEM: SqlKeyCell<u32> = SqlKeyCell::new(1);
    const CHANCE: SqlCell<f32> = SqlCell::new(2);
    const COMMENT: SqlCell<String> = SqlCell::new(3);

    fn key(entry: u32, item: u32) -> Vec<SqlValue> {
        vec![SqlValue::UInt(entry.into()), SqlValue::UInt(item.into())]
    }

    fn table() -> SqlTable<Loot> {
        SqlTable::from_rows(vec![
            vec![
                SqlValue::Int(1),
                SqlValue::Int(100),
                SqlValue::Float(50.0),
                SqlValue::Text("first".into()),
            ],
            vec![
                SqlValue::UInt(1),
                SqlValue::UInt(101),
                SqlValue::Float(25.0),
                SqlValue::Null,
            ],
        ])
        .unwrap()
    }

    #[test]
    pub fn rows_are_coerced_and_indexed() {
        let table = table();
        let row = table.find(&key(1, 100)).unwrap();
        assert_eq!(row.get(ENTRY), 1);
        assert_eq!(row.get(ITEM), 100);
        assert_eq!(row.get(COMMENT), "first");
        assert!(matches!(row.values()[0], SqlValue::UInt(1)));
        assert_eq!(table.find(&key(1, 101)).unwrap().get(COMMENT), "");
        assert!(table.find(&key(2, 100)).is_none());
        assert!(table.find(&[SqlValue::UInt(1)]).is_none());
    }

    #[test]
    pub fn rejects_bad_rows() {
        assert!(matches!(
            SqlTable::<Loot>::from_rows(vec![vec![SqlValue::UInt(1)]]),
            Err(SqlError::ColumnCount {
                expected: 4,
                found: 1,
                ..
            })
        ));
        let dup = vec![
            SqlValue::UInt(1),
            SqlValue::UInt(1),
            SqlValue::Null,
            SqlValue::Null,
        ];
        assert!(matches!(
            SqlTable::<Loot>::from_rows(vec![dup.clone(), dup]),
            Err(SqlError::DuplicateKey { .. })
        ));
    }

    #[test]
    pub fn add_copies_the_first_row() {
        let mut table = table();
        let row = table.add(key(2, 200)).unwrap();
        assert_eq!(row.get(CHANCE), 50.0);
        assert_eq!(row.get(COMMENT), "first");
        assert_eq!(row.state(), RowState::New);

        assert!(matches!(
            table.add(key(1, 100)),
            Err(SqlError::DuplicateKey { .. })
        ));
        assert!(matches!(
            table.add(vec![SqlValue::UInt(3)]),
            Err(SqlError::KeyArity {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    pub fn add_to_empty_table_uses_defaults() {
        let mut table = SqlTable::<Loot>::new();
        table.add(key(5, 6)).unwrap().set(CHANCE, 0.5f32);
        let row = table.find(&key(5, 6)).unwrap();
        assert_eq!(row.get(CHANCE), 0.5);
        assert_eq!(row.get(COMMENT), "");
    }

    #[test]
    pub fn clone_row_keeps_source() {
        let mut table = table();
        table
            .clone_row(&key(1, 101), key(9, 101))
            .unwrap()
            .set(COMMENT, "copy".to_string());

        assert_eq!(table.find(&key(9, 101)).unwrap().get(CHANCE), 25.0);
        assert_eq!(table.find(&key(1, 101)).unwrap().get(COMMENT), "");
        assert!(matches!(
            table.clone_row(&key(7, 7), key(8, 8)),
            Err(SqlError::NoSuchRow { .. })
        ));
    }

    #[test]
    pub fn tracks_changes() {
        let mut table = table();
        assert_eq!(table.pending_writes().count(), 0);

        table.find_mut(&key(1, 100)).unwrap().set(CHANCE, 10.0f32);
        table.add(key(3, 300)).unwrap();
        table.find_mut(&key(1, 101)).unwrap().delete();
        table.find_mut(&key(3, 300)).unwrap().delete();

        let writes = table
            .pending_writes()
            .map(|r| (r.keys(), r.state()))
            .collect::<Vec<_>>();
        assert_eq!(writes, [(key(1, 100), RowState::Dirty)]);
        assert_eq!(table.pending_deletes(), [key(1, 101)]);
        assert_eq!(table.len(), 1);

        table.mark_clean();
        assert_eq!(table.pending_writes().count(), 0);
        assert!(table.pending_deletes().is_empty());
    }

    #[test]
    pub fn queries() {
        let mut table = table();
        table.add(key(2, 100)).unwrap().set(CHANCE, 5.0f32);

        let query = SqlQuery::<Loot>::new().filter(ITEM, 100);
        let entries = table
            .query_all(&query)
            .iter()
            .map(|r| r.get(ENTRY))
            .collect::<Vec<_>>();
        assert_eq!(entries, [1, 2]);

        let query = SqlQuery::<Loot>::new()
            .filter(ITEM, 100)
            .filter(CHANCE, Relation::Lt(10.0));
        assert_eq!(table.query_first(&query).map(|r| r.get(ENTRY)), Some(2));

        table.find_mut(&key(2, 100)).unwrap().delete();
        assert!(table.query_first(&query).is_none());
    }

    #[test]
    pub fn deleted_key_can_be_added_again() {
        let mut table = table();
        table.find_mut(&key(1, 101)).unwrap().delete();
        table.add(key(1, 101)).unwrap().set(CHANCE, 75.0f32);

        assert_eq!(table.pending_deletes(), [key(1, 101)]);
        let writes = table
            .pending_writes()
            .map(|r| (r.keys(), r.state(), r.get(CHANCE)))
            .collect::<Vec<_>>();
        assert_eq!(writes, [(key(1, 101), RowState::New, 75.0)]);
        assert_eq!(table.find(&key(1, 101)).unwrap().get(CHANCE), 75.0);
        assert_eq!(table.len(), 2);
    }

    #[test_case(Relation::Ne(String::from("first")), true ; "ne keeps null")]
    #[test_case(Relation::Eq(String::from("first")).negate(), true ; "negated eq keeps null")]
    #[test_case(Relation::Lt(String::from("z")), false ; "lt drops null")]
    #[test_case(Relation::Lt(String::from("z")).negate(), true ; "negated lt keeps null")]
    #[test_case(Relation::In(vec![String::from("first")]), false ; "in drops null")]
    pub fn null_cells_in_queries(relation: Relation<String>, null_row_matches: bool) {
        let table = table();
        let query = SqlQuery::<Loot>::new().filter(COMMENT, relation);
        let items = table
            .query_all(&query)
            .iter()
            .map(|r| r.get(ITEM))
            .collect::<Vec<_>>();
        assert_eq!(items.contains(&101), null_row_matches);
    }
}
