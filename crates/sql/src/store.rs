use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use tracing::debug;

use crate::{
    error::SqlError,
    query::SqlQuery,
    table::{SqlTable, SqlTableDef},
    value::SqlValue,
};

/// Storage backing a set of SQL tables.
#[async_trait]
pub trait TableStore {
    /// Load every row of a table.
    async fn load<T: SqlTableDef>(&self) -> Result<SqlTable<T>, SqlError>;

    /// Load only the rows matching `query`.
    async fn load_where<T: SqlTableDef>(&self, query: &SqlQuery<T>)
        -> Result<SqlTable<T>, SqlError>;

    /// Persist pending writes and deletes, then mark the table clean.
    /// Nothing is marked clean if the save fails.
    async fn save<T: SqlTableDef>(&self, table: &mut SqlTable<T>) -> Result<(), SqlError>;
}

/// A [`TableStore`] holding rows in memory, keyed by table name.
#[derive(Debug, Default)]
pub struct MemoryTableStore {
    tables: Mutex<HashMap<&'static str, Vec<Vec<SqlValue>>>>,
}

impl MemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table with rows given in column order.
    pub fn insert_rows<T: SqlTableDef>(&self, rows: Vec<Vec<SqlValue>>) -> Result<(), SqlError> {
        self.tables()?.insert(T::TABLE_NAME, rows);
        Ok(())
    }

    /// The rows currently stored for a table.
    pub fn stored_rows<T: SqlTableDef>(&self) -> Result<Vec<Vec<SqlValue>>, SqlError> {
        Ok(self
            .tables()?
            .get(T::TABLE_NAME)
            .cloned()
            .unwrap_or_default())
    }

    fn tables(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<&'static str, Vec<Vec<SqlValue>>>>, SqlError> {
        self.tables
            .lock()
            .map_err(|e| SqlError::PersistError(e.to_string()))
    }
}

#[async_trait]
impl TableStore for MemoryTableStore {
    async fn load<T: SqlTableDef>(&self) -> Result<SqlTable<T>, SqlError> {
        let rows = self.stored_rows::<T>()?;
        SqlTable::from_rows(rows)
    }

    async fn load_where<T: SqlTableDef>(
        &self,
        query: &SqlQuery<T>,
    ) -> Result<SqlTable<T>, SqlError> {
        let table = self.load::<T>().await?;
        let rows = table
            .query_all(query)
            .into_iter()
            .map(|row| row.values().to_vec())
            .collect();
        SqlTable::from_rows(rows)
    }

    async fn save<T: SqlTableDef>(&self, table: &mut SqlTable<T>) -> Result<(), SqlError> {
        {
            let mut tables = self.tables()?;
            let stored = tables.entry(T::TABLE_NAME).or_default();
            for keys in table.pending_deletes() {
                stored.retain(|values| !same_key::<T>(values, keys));
            }
            for row in table.pending_writes() {
                let keys = row.keys();
                match stored.iter_mut().find(|values| same_key::<T>(values, &keys)) {
                    Some(values) => *values = row.values().to_vec(),
                    None => stored.push(row.values().to_vec()),
                }
            }
            debug!("Saved {} to memory", T::TABLE_NAME);
        }
        table.mark_clean();
        Ok(())
    }
}

fn same_key<T: SqlTableDef>(values: &[SqlValue], keys: &[SqlValue]) -> bool {
    T::PRIMARY_KEY
        .iter()
        .zip(keys)
        .all(|(column, key)| &values[*column] == key)
}
