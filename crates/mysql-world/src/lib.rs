//! mysql-world
//!
//! A [`TableStore`] backed by the server's MySQL world database.

use async_trait::async_trait;
use azerust_sql::{ColumnType, SqlError, SqlQuery, SqlTable, SqlTableDef, SqlValue, TableStore};
use sqlx::{
    mysql::{MySqlArguments, MySqlRow},
    query::Query,
    MySql, MySqlPool, Row,
};
use tracing::{debug, instrument, trace};

pub mod statements;

#[derive(Debug, Clone)]
pub struct MySqlTableStore {
    pool: MySqlPool,
}

impl MySqlTableStore {
    pub fn new(pool: MySqlPool) -> Self {
        debug!("Starting table store");
        Self { pool }
    }

    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        Ok(Self::new(MySqlPool::connect(url).await?))
    }

    async fn fetch<T: SqlTableDef>(
        &self,
        sql: &str,
        binds: &[SqlValue],
    ) -> Result<SqlTable<T>, SqlError> {
        let mut query = sqlx::query(sql);
        for value in binds {
            query = bind(query, value);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(persist)?;
        debug!("Loaded {} rows from {}", rows.len(), T::TABLE_NAME);

        let rows = rows
            .iter()
            .map(decode_row::<T>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(persist)?;
        SqlTable::from_rows(rows)
    }
}

#[async_trait]
impl TableStore for MySqlTableStore {
    #[instrument(skip(self))]
    async fn load<T: SqlTableDef>(&self) -> Result<SqlTable<T>, SqlError> {
        self.fetch(&statements::select::<T>(), &[]).await
    }

    #[instrument(skip(self))]
    async fn load_where<T: SqlTableDef>(
        &self,
        query: &SqlQuery<T>,
    ) -> Result<SqlTable<T>, SqlError> {
        let (sql, binds) = statements::select_where(query);
        self.fetch(&sql, &binds).await
    }

    #[instrument(skip(self, table))]
    async fn save<T: SqlTableDef>(&self, table: &mut SqlTable<T>) -> Result<(), SqlError> {
        let deletes = table.pending_deletes().to_vec();
        let writes = table
            .pending_writes()
            .map(|row| row.values().to_vec())
            .collect::<Vec<_>>();
        if deletes.is_empty() && writes.is_empty() {
            trace!("Nothing to save in {}", T::TABLE_NAME);
            return Ok(());
        }

        let delete_sql = statements::delete::<T>();
        let replace_sql = statements::replace::<T>();
        let mut tx = self.pool.begin().await.map_err(persist)?;
        for keys in &deletes {
            let mut query = sqlx::query(&delete_sql);
            for value in keys {
                query = bind(query, value);
            }
            query.execute(&mut tx).await.map_err(persist)?;
        }
        for values in &writes {
            let mut query = sqlx::query(&replace_sql);
            for value in values {
                query = bind(query, value);
            }
            query.execute(&mut tx).await.map_err(persist)?;
        }
        tx.commit().await.map_err(persist)?;

        debug!(
            "Saved {} rows and deleted {} rows in {}",
            writes.len(),
            deletes.len(),
            T::TABLE_NAME
        );
        table.mark_clean();
        Ok(())
    }
}

fn persist(e: sqlx::Error) -> SqlError {
    SqlError::PersistError(e.to_string())
}

fn bind<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    value: &SqlValue,
) -> Query<'q, MySql, MySqlArguments> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Int(v) => query.bind(*v),
        SqlValue::UInt(v) => query.bind(*v),
        SqlValue::Float(v) => query.bind(*v),
        SqlValue::Text(v) => query.bind(v.clone()),
    }
}

fn decode_row<T: SqlTableDef>(row: &MySqlRow) -> Result<Vec<SqlValue>, sqlx::Error> {
    T::COLUMNS
        .iter()
        .enumerate()
        .map(|(index, column)| decode(row, index, column.kind))
        .collect()
}

/// Integers arrive as 64 bit values thanks to the casts in the select.
/// FLOAT and DOUBLE columns decode to different Rust types, as do text
/// and binary strings, so both are tried.
fn decode(row: &MySqlRow, index: usize, kind: ColumnType) -> Result<SqlValue, sqlx::Error> {
    let value = match kind {
        ColumnType::Int => row
            .try_get::<Option<i64>, _>(index)?
            .map(SqlValue::Int),
        ColumnType::UInt => row
            .try_get::<Option<u64>, _>(index)?
            .map(SqlValue::UInt),
        ColumnType::Float => match row.try_get::<Option<f32>, _>(index) {
            Ok(v) => v.map(|v| SqlValue::Float(f64::from(v))),
            Err(_) => row
                .try_get::<Option<f64>, _>(index)?
                .map(SqlValue::Float),
        },
        ColumnType::Text => match row.try_get::<Option<String>, _>(index) {
            Ok(v) => v.map(SqlValue::Text),
            Err(_) => row
                .try_get::<Option<Vec<u8>>, _>(index)?
                .map(|v| SqlValue::Text(String::from_utf8_lossy(&v).into_owned())),
        },
    };
    Ok(value.unwrap_or(SqlValue::Null))
}
