use std::{
    fmt::{self, Debug},
    marker::PhantomData,
};

use azerust_cell::Relation;

use crate::{
    cell::SqlColumn,
    table::SqlTableDef,
    value::{SqlType, SqlValue},
};

/// A conjunction of column relations over a SQL table.
pub struct SqlQuery<T> {
    filters: Vec<(usize, Relation<SqlValue>)>,
    _table: PhantomData<T>,
}

impl<T> Clone for SqlQuery<T> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
            _table: PhantomData,
        }
    }
}

impl<T: SqlTableDef> Debug for SqlQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_map();
        for (column, relation) in &self.filters {
            list.entry(&T::COLUMNS[*column].name, relation);
        }
        list.finish()
    }
}

impl<T: SqlTableDef> Default for SqlQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SqlTableDef> SqlQuery<T> {
    /// A query matching every row.
    pub fn new() -> Self {
        Self {
            filters: vec![],
            _table: PhantomData,
        }
    }

    pub fn filter<C: SqlColumn>(
        mut self,
        cell: C,
        relation: impl Into<Relation<C::Value>>,
    ) -> Self {
        let relation: Relation<C::Value> = relation.into();
        self.filters.push((
            cell.column(),
            relation.map(<C::Value as SqlType>::into_value),
        ));
        self
    }

    /// The filters as `(column index, relation)` pairs.
    pub fn filters(&self) -> &[(usize, Relation<SqlValue>)] {
        &self.filters
    }

    /// Whether a row passes every filter. A NULL cell fails every
    /// comparison with a value, so `Ne` and `Not` let it through; only
    /// `Eq(Null)` and `In` lists holding `Null` select it.
    pub fn matches(&self, values: &[SqlValue]) -> bool {
        self.filters
            .iter()
            .all(|(column, relation)| relation.matches(&values[*column]))
    }
}
