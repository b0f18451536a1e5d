use std::{
    fmt::{self, Debug},
    marker::PhantomData,
};

use azerust_cell::Relation;

use crate::{field::Field, file::DbcTable, strings::StringBlock};

type Filter = Box<dyn Fn(&[u8], &StringBlock) -> bool + Send + Sync>;

/// A conjunction of column relations over a DBC table.
pub struct DbcQuery<T> {
    filters: Vec<Filter>,
    _table: PhantomData<T>,
}

impl<T: DbcTable> Debug for DbcQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbcQuery")
            .field("table", &T::TABLE_NAME)
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl<T: DbcTable> Default for DbcQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DbcTable> DbcQuery<T> {
    /// A query matching every row.
    pub fn new() -> Self {
        Self {
            filters: vec![],
            _table: PhantomData,
        }
    }

    pub fn filter<F>(mut self, field: F, relation: impl Into<Relation<F::Value>>) -> Self
    where
        F: Field + Send + Sync + 'static,
        F::Value: PartialOrd + Send + Sync + 'static,
    {
        let relation: Relation<F::Value> = relation.into();
        self.filters.push(Box::new(move |record: &[u8], strings: &StringBlock| {
            relation.matches(&field.read(record, strings))
        }));
        self
    }

    pub fn matches(&self, record: &[u8], strings: &StringBlock) -> bool {
        self.filters.iter().all(|f| f(record, strings))
    }
}
