use std::{
    fmt::{self, Debug},
    marker::PhantomData,
};

use crate::value::SqlType;

/// A typed column of a SQL table.
pub trait SqlColumn: Copy {
    type Value: SqlType;

    /// Position of the column in the table's column list.
    fn column(self) -> usize;
}

/// A read/write column.
pub struct SqlCell<V> {
    column: usize,
    _value: PhantomData<fn() -> V>,
}

/// A primary key column. It can be read and queried but not written:
/// rows get new keys by being cloned.
pub struct SqlKeyCell<V> {
    column: usize,
    _value: PhantomData<fn() -> V>,
}

macro_rules! cell_impls {
    ($name:ident) => {
        impl<V> $name<V> {
            pub const fn new(column: usize) -> Self {
                Self {
                    column,
                    _value: PhantomData,
                }
            }
        }

        impl<V> Clone for $name<V> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<V> Copy for $name<V> {}

        impl<V> Debug for $name<V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.column)
            }
        }

        impl<V: SqlType> SqlColumn for $name<V> {
            type Value = V;

            fn column(self) -> usize {
                self.column
            }
        }
    };
}

cell_impls!(SqlCell);
cell_impls!(SqlKeyCell);
