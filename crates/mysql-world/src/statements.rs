//! SQL text for the world table store. Values are never inlined; every
//! function returns the statement and the values to bind, in order.

use azerust_sql::{ColumnType, Relation, SqlQuery, SqlTableDef, SqlValue};

fn quote(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Select every column. Integer columns are cast so that any integer
/// width decodes as a 64 bit value of the right signedness.
pub fn select<T: SqlTableDef>() -> String {
    let columns = T::COLUMNS
        .iter()
        .map(|column| match column.kind {
            ColumnType::Int => format!("CAST({} AS SIGNED)", quote(column.name)),
            ColumnType::UInt => format!("CAST({} AS UNSIGNED)", quote(column.name)),
            ColumnType::Float | ColumnType::Text => quote(column.name),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {} FROM {}", columns, quote(T::TABLE_NAME))
}

/// Select the rows matching `query`.
pub fn select_where<T: SqlTableDef>(query: &SqlQuery<T>) -> (String, Vec<SqlValue>) {
    let mut binds = vec![];
    let conditions = query
        .filters()
        .iter()
        .map(|(column, relation)| condition(T::COLUMNS[*column].name, relation, &mut binds))
        .collect::<Vec<_>>();
    if conditions.is_empty() {
        return (select::<T>(), binds);
    }
    (
        format!("{} WHERE {}", select::<T>(), conditions.join(" AND ")),
        binds,
    )
}

/// Render one relation on `column`, pushing its values onto `binds`.
///
/// Every condition is TRUE or FALSE, never NULL: a NULL cell fails each
/// comparison with a value, so `NOT` and `<>` keep rows holding NULL.
/// This is how [`SqlQuery::matches`] treats NULL in memory.
pub fn condition(column: &str, relation: &Relation<SqlValue>, binds: &mut Vec<SqlValue>) -> String {
    let column_name = quote(column);
    match relation {
        Relation::Eq(SqlValue::Null) => format!("{} IS NULL", column_name),
        Relation::Ne(SqlValue::Null) => format!("{} IS NOT NULL", column_name),
        Relation::Eq(v) => compare(&column_name, "<=>", v, binds),
        Relation::Ne(v) => format!("NOT ({})", compare(&column_name, "<=>", v, binds)),
        Relation::Lt(v) => not_null(compare(&column_name, "<", v, binds)),
        Relation::Le(v) => not_null(compare(&column_name, "<=", v, binds)),
        Relation::Gt(v) => not_null(compare(&column_name, ">", v, binds)),
        Relation::Ge(v) => not_null(compare(&column_name, ">=", v, binds)),
        Relation::Between(lo, hi) => {
            binds.push(lo.clone());
            binds.push(hi.clone());
            not_null(format!("{} BETWEEN ? AND ?", column_name))
        }
        Relation::In(values) if values.is_empty() => "FALSE".to_string(),
        Relation::In(values) => {
            let parts = values
                .iter()
                .map(|v| compare(&column_name, "<=>", v, binds))
                .collect::<Vec<_>>();
            format!("({})", parts.join(" OR "))
        }
        Relation::Not(inner) => format!("NOT ({})", condition(column, inner, binds)),
        Relation::All(inner) => join(column, inner, " AND ", "TRUE", binds),
        Relation::Any(inner) => join(column, inner, " OR ", "FALSE", binds),
    }
}

fn compare(column_name: &str, op: &str, value: &SqlValue, binds: &mut Vec<SqlValue>) -> String {
    binds.push(value.clone());
    format!("{} {} ?", column_name, op)
}

/// Turn an unknown (NULL) comparison into FALSE.
fn not_null(comparison: String) -> String {
    format!("COALESCE({}, FALSE)", comparison)
}

fn join(
    column: &str,
    relations: &[Relation<SqlValue>],
    separator: &str,
    empty: &str,
    binds: &mut Vec<SqlValue>,
) -> String {
    if relations.is_empty() {
        return empty.to_string();
    }
    let parts = relations
        .iter()
        .map(|r| format!("({})", condition(column, r, binds)))
        .collect::<Vec<_>>();
    parts.join(separator)
}

fn key_condition<T: SqlTableDef>() -> String {
    T::PRIMARY_KEY
        .iter()
        .map(|i| format!("{} = ?", quote(T::COLUMNS[*i].name)))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Delete one row by primary key; bind the key values in key order.
pub fn delete<T: SqlTableDef>() -> String {
    format!("DELETE FROM {} WHERE {}", quote(T::TABLE_NAME), key_condition::<T>())
}

/// Insert or overwrite one row; bind every value in column order.
pub fn replace<T: SqlTableDef>() -> String {
    let columns = T::COLUMNS
        .iter()
        .map(|c| quote(c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let marks = vec!["?"; T::COLUMNS.len()].join(", ");
    format!(
        "REPLACE INTO {} ({}) VALUES ({})",
        quote(T::TABLE_NAME),
        columns,
        marks
    )
}
