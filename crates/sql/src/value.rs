use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use derive_more::Display;

/// A single column value as held in memory.
#[derive(Debug, Clone, Display)]
pub enum SqlValue {
    #[display(fmt = "NULL")]
    Null,
    #[display(fmt = "{}", _0)]
    Int(i64),
    #[display(fmt = "{}", _0)]
    UInt(u64),
    #[display(fmt = "{}", _0)]
    Float(f64),
    #[display(fmt = "'{}'", _0)]
    Text(String),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            SqlValue::Null => 0,
            SqlValue::Int(v) => *v,
            SqlValue::UInt(v) => *v as i64,
            SqlValue::Float(v) => *v as i64,
            SqlValue::Text(v) => v.trim().parse().unwrap_or_default(),
        }
    }

    pub fn as_u64(&self) -> u64 {
        match self {
            SqlValue::Null => 0,
            SqlValue::Int(v) => *v as u64,
            SqlValue::UInt(v) => *v,
            SqlValue::Float(v) => *v as u64,
            SqlValue::Text(v) => v.trim().parse().unwrap_or_default(),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            SqlValue::Null => 0.0,
            SqlValue::Int(v) => *v as f64,
            SqlValue::UInt(v) => *v as f64,
            SqlValue::Float(v) => *v,
            SqlValue::Text(v) => v.trim().parse().unwrap_or_default(),
        }
    }

    /// Integer variants widened losslessly, for exact comparisons.
    fn as_i128(&self) -> i128 {
        match self {
            SqlValue::Int(v) => i128::from(*v),
            SqlValue::UInt(v) => i128::from(*v),
            _ => 0,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            SqlValue::Null => String::new(),
            SqlValue::Text(v) => v.clone(),
            other => other.to_string(),
        }
    }
}

/// Numeric variants compare by exact value, so `Int(3) == UInt(3) ==
/// Float(3.0)`. Text only compares with text. `Null` equals only `Null`
/// and is unordered against everything else. `NaN` equals itself so
/// equality stays reflexive.
impl PartialOrd for SqlValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use SqlValue::*;
        match (self, other) {
            (Null, Null) => Some(Ordering::Equal),
            (Null, _) | (_, Null) => None,
            (Text(a), Text(b)) => a.partial_cmp(b),
            (Text(_), _) | (_, Text(_)) => None,
            (Float(a), Float(b)) if a.is_nan() && b.is_nan() => Some(Ordering::Equal),
            (Float(a), Float(b)) => a.partial_cmp(b),
            (Float(a), b) => cmp_int_float(b.as_i128(), *a).map(Ordering::reverse),
            (a, Float(b)) => cmp_int_float(a.as_i128(), *b),
            (a, b) => a.as_i128().partial_cmp(&b.as_i128()),
        }
    }
}

impl PartialEq for SqlValue {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl Eq for SqlValue {}

/// Numeric variants hash through their `f64` value, so values that
/// compare equal across variants hash equally.
impl Hash for SqlValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            SqlValue::Null => state.write_u8(0),
            SqlValue::Text(v) => {
                state.write_u8(1);
                v.hash(state);
            }
            numeric => {
                state.write_u8(2);
                let v = numeric.as_f64();
                let bits = if v.is_nan() {
                    f64::NAN.to_bits()
                } else if v == 0.0 {
                    0.0f64.to_bits()
                } else {
                    v.to_bits()
                };
                state.write_u64(bits);
            }
        }
    }
}

/// Compare an integer with a float without losing precision on either
/// side.
fn cmp_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    let rounded = int as f64;
    match rounded.partial_cmp(&float)? {
        Ordering::Equal => Some(int.cmp(&(float as i128))),
        other => Some(other),
    }
}

/// The storage class of a column. Values are coerced to it when they
/// enter a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    UInt,
    Float,
    Text,
}

impl ColumnType {
    pub fn coerce(self, value: SqlValue) -> SqlValue {
        match (self, value) {
            (_, SqlValue::Null) => SqlValue::Null,
            (ColumnType::Int, v @ SqlValue::Int(_)) => v,
            (ColumnType::UInt, v @ SqlValue::UInt(_)) => v,
            (ColumnType::Float, v @ SqlValue::Float(_)) => v,
            (ColumnType::Text, v @ SqlValue::Text(_)) => v,
            (ColumnType::Int, v) => SqlValue::Int(v.as_i64()),
            (ColumnType::UInt, v) => SqlValue::UInt(v.as_u64()),
            (ColumnType::Float, v) => SqlValue::Float(v.as_f64()),
            (ColumnType::Text, v) => SqlValue::Text(v.as_text()),
        }
    }

    pub fn default_value(self) -> SqlValue {
        match self {
            ColumnType::Int => SqlValue::Int(0),
            ColumnType::UInt => SqlValue::UInt(0),
            ColumnType::Float => SqlValue::Float(0.0),
            ColumnType::Text => SqlValue::Text(String::new()),
        }
    }
}

/// A Rust type a column can be read as. Reads never fail: `NULL` reads
/// as the default and out-of-range numbers are truncated.
pub trait SqlType: Sized {
    fn from_value(value: &SqlValue) -> Self;
    fn into_value(self) -> SqlValue;
}

macro_rules! signed {
    ($($t:ty),*) => {$(
        impl SqlType for $t {
            fn from_value(value: &SqlValue) -> Self {
                value.as_i64() as $t
            }

            fn into_value(self) -> SqlValue {
                SqlValue::Int(i64::from(self))
            }
        }
    )*};
}

macro_rules! unsigned {
    ($($t:ty),*) => {$(
        impl SqlType for $t {
            fn from_value(value: &SqlValue) -> Self {
                value.as_u64() as $t
            }

            fn into_value(self) -> SqlValue {
                SqlValue::UInt(u64::from(self))
            }
        }
    )*};
}

signed!(i8, i16, i32);
unsigned!(u8, u16, u32);

impl SqlType for i64 {
    fn from_value(value: &SqlValue) -> Self {
        value.as_i64()
    }

    fn into_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl SqlType for u64 {
    fn from_value(value: &SqlValue) -> Self {
        value.as_u64()
    }

    fn into_value(self) -> SqlValue {
        SqlValue::UInt(self)
    }
}

impl SqlType for f32 {
    fn from_value(value: &SqlValue) -> Self {
        value.as_f64() as f32
    }

    fn into_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl SqlType for f64 {
    fn from_value(value: &SqlValue) -> Self {
        value.as_f64()
    }

    fn into_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl SqlType for String {
    fn from_value(value: &SqlValue) -> Self {
        value.as_text()
    }

    fn into_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

#[cfg(test)]
mod test {
    use std::{
        collections::{hash_map::DefaultHasher, HashSet},
        hash::{Hash, Hasher},
    };

    use test_case::test_case;

    use super::{ColumnType, SqlType, SqlValue};

    fn hash(value: &SqlValue) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test_case(SqlValue::Int(3), SqlValue::UInt(3), true ; "int and uint")]
    #[test_case(SqlValue::Int(-1), SqlValue::UInt(u64::MAX), false ; "no wrapping")]
    #[test_case(SqlValue::Float(2.0), SqlValue::Int(2), true ; "float and int")]
    #[test_case(SqlValue::Text("2".into()), SqlValue::Int(2), false ; "text is not numeric")]
    #[test_case(SqlValue::Null, SqlValue::Null, true ; "null is null")]
    #[test_case(SqlValue::Null, SqlValue::Int(0), false ; "null is not zero")]
    pub fn equality(a: SqlValue, b: SqlValue, equal: bool) {
        assert_eq!(a == b, equal);
    }

    #[test_case(SqlValue::Int(3), SqlValue::UInt(3) ; "int and uint")]
    #[test_case(SqlValue::UInt(3), SqlValue::Float(3.0) ; "uint and float")]
    #[test_case(SqlValue::Float(0.0), SqlValue::Float(-0.0) ; "signed zero")]
    #[test_case(SqlValue::Float(f64::NAN), SqlValue::Float(f64::NAN) ; "nan")]
    #[test_case(SqlValue::Null, SqlValue::Null ; "null")]
    pub fn equal_values_hash_equally(a: SqlValue, b: SqlValue) {
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    pub fn large_integers_compare_exactly() {
        let max = SqlValue::Int(i64::MAX);
        let below = SqlValue::Int(i64::MAX - 1);
        let float = SqlValue::Float(9_223_372_036_854_775_808.0);
        assert_ne!(max, float);
        assert_ne!(below, float);
        assert!(max < float);
        assert_eq!(SqlValue::UInt(1 << 63), float);
    }

    #[test]
    pub fn ordering_across_numeric_types() {
        assert!(SqlValue::Int(-1) < SqlValue::UInt(0));
        assert!(SqlValue::Float(0.5) < SqlValue::UInt(1));
        assert!(SqlValue::Null.partial_cmp(&SqlValue::Int(1)).is_none());
    }

    #[test_case(ColumnType::UInt, SqlValue::Int(7), SqlValue::UInt(7) ; "int to uint")]
    #[test_case(ColumnType::Float, SqlValue::Text("0.25".into()), SqlValue::Float(0.25) ; "text to float")]
    #[test_case(ColumnType::Text, SqlValue::Int(12), SqlValue::Text("12".into()) ; "int to text")]
    #[test_case(ColumnType::Int, SqlValue::Null, SqlValue::Null ; "null survives")]
    pub fn coercion(column: ColumnType, value: SqlValue, expected: SqlValue) {
        let coerced = column.coerce(value);
        assert_eq!(coerced, expected);
        assert_eq!(
            std::mem::discriminant(&coerced),
            std::mem::discriminant(&expected)
        );
    }

    #[test]
    pub fn primitive_conversions() {
        assert_eq!(u8::from_value(&SqlValue::Int(300)), 44);
        assert_eq!(i32::from_value(&SqlValue::Null), 0);
        assert_eq!(String::from_value(&SqlValue::Text("Chest".into())), "Chest");
        assert_eq!(0.5f32.into_value(), SqlValue::Float(0.5));
        assert_eq!((-3i8).into_value(), SqlValue::Int(-3));
    }

    #[test]
    pub fn displays_as_literals() {
        assert_eq!(SqlValue::Text("x".into()).to_string(), "'x'");
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::UInt(4).to_string(), "4");
    }
}
