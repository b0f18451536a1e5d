//! relation
//!
//! A predicate over a single column value. Queries on both DBC and
//! SQL tables are conjunctions of relations, one per column.

#[derive(Debug, Clone, PartialEq)]
pub enum Relation<T> {
    Eq(T),
    Ne(T),
    Lt(T),
    Le(T),
    Gt(T),
    Ge(T),
    /// Inclusive on both ends.
    Between(T, T),
    In(Vec<T>),
    Not(Box<Relation<T>>),
    /// Matches when every inner relation matches; empty matches all.
    All(Vec<Relation<T>>),
    /// Matches when any inner relation matches; empty matches none.
    Any(Vec<Relation<T>>),
}

impl<T: PartialOrd> Relation<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Relation::Eq(v) => value == v,
            Relation::Ne(v) => value != v,
            Relation::Lt(v) => value < v,
            Relation::Le(v) => value <= v,
            Relation::Gt(v) => value > v,
            Relation::Ge(v) => value >= v,
            Relation::Between(lo, hi) => value >= lo && value <= hi,
            Relation::In(vs) => vs.iter().any(|v| value == v),
            Relation::Not(r) => !r.matches(value),
            Relation::All(rs) => rs.iter().all(|r| r.matches(value)),
            Relation::Any(rs) => rs.iter().any(|r| r.matches(value)),
        }
    }
}

impl<T> Relation<T> {
    /// Convert the payload, keeping the shape of the relation.
    pub fn map<U, F: Fn(T) -> U + Copy>(self, f: F) -> Relation<U> {
        match self {
            Relation::Eq(v) => Relation::Eq(f(v)),
            Relation::Ne(v) => Relation::Ne(f(v)),
            Relation::Lt(v) => Relation::Lt(f(v)),
            Relation::Le(v) => Relation::Le(f(v)),
            Relation::Gt(v) => Relation::Gt(f(v)),
            Relation::Ge(v) => Relation::Ge(f(v)),
            Relation::Between(lo, hi) => Relation::Between(f(lo), f(hi)),
            Relation::In(vs) => Relation::In(vs.into_iter().map(f).collect()),
            Relation::Not(r) => Relation::Not(Box::new(r.map(f))),
            Relation::All(rs) => Relation::All(rs.into_iter().map(|r| r.map(f)).collect()),
            Relation::Any(rs) => Relation::Any(rs.into_iter().map(|r| r.map(f)).collect()),
        }
    }

    pub fn negate(self) -> Self {
        Relation::Not(Box::new(self))
    }
}

impl<T> From<T> for Relation<T> {
    fn from(value: T) -> Self {
        Relation::Eq(value)
    }
}
