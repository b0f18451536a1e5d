use std::{
    collections::HashMap,
    fmt::{self, Debug},
    marker::PhantomData,
    path::Path,
};

use tracing::{debug, instrument, trace};

use crate::{
    error::DbcError,
    field::{Field, FieldMut, Key},
    header::{DbcHeader, DBC_MAGIC, HEADER_SIZE},
    query::DbcQuery,
    strings::StringBlock,
};

/// The layout of a DBC table.
pub trait DbcTable: Copy + Debug + 'static {
    /// File name without the extension.
    const TABLE_NAME: &'static str;
    const FIELD_COUNT: u32;
    const RECORD_SIZE: usize;
    const KEY: Key = Key::at(0);

    fn file_name() -> String {
        format!("{}.dbc", Self::TABLE_NAME)
    }
}

/// An editable DBC file. Records live in one contiguous buffer; rows
/// are addressed through a key index.
pub struct DbcFile<T> {
    records: Vec<u8>,
    live: Vec<bool>,
    strings: StringBlock,
    keys: HashMap<u32, usize>,
    _table: PhantomData<T>,
}

impl<T: DbcTable> Debug for DbcFile<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbcFile")
            .field("table", &T::TABLE_NAME)
            .field("rows", &self.len())
            .field("strings", &self.strings.len())
            .finish()
    }
}

impl<T: DbcTable> Default for DbcFile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DbcTable> DbcFile<T> {
    pub fn new() -> Self {
        Self {
            records: vec![],
            live: vec![],
            strings: StringBlock::new(),
            keys: HashMap::new(),
            _table: PhantomData,
        }
    }

    pub fn read(data: &[u8]) -> Result<Self, DbcError> {
        let header = DbcHeader::decode(data)?;
        if header.field_count != T::FIELD_COUNT
            || usize::try_from(header.record_size).ok() != Some(T::RECORD_SIZE)
        {
            return Err(DbcError::LayoutMismatch {
                table: T::TABLE_NAME,
                expected_fields: T::FIELD_COUNT,
                expected_size: T::RECORD_SIZE,
                fields: header.field_count,
                size: header.record_size,
            });
        }

        let expected = header.file_size().ok_or(DbcError::TooLarge)?;
        if data.len() < expected {
            return Err(DbcError::Truncated {
                expected,
                found: data.len(),
            });
        }

        let records_end = expected - header.string_block_size as usize;
        let mut file = Self {
            records: data[HEADER_SIZE..records_end].to_vec(),
            live: vec![],
            strings: StringBlock::from_bytes(data[records_end..expected].to_vec())?,
            keys: HashMap::new(),
            _table: PhantomData,
        };

        let count = file.records.len() / T::RECORD_SIZE;
        file.live = vec![true; count];
        for index in 0..count {
            let id = file.key_at(index);
            if file.keys.insert(id, index).is_some() {
                return Err(DbcError::DuplicateKey { table: T::TABLE_NAME, id });
            }
        }

        debug!("Read {} rows from {}", count, T::TABLE_NAME);
        Ok(file)
    }

    /// Serialize the live rows. Deleted rows are left out.
    pub fn write(&self) -> Result<Vec<u8>, DbcError> {
        let live = self.live.iter().filter(|l| **l).count();
        let header = DbcHeader {
            magic: DBC_MAGIC,
            record_count: u32::try_from(live).map_err(|_| DbcError::TooLarge)?,
            field_count: T::FIELD_COUNT,
            record_size: u32::try_from(T::RECORD_SIZE).map_err(|_| DbcError::TooLarge)?,
            string_block_size: u32::try_from(self.strings.len())
                .map_err(|_| DbcError::TooLarge)?,
        };

        let mut out = header.encode()?;
        out.reserve(live * T::RECORD_SIZE + self.strings.len());
        for (record, _) in self
            .records
            .chunks_exact(T::RECORD_SIZE)
            .zip(&self.live)
            .filter(|(_, live)| **live)
        {
            out.extend_from_slice(record);
        }
        out.extend_from_slice(self.strings.as_bytes());
        Ok(out)
    }

    #[instrument(skip(path), fields(table = T::TABLE_NAME))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DbcError> {
        let data = std::fs::read(path)?;
        Self::read(&data)
    }

    #[instrument(skip(self, path), fields(table = T::TABLE_NAME))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DbcError> {
        std::fs::write(path, self.write()?)?;
        debug!("Saved {} rows", self.len());
        Ok(())
    }

    /// Number of live rows.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.keys.contains_key(&id)
    }

    /// The largest id in use, 0 for an empty file.
    pub fn max_id(&self) -> u32 {
        self.keys.keys().copied().max().unwrap_or(0)
    }

    /// Live rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_, T>> {
        self.live
            .iter()
            .enumerate()
            .filter(|(_, live)| **live)
            .map(move |(index, _)| Row { file: self, index })
    }

    pub fn find_by_id(&self, id: u32) -> Option<Row<'_, T>> {
        self.keys
            .get(&id)
            .map(|index| Row { file: self, index: *index })
    }

    pub fn find_by_id_mut(&mut self, id: u32) -> Option<RowMut<'_, T>> {
        let index = *self.keys.get(&id)?;
        Some(RowMut { file: self, index })
    }

    /// Append a zero-filled row.
    pub fn add(&mut self, id: u32) -> Result<RowMut<'_, T>, DbcError> {
        self.check_free(id)?;
        let index = self.push(&vec![0; T::RECORD_SIZE], id);
        trace!("Added {} row {}", T::TABLE_NAME, id);
        Ok(RowMut { file: self, index })
    }

    /// Append a copy of `source` under a new id. String columns keep
    /// pointing at the same strings.
    pub fn clone_row(&mut self, source: u32, id: u32) -> Result<RowMut<'_, T>, DbcError> {
        let from = *self.keys.get(&source).ok_or(DbcError::NoSuchRow {
            table: T::TABLE_NAME,
            id: source,
        })?;
        self.check_free(id)?;
        let record = self.record(from).to_vec();
        let index = self.push(&record, id);
        trace!("Cloned {} row {} into {}", T::TABLE_NAME, source, id);
        Ok(RowMut { file: self, index })
    }

    pub fn query_all(&self, query: &DbcQuery<T>) -> Vec<Row<'_, T>> {
        self.rows()
            .filter(|row| query.matches(row.record(), &self.strings))
            .collect()
    }

    pub fn query_first(&self, query: &DbcQuery<T>) -> Option<Row<'_, T>> {
        self.rows()
            .find(|row| query.matches(row.record(), &self.strings))
    }

    /// Ids of the rows matching `query`, for callers that go on to edit
    /// them.
    pub fn query_ids(&self, query: &DbcQuery<T>) -> Vec<u32> {
        self.query_all(query).iter().map(Row::id).collect()
    }

    fn check_free(&self, id: u32) -> Result<(), DbcError> {
        if self.keys.contains_key(&id) {
            Err(DbcError::DuplicateKey { table: T::TABLE_NAME, id })
        } else {
            Ok(())
        }
    }

    fn push(&mut self, record: &[u8], id: u32) -> usize {
        let index = self.live.len();
        self.records.extend_from_slice(record);
        self.live.push(true);
        T::KEY.write(self.record_mut(index), id);
        self.keys.insert(id, index);
        index
    }

    fn record(&self, index: usize) -> &[u8] {
        &self.records[index * T::RECORD_SIZE..(index + 1) * T::RECORD_SIZE]
    }

    fn record_mut(&mut self, index: usize) -> &mut [u8] {
        &mut self.records[index * T::RECORD_SIZE..(index + 1) * T::RECORD_SIZE]
    }

    fn key_at(&self, index: usize) -> u32 {
        T::KEY.read(self.record(index), &self.strings)
    }
}

/// A read-only view of one row.
pub struct Row<'a, T> {
    file: &'a DbcFile<T>,
    index: usize,
}

impl<'a, T> Clone for Row<'a, T> {
    fn clone(&self) -> Self {
        Self {
            file: self.file,
            index: self.index,
        }
    }
}

impl<'a, T> Copy for Row<'a, T> {}

impl<'a, T: DbcTable> Debug for Row<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", T::TABLE_NAME, self.id())
    }
}

impl<'a, T: DbcTable> Row<'a, T> {
    pub fn id(&self) -> u32 {
        self.file.key_at(self.index)
    }

    pub fn get<F: Field>(&self, field: F) -> F::Value {
        field.read(self.record(), &self.file.strings)
    }

    pub fn record(&self) -> &'a [u8] {
        self.file.record(self.index)
    }
}

/// A mutable view of one row. Setters chain:
///
/// ```ignore
/// runes.add(id)?.set(SpellRuneCost::BLOOD, 1).set(SpellRuneCost::FROST, 1);
/// ```
pub struct RowMut<'a, T> {
    file: &'a mut DbcFile<T>,
    index: usize,
}

impl<'a, T: DbcTable> Debug for RowMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", T::TABLE_NAME, self.id())
    }
}

impl<'a, T: DbcTable> RowMut<'a, T> {
    pub fn id(&self) -> u32 {
        self.file.key_at(self.index)
    }

    pub fn get<F: Field>(&self, field: F) -> F::Value {
        field.read(self.file.record(self.index), &self.file.strings)
    }

    pub fn set<F: FieldMut>(&mut self, field: F, value: impl Into<F::Value>) -> &mut Self {
        let DbcFile {
            records, strings, ..
        } = &mut *self.file;
        let start = self.index * T::RECORD_SIZE;
        field.write(
            &mut records[start..start + T::RECORD_SIZE],
            strings,
            value.into(),
        );
        self
    }

    /// Remove the row. It stays in the buffer but is skipped by lookups,
    /// iteration and [`DbcFile::write`].
    pub fn delete(self) {
        let id = self.id();
        self.file.live[self.index] = false;
        self.file.keys.remove(&id);
        trace!("Deleted {} row {}", T::TABLE_NAME, id);
    }

    pub fn as_row(&self) -> Row<'_, T> {
        Row {
            file: &*self.file,
            index: self.index,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{DbcFile, DbcTable};
    use crate::{
        error::DbcError,
        field::{Int, Str},
        query::DbcQuery,
        Relation,
    };

    #[derive(Debug, Clone, Copy)]
    struct Pair;

    impl DbcTable for Pair {
        const TABLE_NAME: &'static str = "Pair";
        const FIELD_COUNT: u32 = 3;
        const RECORD_SIZE: usize = 12;
    }

    const VALUE: Int = Int::at(4);
    const LABEL: Str = Str::at(8);

    const TWO_ROWS: [u8; 20 + 24 + 5] = [
        0x57, 0x44, 0x42, 0x43, 2, 0, 0, 0, 3, 0, 0, 0, 12, 0, 0, 0, 5, 0, 0, 0, //
        1, 0, 0, 0, 10, 0, 0, 0, 1, 0, 0, 0, //
        2, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 0, //
        0, b'o', b'n', b'e', 0,
    ];

    #[test]
    pub fn reads_rows() {
        let file = DbcFile::<Pair>::read(&TWO_ROWS).unwrap();
        assert_eq!(file.len(), 2);
        assert_eq!(file.max_id(), 2);

        let one = file.find_by_id(1).unwrap();
        assert_eq!(one.get(VALUE), 10);
        assert_eq!(one.get(LABEL), "one");
        assert_eq!(file.find_by_id(2).unwrap().get(LABEL), "");
        assert!(file.find_by_id(3).is_none());
    }

    #[test]
    pub fn write_reproduces_input() {
        let file = DbcFile::<Pair>::read(&TWO_ROWS).unwrap();
        assert_eq!(file.write().unwrap(), TWO_ROWS);
    }

    #[test]
    pub fn rejects_other_layouts() {
        let mut data = TWO_ROWS;
        data[8] = 4;
        assert!(matches!(
            DbcFile::<Pair>::read(&data),
            Err(DbcError::LayoutMismatch { fields: 4, .. })
        ));
        assert!(matches!(
            DbcFile::<Pair>::read(&TWO_ROWS[..40]),
            Err(DbcError::Truncated { .. })
        ));
    }

    #[test]
    pub fn rejects_string_block_without_leading_nul() {
        let mut data = TWO_ROWS;
        data[44] = b'x';
        assert!(matches!(
            DbcFile::<Pair>::read(&data),
            Err(DbcError::InvalidStringBlock(b'x'))
        ));
    }

    #[test]
    pub fn rejects_duplicate_ids() {
        let mut data = TWO_ROWS;
        data[32] = 1;
        assert!(matches!(
            DbcFile::<Pair>::read(&data),
            Err(DbcError::DuplicateKey { id: 1, .. })
        ));
    }

    #[test]
    pub fn add_and_clone() {
        let mut file = DbcFile::<Pair>::read(&TWO_ROWS).unwrap();
        file.add(7)
            .unwrap()
            .set(VALUE, 70)
            .set(LABEL, "seven".to_string());
        file.clone_row(1, 8).unwrap().set(VALUE, 80);

        assert_eq!(file.find_by_id(7).unwrap().get(LABEL), "seven");
        let eight = file.find_by_id(8).unwrap();
        assert_eq!(eight.get(VALUE), 80);
        assert_eq!(eight.get(LABEL), "one");
        assert_eq!(file.find_by_id(1).unwrap().get(VALUE), 10);

        assert!(matches!(
            file.add(2),
            Err(DbcError::DuplicateKey { id: 2, .. })
        ));
        assert!(matches!(
            file.clone_row(99, 100),
            Err(DbcError::NoSuchRow { id: 99, .. })
        ));
    }

    #[test]
    pub fn deleted_rows_disappear() {
        let mut file = DbcFile::<Pair>::read(&TWO_ROWS).unwrap();
        file.find_by_id_mut(1).unwrap().delete();

        assert_eq!(file.len(), 1);
        assert!(file.find_by_id(1).is_none());
        assert_eq!(file.rows().map(|r| r.id()).collect::<Vec<_>>(), [2]);

        let written = DbcFile::<Pair>::read(&file.write().unwrap()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written.contains(2));

        // the id is free again
        file.add(1).unwrap();
    }

    #[test]
    pub fn queries_filter_rows() {
        let mut file = DbcFile::<Pair>::read(&TWO_ROWS).unwrap();
        file.add(3).unwrap().set(VALUE, 30);

        let query = DbcQuery::<Pair>::new().filter(VALUE, Relation::Ge(20));
        assert_eq!(file.query_ids(&query), [2, 3]);

        let query = DbcQuery::<Pair>::new().filter(LABEL, "one".to_string());
        assert_eq!(file.query_first(&query).map(|r| r.id()), Some(1));
    }

    #[test]
    pub fn save_and_load() {
        let file = DbcFile::<Pair>::read(&TWO_ROWS).unwrap();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        file.save(tmp.path()).unwrap();

        let loaded = DbcFile::<Pair>::load(tmp.path()).unwrap();
        assert_eq!(loaded.find_by_id(1).unwrap().get(LABEL), "one");
        assert_eq!(Pair::file_name(), "Pair.dbc");
    }
}
