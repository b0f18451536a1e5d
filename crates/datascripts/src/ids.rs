//! ids
//!
//! Id allocation for new rows. A fresh id is above every id the table
//! already holds and above every id handed out before, so ids stay
//! unique across runs as long as the id file is kept. Named ids are
//! registered under `(module, name)` and come back the same every run.

use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, Result};
use azerust_dbc::{DbcError, DbcFile, DbcTable};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Ids {
    #[serde(default)]
    tables: BTreeMap<String, TableIds>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
struct TableIds {
    /// Highest id handed out so far.
    high: u32,
    #[serde(default)]
    named: BTreeMap<String, u32>,
}

impl Ids {
    /// Read the id file. A missing file is an empty allocator.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No id file at {}, starting fresh", path.display());
            return Ok(Self::default());
        }
        let file = std::fs::File::open(path)?;
        serde_yaml::from_reader(file).context("could not read yaml file")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self).context("could not write yaml file")
    }

    /// A fresh id for `table`, whose highest id in use is `max_existing`.
    /// Fails once `u32::MAX` has been reached.
    pub fn id(&mut self, table: &'static str, max_existing: u32) -> Result<u32, DbcError> {
        let entry = self.tables.entry(table.to_string()).or_default();
        let id = entry
            .high
            .max(max_existing)
            .checked_add(1)
            .ok_or(DbcError::IdsExhausted { table })?;
        entry.high = id;
        trace!("Allocated {} id {}", table, id);
        Ok(id)
    }

    /// The id registered for `name` in `module`, allocated on first use.
    pub fn named_id(
        &mut self,
        table: &'static str,
        max_existing: u32,
        module: &str,
        name: &str,
    ) -> Result<u32, DbcError> {
        let key = format!("{}:{}", module, name);
        if let Some(id) = self.tables.get(table).and_then(|t| t.named.get(&key)) {
            return Ok(*id);
        }
        let id = self.id(table, max_existing)?;
        self.tables
            .entry(table.to_string())
            .or_default()
            .named
            .insert(key, id);
        Ok(id)
    }

    /// A fresh id for a row of `file`.
    pub fn next<T: DbcTable>(&mut self, file: &DbcFile<T>) -> Result<u32, DbcError> {
        self.id(T::TABLE_NAME, file.max_id())
    }

    /// The named id for a row of `file`.
    pub fn named<T: DbcTable>(
        &mut self,
        file: &DbcFile<T>,
        module: &str,
        name: &str,
    ) -> Result<u32, DbcError> {
        self.named_id(T::TABLE_NAME, file.max_id(), module, name)
    }
}

#[cfg(test)]
mod test {
    use azerust_dbc::{tables::SpellRuneCost, DbcError, DbcFile};

    use super::Ids;

    #[test]
    pub fn allocates_above_existing_and_previous() {
        let mut ids = Ids::default();
        assert_eq!(ids.id("Spell", 100).unwrap(), 101);
        assert_eq!(ids.id("Spell", 100).unwrap(), 102);
        assert_eq!(ids.id("Spell", 500).unwrap(), 501);
        assert_eq!(ids.id("Lock", 0).unwrap(), 1);
    }

    #[test]
    pub fn named_ids_are_stable() {
        let mut ids = Ids::default();
        let first = ids.named_id("SkillLine", 800, "my-mod", "cooking-2").unwrap();
        assert_eq!(first, 801);
        assert_eq!(ids.named_id("SkillLine", 900, "my-mod", "cooking-2").unwrap(), first);
        assert_eq!(ids.named_id("SkillLine", 800, "other-mod", "cooking-2").unwrap(), 802);
        assert_eq!(ids.id("SkillLine", 0).unwrap(), 803);
    }

    #[test]
    pub fn follows_the_file() {
        let mut file = DbcFile::<SpellRuneCost>::new();
        file.add(40).unwrap();
        let mut ids = Ids::default();
        assert_eq!(ids.next(&file).unwrap(), 41);
        file.add(41).unwrap();
        assert_eq!(ids.next(&file).unwrap(), 42);
        assert_eq!(ids.named(&file, "m", "n").unwrap(), 43);
        assert_eq!(ids.named(&file, "m", "n").unwrap(), 43);
    }

    #[test]
    pub fn exhausted_ids_are_an_error() {
        let mut ids = Ids::default();
        assert!(matches!(
            ids.id("Spell", u32::MAX),
            Err(DbcError::IdsExhausted { table: "Spell" })
        ));
        assert_eq!(ids.id("Spell", u32::MAX - 1).unwrap(), u32::MAX);
        assert!(ids.id("Spell", 0).is_err());
        assert!(ids.named_id("Spell", 0, "m", "n").is_err());
    }

    #[test]
    pub fn persists_as_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.yaml");
        assert_eq!(Ids::read(&path).unwrap(), Ids::default());

        let mut ids = Ids::default();
        ids.named_id("SkillLine", 10, "m", "n").unwrap();
        ids.id("Lock", 3).unwrap();
        ids.write(&path).unwrap();

        let mut read = Ids::read(&path).unwrap();
        assert_eq!(read, ids);
        assert_eq!(read.named_id("SkillLine", 0, "m", "n").unwrap(), 11);
        assert_eq!(read.id("Lock", 0).unwrap(), 5);
    }
}
