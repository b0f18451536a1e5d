//! dataset
//!
//! Every table the object model works on, loaded and saved together.

use std::path::Path;

use anyhow::{Context, Result};
use azerust_dbc::{
    tables::{self, LockType, SkillLine, SkillRaceClassInfo, SkillTiers, Spell, SpellRuneCost},
    DbcError, DbcFile, DbcTable,
};
use azerust_mysql_world::MySqlTableStore;
use azerust_sql::{
    GameObjectLootTemplate, GameObjectTemplate, SqlError, SqlTable, TableStore,
};
use tracing::{debug, instrument};

use crate::{
    conf::DatasetConfig, ids::Ids, lock::Lock, profession::Professions, spell_power::SpellPower,
};

/// The client tables.
#[derive(Debug, Default)]
pub struct Dbc {
    pub lock: DbcFile<tables::Lock>,
    pub lock_type: DbcFile<LockType>,
    pub spell: DbcFile<Spell>,
    pub spell_rune_cost: DbcFile<SpellRuneCost>,
    pub skill_line: DbcFile<SkillLine>,
    pub skill_race_class_info: DbcFile<SkillRaceClassInfo>,
    pub skill_tiers: DbcFile<SkillTiers>,
}

fn load_file<T: DbcTable>(dir: &Path) -> Result<DbcFile<T>> {
    let path = dir.join(T::file_name());
    DbcFile::load(&path).with_context(|| format!("could not load {}", path.display()))
}

fn save_file<T: DbcTable>(file: &DbcFile<T>, dir: &Path) -> Result<()> {
    let path = dir.join(T::file_name());
    file.save(&path)
        .with_context(|| format!("could not save {}", path.display()))
}

impl Dbc {
    #[instrument]
    pub fn load(dir: &Path) -> Result<Self> {
        let dbc = Self {
            lock: load_file(dir)?,
            lock_type: load_file(dir)?,
            spell: load_file(dir)?,
            spell_rune_cost: load_file(dir)?,
            skill_line: load_file(dir)?,
            skill_race_class_info: load_file(dir)?,
            skill_tiers: load_file(dir)?,
        };
        debug!("Loaded client tables");
        Ok(dbc)
    }

    #[instrument(skip(self))]
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("could not create {}", dir.display()))?;
        save_file(&self.lock, dir)?;
        save_file(&self.lock_type, dir)?;
        save_file(&self.spell, dir)?;
        save_file(&self.spell_rune_cost, dir)?;
        save_file(&self.skill_line, dir)?;
        save_file(&self.skill_race_class_info, dir)?;
        save_file(&self.skill_tiers, dir)?;
        debug!("Saved client tables");
        Ok(())
    }
}

/// The world database tables.
#[derive(Debug, Default)]
pub struct Sql {
    pub gameobject_template: SqlTable<GameObjectTemplate>,
    pub gameobject_loot_template: SqlTable<GameObjectLootTemplate>,
}

impl Sql {
    pub async fn load<S: TableStore + Sync>(store: &S) -> Result<Self, SqlError> {
        Ok(Self {
            gameobject_template: store.load::<GameObjectTemplate>().await?,
            gameobject_loot_template: store.load::<GameObjectLootTemplate>().await?,
        })
    }

    pub async fn save<S: TableStore + Sync>(&mut self, store: &S) -> Result<(), SqlError> {
        store.save(&mut self.gameobject_template).await?;
        store.save(&mut self.gameobject_loot_template).await?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Dataset {
    pub dbc: Dbc,
    pub sql: Sql,
    pub ids: Ids,
}

impl Dataset {
    pub async fn load<S: TableStore + Sync>(config: &DatasetConfig, store: &S) -> Result<Self> {
        let dbc = Dbc::load(&config.dbc_source)?;
        let sql = Sql::load(store)
            .await
            .context("could not load world tables")?;
        let ids = Ids::read(&config.ids)?;
        Ok(Self { dbc, sql, ids })
    }

    /// Connect to the configured world database and load everything.
    pub async fn open(config: &DatasetConfig) -> Result<(Self, MySqlTableStore)> {
        let store = MySqlTableStore::connect(&config.world_database)
            .await
            .context("could not connect to the world database")?;
        let dataset = Self::load(config, &store).await?;
        Ok((dataset, store))
    }

    /// Write the client tables to the output directory, the world tables
    /// to the store and the allocated ids to the id file.
    pub async fn save<S: TableStore + Sync>(
        &mut self,
        config: &DatasetConfig,
        store: &S,
    ) -> Result<()> {
        self.dbc.save(&config.dbc_output)?;
        self.sql
            .save(store)
            .await
            .context("could not save world tables")?;
        self.ids.write(&config.ids)?;
        Ok(())
    }

    pub fn lock(&mut self, id: u32) -> Option<Lock<'_>> {
        Lock::load(&mut self.dbc.lock, id)
    }

    pub fn create_lock(&mut self) -> Result<Lock<'_>, DbcError> {
        Lock::create(&mut self.dbc.lock, &mut self.ids)
    }

    pub fn spell_power(&mut self, spell: u32) -> Option<SpellPower<'_>> {
        SpellPower::load(&mut self.dbc.spell, spell)
    }

    pub fn professions(&mut self) -> Professions<'_> {
        Professions::new(
            &mut self.dbc.skill_line,
            &mut self.dbc.skill_race_class_info,
            &mut self.dbc.skill_tiers,
            &mut self.ids,
        )
    }
}
