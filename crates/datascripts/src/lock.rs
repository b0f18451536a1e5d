//! lock
//!
//! A lock is a set of up to eight requirements, any of which opens it.
//! Each requirement slot is a tagged union over four Lock.dbc columns:
//! `Type` is the tag and `Index`, `Skill` and `Action` are read
//! according to it.

use azerust_dbc::{
    tables::{self, LOCK_INDICES},
    DbcError, DbcFile, Row, RowMut,
};
use azerust_sql::{GameObjectTemplate, SqlCell, SqlQuery, SqlRow, SqlTable};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::EnumIter;
use tracing::{trace, warn};

use crate::{game_object::GameObjectType, ids::Ids};

/// The tag stored in a slot's `Type` column.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
pub enum LockIndexType {
    Plain = 0,
    Item = 1,
    LockType = 2,
}

/// One requirement slot of a lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockIndex {
    /// No requirement, or one described by raw properties.
    Plain {
        properties: i32,
        required_skill: i32,
        action: i32,
    },
    /// Opened by carrying an item.
    Item { item: u32, action: i32 },
    /// Opened by a skill, such as lockpicking or herbalism.
    LockType {
        lock_type: u32,
        required_skill: i32,
        action: i32,
    },
}

impl Default for LockIndex {
    fn default() -> Self {
        LockIndex::Plain {
            properties: 0,
            required_skill: 0,
            action: 0,
        }
    }
}

impl LockIndex {
    pub fn index_type(&self) -> LockIndexType {
        match self {
            LockIndex::Plain { .. } => LockIndexType::Plain,
            LockIndex::Item { .. } => LockIndexType::Item,
            LockIndex::LockType { .. } => LockIndexType::LockType,
        }
    }

    pub fn action(&self) -> i32 {
        match *self {
            LockIndex::Plain { action, .. }
            | LockIndex::Item { action, .. }
            | LockIndex::LockType { action, .. } => action,
        }
    }

    /// Decode slot `i` of a Lock row. Unknown tags read as plain.
    pub fn read(row: &Row<'_, tables::Lock>, i: usize) -> Self {
        let tag = row.get(tables::Lock::TYPE.at(i));
        let index = row.get(tables::Lock::INDEX.at(i));
        let skill = row.get(tables::Lock::SKILL.at(i));
        let action = row.get(tables::Lock::ACTION.at(i));
        let kind = LockIndexType::try_from(tag).unwrap_or_else(|_| {
            warn!("Lock {} has unknown type {} at index {}", row.id(), tag, i);
            LockIndexType::Plain
        });
        match kind {
            LockIndexType::Plain => LockIndex::Plain {
                properties: index,
                required_skill: skill,
                action,
            },
            LockIndexType::Item => LockIndex::Item {
                item: index as u32,
                action,
            },
            LockIndexType::LockType => LockIndex::LockType {
                lock_type: index as u32,
                required_skill: skill,
                action,
            },
        }
    }

    /// The `(Index, Skill)` columns of the slot. Items have no skill.
    fn columns(&self) -> (i32, i32) {
        match *self {
            LockIndex::Plain {
                properties,
                required_skill,
                ..
            } => (properties, required_skill),
            LockIndex::Item { item, .. } => (item as i32, 0),
            LockIndex::LockType {
                lock_type,
                required_skill,
                ..
            } => (lock_type as i32, required_skill),
        }
    }
}

/// The kinds of game object that point at a lock, and which data column
/// holds the lock id for each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum LockedObject {
    Chest,
    AreaDamage,
    Button,
    Camera,
    Door,
    FishingHole,
    FlagDrop,
    FlagStand,
    Goober,
    QuestGiver,
    Trap,
}

impl LockedObject {
    pub fn object_type(self) -> GameObjectType {
        match self {
            LockedObject::Chest => GameObjectType::CHEST,
            LockedObject::AreaDamage => GameObjectType::AREADAMAGE,
            LockedObject::Button => GameObjectType::BUTTON,
            LockedObject::Camera => GameObjectType::CAMERA,
            LockedObject::Door => GameObjectType::DOOR,
            LockedObject::FishingHole => GameObjectType::FISHINGHOLE,
            LockedObject::FlagDrop => GameObjectType::FLAGDROP,
            LockedObject::FlagStand => GameObjectType::FLAGSTAND,
            LockedObject::Goober => GameObjectType::GOOBER,
            LockedObject::QuestGiver => GameObjectType::QUESTGIVER,
            LockedObject::Trap => GameObjectType::TRAP,
        }
    }

    pub fn lock_column(self) -> SqlCell<i32> {
        match self {
            LockedObject::Button => GameObjectTemplate::data(1),
            LockedObject::FishingHole => GameObjectTemplate::data(4),
            _ => GameObjectTemplate::data(0),
        }
    }

    /// Templates of this kind locked with `lock`.
    pub fn query(self, lock: u32) -> SqlQuery<GameObjectTemplate> {
        SqlQuery::new()
            .filter(GameObjectTemplate::TYPE, u8::from(self.object_type()))
            .filter(self.lock_column(), lock as i32)
    }
}

/// A row of Lock.dbc.
pub struct Lock<'a> {
    row: RowMut<'a, tables::Lock>,
}

impl<'a> std::fmt::Debug for Lock<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lock")
            .field("id", &self.id())
            .field("indices", &self.indices().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a> Lock<'a> {
    pub fn new(row: RowMut<'a, tables::Lock>) -> Self {
        Self { row }
    }

    pub fn load(file: &'a mut DbcFile<tables::Lock>, id: u32) -> Option<Self> {
        file.find_by_id_mut(id).map(Self::new)
    }

    /// A new lock with every slot clear.
    pub fn create(file: &'a mut DbcFile<tables::Lock>, ids: &mut Ids) -> Result<Self, DbcError> {
        let id = ids.next(&*file)?;
        trace!("Creating lock {}", id);
        file.add(id).map(Self::new)
    }

    pub fn id(&self) -> u32 {
        self.row.id()
    }

    /// Slot `i`.
    ///
    /// # Panics
    ///
    /// If `i` is not below [`LOCK_INDICES`].
    pub fn index(&self, i: usize) -> LockIndex {
        LockIndex::read(&self.row.as_row(), i)
    }

    pub fn indices(&self) -> impl Iterator<Item = LockIndex> + '_ {
        (0..LOCK_INDICES).map(move |i| self.index(i))
    }

    pub fn set(&mut self, i: usize, entry: LockIndex) -> &mut Self {
        let (index, skill) = entry.columns();
        self.row
            .set(tables::Lock::TYPE.at(i), i32::from(entry.index_type()))
            .set(tables::Lock::INDEX.at(i), index)
            .set(tables::Lock::SKILL.at(i), skill)
            .set(tables::Lock::ACTION.at(i), entry.action());
        self
    }

    /// Put `entry` in the first clear slot, returning the slot, or `None`
    /// when every slot is taken.
    pub fn push(&mut self, entry: LockIndex) -> Option<usize> {
        let i = (0..LOCK_INDICES).find(|i| self.is_clear(*i))?;
        self.set(i, entry);
        Some(i)
    }

    pub fn clear(&mut self, i: usize) -> &mut Self {
        self.row
            .set(tables::Lock::TYPE.at(i), 0)
            .set(tables::Lock::SKILL.at(i), 0)
            .set(tables::Lock::INDEX.at(i), 0)
            .set(tables::Lock::ACTION.at(i), 0);
        self
    }

    pub fn is_clear(&self, i: usize) -> bool {
        self.row.get(tables::Lock::TYPE.at(i)) == 0
    }

    /// The first slot that opens with `lock_type`.
    pub fn is_of_type(&self, lock_type: u32) -> Option<usize> {
        self.indices().position(|entry| {
            matches!(entry, LockIndex::LockType { lock_type: t, .. } if t == lock_type)
        })
    }

    pub fn requires_item(&self, item: u32) -> bool {
        self.indices()
            .any(|entry| matches!(entry, LockIndex::Item { item: i, .. } if i == item))
    }

    /// Live templates of `kind` that use this lock.
    pub fn objects<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
        kind: LockedObject,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        templates.query_all(&kind.query(self.id()))
    }

    pub fn chests<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::Chest)
    }

    pub fn area_damages<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::AreaDamage)
    }

    pub fn buttons<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::Button)
    }

    pub fn cameras<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::Camera)
    }

    pub fn doors<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::Door)
    }

    pub fn fishing_holes<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::FishingHole)
    }

    pub fn flag_drops<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::FlagDrop)
    }

    pub fn flag_stands<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::FlagStand)
    }

    pub fn goobers<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::Goober)
    }

    pub fn quest_givers<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::QuestGiver)
    }

    pub fn traps<'t>(
        &self,
        templates: &'t SqlTable<GameObjectTemplate>,
    ) -> Vec<SqlRow<'t, GameObjectTemplate>> {
        self.objects(templates, LockedObject::Trap)
    }
}

#[cfg(test)]
mod test {
    use azerust_dbc::{tables, DbcFile};
    use azerust_sql::{GameObjectTemplate, SqlColumn, SqlRow, SqlTable, SqlValue};
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::{Lock, LockIndex, LockIndexType, LockedObject};
    use crate::{game_object::GameObjectType, ids::Ids};

    fn locks() -> DbcFile<tables::Lock> {
        let mut file = DbcFile::new();
        file.add(57)
            .unwrap()
            .set(tables::Lock::TYPE.at(0), 1)
            .set(tables::Lock::INDEX.at(0), 5396)
            .set(tables::Lock::TYPE.at(1), 2)
            .set(tables::Lock::INDEX.at(1), 1)
            .set(tables::Lock::SKILL.at(1), 175)
            .set(tables::Lock::ACTION.at(1), 1);
        file
    }

    fn entries(rows: Vec<SqlRow<'_, GameObjectTemplate>>) -> Vec<u32> {
        rows.iter().map(|r| r.get(GameObjectTemplate::ENTRY)).collect()
    }

    fn template(table: &mut SqlTable<GameObjectTemplate>, entry: u32, kind: GameObjectType) {
        table
            .add(vec![SqlValue::UInt(entry.into())])
            .unwrap()
            .set(GameObjectTemplate::TYPE, u8::from(kind))
            .set(GameObjectTemplate::data(0), 0)
            .set(GameObjectTemplate::data(1), 0)
            .set(GameObjectTemplate::data(4), 0);
    }

    #[test]
    pub fn reads_variants() {
        let mut file = locks();
        let lock = Lock::load(&mut file, 57).unwrap();
        assert_eq!(lock.id(), 57);
        assert_eq!(
            lock.index(0),
            LockIndex::Item {
                item: 5396,
                action: 0
            }
        );
        assert_eq!(
            lock.index(1),
            LockIndex::LockType {
                lock_type: 1,
                required_skill: 175,
                action: 1
            }
        );
        assert_eq!(lock.index(2), LockIndex::default());
        assert_eq!(lock.index(1).index_type(), LockIndexType::LockType);
        assert_eq!(lock.index(1).action(), 1);
    }

    #[test]
    pub fn unknown_tags_read_as_plain() {
        let mut file = locks();
        file.find_by_id_mut(57)
            .unwrap()
            .set(tables::Lock::TYPE.at(3), 7)
            .set(tables::Lock::INDEX.at(3), 12);
        let lock = Lock::load(&mut file, 57).unwrap();
        assert_eq!(
            lock.index(3),
            LockIndex::Plain {
                properties: 12,
                required_skill: 0,
                action: 0
            }
        );
        assert!(!lock.is_clear(3));
    }

    #[test]
    pub fn set_and_clear() {
        let mut file = locks();
        {
            let mut lock = Lock::load(&mut file, 57).unwrap();
            lock.set(
                2,
                LockIndex::LockType {
                    lock_type: 3,
                    required_skill: 50,
                    action: 2,
                },
            );
            assert_eq!(lock.is_of_type(3), Some(2));
            assert!(!lock.is_clear(2));

            lock.clear(1);
            assert!(lock.is_clear(1));
            assert_eq!(lock.index(1), LockIndex::default());
            assert_eq!(lock.is_of_type(1), None);
        }

        let row = file.find_by_id(57).unwrap();
        assert_eq!(row.get(tables::Lock::SKILL.at(1)), 0);
        assert_eq!(row.get(tables::Lock::ACTION.at(1)), 0);
        assert_eq!(row.get(tables::Lock::TYPE.at(2)), 2);
    }

    #[test]
    pub fn writing_an_item_drops_the_skill() {
        let mut file = locks();
        {
            let mut lock = Lock::load(&mut file, 57).unwrap();
            lock.set(1, LockIndex::Item { item: 12, action: 0 });
            assert!(lock.requires_item(12));
        }
        assert_eq!(
            file.find_by_id(57).unwrap().get(tables::Lock::SKILL.at(1)),
            0
        );
    }

    #[test]
    pub fn push_uses_the_first_clear_slot() {
        let mut file = locks();
        let mut lock = Lock::load(&mut file, 57).unwrap();
        assert_eq!(lock.push(LockIndex::Item { item: 1, action: 0 }), Some(2));
        for _ in 3..8 {
            assert!(lock.push(LockIndex::Item { item: 2, action: 0 }).is_some());
        }
        assert_eq!(lock.push(LockIndex::Item { item: 3, action: 0 }), None);
    }

    #[test_case(5396, true ; "required item")]
    #[test_case(1, false ; "lock type id is not an item")]
    #[test_case(0, false ; "clear slots are not items")]
    pub fn requires_item(item: u32, expected: bool) {
        let mut file = locks();
        let lock = Lock::load(&mut file, 57).unwrap();
        assert_eq!(lock.requires_item(item), expected);
    }

    #[test]
    #[should_panic]
    pub fn index_out_of_range() {
        let mut file = locks();
        let lock = Lock::load(&mut file, 57).unwrap();
        lock.index(8);
    }

    #[test]
    pub fn create_allocates_above_existing() {
        let mut file = locks();
        let mut ids = Ids::default();
        let lock = Lock::create(&mut file, &mut ids).unwrap();
        assert_eq!(lock.id(), 58);
        assert!(lock.indices().all(|e| e == LockIndex::default()));
    }

    #[test]
    pub fn finds_locked_objects() {
        let mut file = locks();
        let lock = Lock::load(&mut file, 57).unwrap();
        let mut templates = SqlTable::<GameObjectTemplate>::new();

        template(&mut templates, 1, GameObjectType::CHEST);
        templates
            .find_mut(&[SqlValue::UInt(1)])
            .unwrap()
            .set(GameObjectTemplate::data(0), 57);
        template(&mut templates, 2, GameObjectType::CHEST);
        template(&mut templates, 3, GameObjectType::DOOR);
        templates
            .find_mut(&[SqlValue::UInt(3)])
            .unwrap()
            .set(GameObjectTemplate::data(0), 57);
        template(&mut templates, 4, GameObjectType::BUTTON);
        templates
            .find_mut(&[SqlValue::UInt(4)])
            .unwrap()
            .set(GameObjectTemplate::data(0), 57)
            .set(GameObjectTemplate::data(1), 57);
        template(&mut templates, 5, GameObjectType::FISHINGHOLE);
        templates
            .find_mut(&[SqlValue::UInt(5)])
            .unwrap()
            .set(GameObjectTemplate::data(4), 57);
        template(&mut templates, 6, GameObjectType::CHEST);
        templates
            .find_mut(&[SqlValue::UInt(6)])
            .unwrap()
            .set(GameObjectTemplate::data(0), 57);
        templates.find_mut(&[SqlValue::UInt(6)]).unwrap().delete();

        assert_eq!(entries(lock.chests(&templates)), [1]);
        assert_eq!(entries(lock.doors(&templates)), [3]);
        assert_eq!(entries(lock.buttons(&templates)), [4]);
        assert_eq!(entries(lock.fishing_holes(&templates)), [5]);
        assert!(lock.traps(&templates).is_empty());
        assert!(lock.goobers(&templates).is_empty());
    }

    #[test]
    pub fn locked_object_columns() {
        for kind in LockedObject::iter() {
            let expected = match kind {
                LockedObject::Button => GameObjectTemplate::data(1),
                LockedObject::FishingHole => GameObjectTemplate::data(4),
                _ => GameObjectTemplate::data(0),
            };
            assert_eq!(kind.lock_column().column(), expected.column());
        }
        assert_eq!(LockedObject::iter().count(), 11);
        assert_eq!(LockedObject::QuestGiver.object_type(), GameObjectType::QUESTGIVER);
    }
}
