//! profession
//!
//! Professions are skill lines with a SkillRaceClassInfo entry marking
//! them as such and a SkillTiers entry holding the skill cap of each
//! rank.

use azerust_cell::Locale;
use azerust_dbc::{
    tables::{SkillLine, SkillRaceClassInfo, SkillTiers, SKILL_TIER_SLOTS},
    DbcError, DbcFile, DbcQuery, DbcTable, LocString, Row, RowMut,
};
use enumflags2::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::ids::Ids;

/// Skill points per profession rank.
pub const SKILL_PER_TIER: i32 = 75;

/// The professions and secondary skills of the stock client.
#[repr(u32)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    Display,
    EnumIter,
)]
pub enum DefaultProfession {
    Alchemy = 171,
    Blacksmithing = 164,
    Cooking = 185,
    Enchanting = 333,
    Engineering = 202,
    FirstAid = 129,
    Fishing = 356,
    Herbalism = 182,
    Inscription = 773,
    Jewelcrafting = 755,
    Leatherworking = 165,
    Mining = 186,
    Skinning = 393,
    Tailoring = 197,
}

/// Profession ranks, each adding [`SKILL_PER_TIER`] to the cap.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive, EnumIter,
)]
pub enum ProfessionTier {
    Apprentice = 1,
    Journeyman = 2,
    Expert = 3,
    Artisan = 4,
    Master = 5,
    GrandMaster = 6,
}

impl ProfessionTier {
    pub fn max_skill(self) -> i32 {
        i32::from(u8::from(self)) * SKILL_PER_TIER
    }
}

/// Where the skill line is listed in the skills window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfessionKind {
    Profession,
    Secondary,
    /// Any other SkillLineCategory.
    Category(i32),
}

impl ProfessionKind {
    pub fn category(self) -> i32 {
        match self {
            ProfessionKind::Profession => 11,
            ProfessionKind::Secondary => 9,
            ProfessionKind::Category(c) => c,
        }
    }
}

#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillRaceClassFlags {
    IsProfession = 0x0001,
    NoSkillupMessage = 0x0002,
    AlwaysMaxValue = 0x0010,
    Unlearnable = 0x0020,
    IsClassLine = 0x0080,
    NotTrainable = 0x0100,
    MonoValue = 0x0400,
}

/// The tables that make up professions.
#[derive(Debug)]
pub struct Professions<'a> {
    skill_lines: &'a mut DbcFile<SkillLine>,
    race_class_infos: &'a mut DbcFile<SkillRaceClassInfo>,
    tiers: &'a mut DbcFile<SkillTiers>,
    ids: &'a mut Ids,
}

impl<'a> Professions<'a> {
    pub fn new(
        skill_lines: &'a mut DbcFile<SkillLine>,
        race_class_infos: &'a mut DbcFile<SkillRaceClassInfo>,
        tiers: &'a mut DbcFile<SkillTiers>,
        ids: &'a mut Ids,
    ) -> Self {
        Self {
            skill_lines,
            race_class_infos,
            tiers,
            ids,
        }
    }

    /// Look up a profession by skill line id or stock profession.
    pub fn load(&mut self, id: impl Into<u32>) -> Option<Profession<'_>> {
        self.skill_lines.find_by_id_mut(id.into()).map(Profession::new)
    }

    /// Create a profession under the id registered for `(module, name)`.
    pub fn create(
        &mut self,
        module: &str,
        name: &str,
        has_crafting: bool,
        kind: ProfessionKind,
        highest_tier: ProfessionTier,
    ) -> Result<Profession<'_>, DbcError> {
        let skill = self.ids.named(&*self.skill_lines, module, name)?;
        if self.skill_lines.contains(skill) {
            return Err(DbcError::DuplicateKey {
                table: SkillLine::TABLE_NAME,
                id: skill,
            });
        }

        let tier = self.ids.next(&*self.tiers)?;
        let mut caps = [0; SKILL_TIER_SLOTS];
        for (rank, cap) in caps
            .iter_mut()
            .take(usize::from(u8::from(highest_tier)))
            .enumerate()
        {
            *cap = (rank as i32 + 1) * SKILL_PER_TIER;
        }
        self.tiers.add(tier)?.set(SkillTiers::VALUE, caps);

        let info = self.ids.next(&*self.race_class_infos)?;
        self.race_class_infos
            .add(info)?
            .set(SkillRaceClassInfo::SKILL_ID, skill as i32)
            .set(SkillRaceClassInfo::RACE_MASK, 0u32)
            .set(SkillRaceClassInfo::CLASS_MASK, 0u32)
            .set(
                SkillRaceClassInfo::FLAGS,
                (SkillRaceClassFlags::IsProfession | SkillRaceClassFlags::IsClassLine).bits(),
            )
            .set(SkillRaceClassInfo::SKILL_TIER_ID, tier as i32);

        debug!("Created profession {}:{} as skill line {}", module, name, skill);
        let mut profession = Profession::new(self.skill_lines.add(skill)?);
        profession
            .set_category(kind.category())
            .set_can_link(true)
            .set_has_crafting(has_crafting);
        Ok(profession)
    }
}

/// A SkillLine row used as a profession.
pub struct Profession<'a> {
    row: RowMut<'a, SkillLine>,
}

impl<'a> std::fmt::Debug for Profession<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profession")
            .field("id", &self.id())
            .field("category", &self.category())
            .finish()
    }
}

impl<'a> Profession<'a> {
    pub fn new(row: RowMut<'a, SkillLine>) -> Self {
        Self { row }
    }

    pub fn id(&self) -> u32 {
        self.row.id()
    }

    pub fn category(&self) -> i32 {
        self.row.get(SkillLine::CATEGORY)
    }

    pub fn set_category(&mut self, category: i32) -> &mut Self {
        self.row.set(SkillLine::CATEGORY, category);
        self
    }

    pub fn name(&self) -> LocString {
        self.row.get(SkillLine::DISPLAY_NAME)
    }

    pub fn set_name(&mut self, locale: Locale, name: &str) -> &mut Self {
        let mut loc = self.name();
        loc.set(locale, name);
        loc.mask |= 1 << locale.slot();
        self.row.set(SkillLine::DISPLAY_NAME, loc);
        self
    }

    pub fn can_link(&self) -> bool {
        self.row.get(SkillLine::CAN_LINK) != 0
    }

    pub fn set_can_link(&mut self, can_link: bool) -> &mut Self {
        self.row.set(SkillLine::CAN_LINK, i32::from(can_link));
        self
    }

    /// Whether the profession has recipes. Without them there is no
    /// trade skill window to link.
    pub fn has_crafting(&self) -> bool {
        self.can_link()
    }

    pub fn set_has_crafting(&mut self, has_crafting: bool) -> &mut Self {
        self.set_can_link(has_crafting)
    }

    /// SkillRaceClassInfo rows of this skill line.
    pub fn race_class_infos<'r>(
        &self,
        infos: &'r DbcFile<SkillRaceClassInfo>,
    ) -> Vec<Row<'r, SkillRaceClassInfo>> {
        infos.query_all(&DbcQuery::new().filter(SkillRaceClassInfo::SKILL_ID, self.id() as i32))
    }
}
