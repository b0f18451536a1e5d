//! spell power
//!
//! The resource a spell consumes. Spell.dbc calls every cost column
//! "mana" regardless of the power type; rage is stored in tenths.

use azerust_dbc::{
    tables::{Spell, SpellRuneCost},
    DbcError, DbcFile, DbcTable, Row, RowMut,
};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{trace, warn};

use crate::ids::Ids;

/// Rage is stored in tenths of a point.
const RAGE_SCALE: i32 = 10;

#[repr(i32)]
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerType {
    Health = -2,
    Invalid = -1,
    Mana = 0,
    Rage = 1,
    PetEnergy = 2,
    Energy = 3,
    Elixir = 4,
    Runes = 5,
    RunicPower = 6,
}

/// The five cost columns, in the units the player sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerCost {
    pub base: i32,
    /// Percentage of the caster's maximum power.
    pub percent: i32,
    pub per_level: i32,
    pub per_second: i32,
    pub per_second_per_level: i32,
}

impl PowerCost {
    pub fn base(base: i32) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}

/// The power settings of one Spell row.
pub struct SpellPower<'a> {
    spell: RowMut<'a, Spell>,
}

impl<'a> std::fmt::Debug for SpellPower<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellPower")
            .field("spell", &self.spell.id())
            .field("power_type", &self.power_type())
            .finish()
    }
}

impl<'a> SpellPower<'a> {
    pub fn new(spell: RowMut<'a, Spell>) -> Self {
        Self { spell }
    }

    pub fn load(file: &'a mut DbcFile<Spell>, id: u32) -> Option<Self> {
        file.find_by_id_mut(id).map(Self::new)
    }

    pub fn spell_id(&self) -> u32 {
        self.spell.id()
    }

    /// Stored values without a power type read as [`PowerType::Invalid`].
    pub fn power_type(&self) -> PowerType {
        let stored = self.spell.get(Spell::POWER_TYPE);
        PowerType::try_from(stored).unwrap_or_else(|_| {
            warn!("Spell {} has unknown power type {}", self.spell.id(), stored);
            PowerType::Invalid
        })
    }

    pub fn set_power_type(&mut self, power_type: PowerType) -> &mut Self {
        self.spell.set(Spell::POWER_TYPE, i32::from(power_type));
        self
    }

    pub fn power_cost_base(&self) -> i32 {
        self.spell.get(Spell::MANA_COST)
    }

    pub fn set_power_cost_base(&mut self, value: i32) -> &mut Self {
        self.spell.set(Spell::MANA_COST, value);
        self
    }

    pub fn power_cost_percent(&self) -> i32 {
        self.spell.get(Spell::MANA_COST_PCT)
    }

    pub fn set_power_cost_percent(&mut self, value: i32) -> &mut Self {
        self.spell.set(Spell::MANA_COST_PCT, value);
        self
    }

    pub fn power_cost_per_level(&self) -> i32 {
        self.spell.get(Spell::MANA_COST_PER_LEVEL)
    }

    pub fn set_power_cost_per_level(&mut self, value: i32) -> &mut Self {
        self.spell.set(Spell::MANA_COST_PER_LEVEL, value);
        self
    }

    pub fn power_per_second(&self) -> i32 {
        self.spell.get(Spell::MANA_PER_SECOND)
    }

    pub fn set_power_per_second(&mut self, value: i32) -> &mut Self {
        self.spell.set(Spell::MANA_PER_SECOND, value);
        self
    }

    pub fn power_per_second_per_level(&self) -> i32 {
        self.spell.get(Spell::MANA_PER_SECOND_PER_LEVEL)
    }

    pub fn set_power_per_second_per_level(&mut self, value: i32) -> &mut Self {
        self.spell.set(Spell::MANA_PER_SECOND_PER_LEVEL, value);
        self
    }

    /// The cost columns exactly as stored.
    pub fn cost(&self) -> PowerCost {
        PowerCost {
            base: self.power_cost_base(),
            percent: self.power_cost_percent(),
            per_level: self.power_cost_per_level(),
            per_second: self.power_per_second(),
            per_second_per_level: self.power_per_second_per_level(),
        }
    }

    fn set_cost(&mut self, power_type: PowerType, cost: PowerCost) -> &mut Self {
        self.set_power_type(power_type)
            .set_power_cost_base(cost.base)
            .set_power_cost_percent(cost.percent)
            .set_power_cost_per_level(cost.per_level)
            .set_power_per_second(cost.per_second)
            .set_power_per_second_per_level(cost.per_second_per_level)
    }

    pub fn set_mana(&mut self, cost: PowerCost) -> &mut Self {
        self.set_cost(PowerType::Mana, cost)
    }

    pub fn set_energy(&mut self, cost: PowerCost) -> &mut Self {
        self.set_cost(PowerType::Energy, cost)
    }

    /// Rage amounts are given in whole points; the percentage is kept
    /// as is. Amounts that do not fit once scaled saturate at the `i32`
    /// bounds.
    pub fn set_rage(&mut self, cost: PowerCost) -> &mut Self {
        self.set_cost(
            PowerType::Rage,
            PowerCost {
                base: cost.base.saturating_mul(RAGE_SCALE),
                percent: cost.percent,
                per_level: cost.per_level.saturating_mul(RAGE_SCALE),
                per_second: cost.per_second.saturating_mul(RAGE_SCALE),
                per_second_per_level: cost.per_second_per_level.saturating_mul(RAGE_SCALE),
            },
        )
    }

    /// The SpellRuneCost row this spell points at, if any.
    pub fn rune_cost<'r>(&self, costs: &'r DbcFile<SpellRuneCost>) -> Option<Row<'r, SpellRuneCost>> {
        match self.rune_cost_id() {
            0 => None,
            id => costs.find_by_id(id),
        }
    }

    /// The rune cost for editing, created with every cost zeroed when the
    /// spell has none. The row may be shared with other spells; use
    /// [`SpellPower::rune_cost_copy`] to edit this spell alone.
    pub fn rune_cost_mut<'r>(
        &mut self,
        costs: &'r mut DbcFile<SpellRuneCost>,
        ids: &mut Ids,
    ) -> Result<RowMut<'r, SpellRuneCost>, DbcError> {
        let id = self.rune_cost_id();
        if id != 0 && costs.contains(id) {
            return costs.find_by_id_mut(id).ok_or(DbcError::NoSuchRow {
                table: SpellRuneCost::TABLE_NAME,
                id,
            });
        }
        self.create_rune_cost(costs, ids)
    }

    /// Point the spell at a private copy of its rune cost and return it.
    pub fn rune_cost_copy<'r>(
        &mut self,
        costs: &'r mut DbcFile<SpellRuneCost>,
        ids: &mut Ids,
    ) -> Result<RowMut<'r, SpellRuneCost>, DbcError> {
        let source = self.rune_cost_id();
        if source == 0 || !costs.contains(source) {
            return self.create_rune_cost(costs, ids);
        }
        let id = ids.next(&*costs)?;
        trace!("Copying rune cost {} to {} for spell {}", source, id, self.spell.id());
        let row = costs.clone_row(source, id)?;
        self.set_rune_cost_id(id);
        Ok(row)
    }

    fn create_rune_cost<'r>(
        &mut self,
        costs: &'r mut DbcFile<SpellRuneCost>,
        ids: &mut Ids,
    ) -> Result<RowMut<'r, SpellRuneCost>, DbcError> {
        let id = ids.next(&*costs)?;
        trace!("Creating rune cost {} for spell {}", id, self.spell.id());
        let mut row = costs.add(id)?;
        row.set(SpellRuneCost::BLOOD, 0)
            .set(SpellRuneCost::FROST, 0)
            .set(SpellRuneCost::UNHOLY, 0)
            .set(SpellRuneCost::RUNIC_POWER, 0);
        self.set_rune_cost_id(id);
        Ok(row)
    }

    fn rune_cost_id(&self) -> u32 {
        self.spell.get(Spell::RUNE_COST_ID) as u32
    }

    fn set_rune_cost_id(&mut self, id: u32) {
        self.spell.set(Spell::RUNE_COST_ID, id as i32);
    }
}
