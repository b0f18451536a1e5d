use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumIter, EnumString};

/// Item stat kinds as stored in `item_template.stat_type`.
#[allow(non_camel_case_types)]
#[repr(u8)]
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
pub enum StatType {
    HEALTH = 1,
    MANA = 2,
    AGILITY = 3,
    STRENGTH = 4,
    INTELLECT = 5,
    SPIRIT = 6,
    STAMINA = 7,
    DEFENSE_RATING = 12,
    DODGE_RATING = 13,
    PARRY_RATING = 14,
    SHIELD_BLOCK = 15,
    MELEE_HIT = 16,
    RANGED_HIT = 17,
    SPELL_HIT = 18,
    MELEE_CRIT = 19,
    RANGED_CRIT = 20,
    SPELL_CRIT = 21,
    MELEE_HIT_AVOIDANCE = 22,
    RANGED_HIT_AVOIDANCE = 23,
    SPELL_HIT_AVOIDANCE = 24,
    MELEE_CRIT_AVOIDANCE = 25,
    RANGED_CRIT_AVOIDANCE = 26,
    SPELL_CRIT_AVOIDANCE = 27,
    MELEE_HASTE = 28,
    RANGED_HASTE = 29,
    SPELL_HASTE = 30,
    HIT_RATING = 31,
    CRIT_RATING = 32,
    HIT_AVOIDANCE = 33,
    CRIT_AVOIDANCE = 34,
    RESILIENCE = 35,
    HASTE = 36,
    EXPERTISE = 37,
    ATTACK_POWER = 38,
    RANGED_POWER = 39,
    FERAL_POWER = 40,
    DAMAGE_DONE = 41,
    HEALING_DONE = 42,
    MANA_PER5_SECONDS = 43,
    ARMOR_PENETRATION = 44,
    SPELLPOWER = 45,
    HEALTH_PER5_SECONDS = 46,
    SPELL_PENETRATION = 47,
    BLOCK_VALUE = 48,
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::StatType;

    #[test_case(7, Some(StatType::STAMINA) ; "last primary stat")]
    #[test_case(8, None ; "gap after primary stats")]
    #[test_case(12, Some(StatType::DEFENSE_RATING) ; "first rating")]
    #[test_case(48, Some(StatType::BLOCK_VALUE) ; "last")]
    #[test_case(49, None ; "past the end")]
    pub fn from_stored(value: u8, stat: Option<StatType>) {
        assert_eq!(StatType::try_from(value).ok(), stat);
    }

    #[test]
    pub fn round_trips_every_stat() {
        assert_eq!(StatType::iter().count(), 44);
        for stat in StatType::iter() {
            assert_eq!(StatType::try_from(u8::from(stat)).ok(), Some(stat));
            assert_eq!(stat.to_string().parse::<StatType>().ok(), Some(stat));
        }
    }
}
