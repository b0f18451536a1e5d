use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumIter, EnumString};

/// Commonly used entries of FactionTemplate.dbc for creatures.
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
pub enum CreatureFactionTemplate {
    NeutralNonAggressive = 7,
    Stormwind = 11,
    NeutralHostile = 21,
    NeutralPassive = 35,
    Ironforge = 57,
    Gnomeregan = 64,
    Ratchet = 69,
    Undercity = 71,
    Darnassus = 79,
    Orgrimmar = 85,
    ThunderBluff = 105,
    BloodsailBuccaneers = 119,
    BootyBay = 121,
    DarkspearTrolls = 126,
    Gadgetzan = 474,
    CenarionCircle = 994,
    Silvermoon = 1604,
    Exodar = 1639,
    Shatar = 1741,
    KirinTor = 2007,
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::CreatureFactionTemplate;

    #[test_case(CreatureFactionTemplate::Stormwind, 11 ; "stormwind")]
    #[test_case(CreatureFactionTemplate::Orgrimmar, 85 ; "orgrimmar")]
    #[test_case(CreatureFactionTemplate::KirinTor, 2007 ; "kirin tor")]
    pub fn values(faction: CreatureFactionTemplate, value: u32) {
        assert_eq!(u32::from(faction), value);
        assert_eq!(CreatureFactionTemplate::try_from(value).ok(), Some(faction));
    }

    #[test]
    pub fn conversions_are_lossless() {
        for faction in CreatureFactionTemplate::iter() {
            let value: u32 = faction.into();
            assert_eq!(CreatureFactionTemplate::try_from(value).ok(), Some(faction));
        }
        assert!(CreatureFactionTemplate::try_from(8u32).is_err());
    }

    #[test]
    pub fn names() {
        assert_eq!(CreatureFactionTemplate::BootyBay.to_string(), "BootyBay");
        assert_eq!(
            "Undercity".parse::<CreatureFactionTemplate>().ok(),
            Some(CreatureFactionTemplate::Undercity)
        );
    }
}
