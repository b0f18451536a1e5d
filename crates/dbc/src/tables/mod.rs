//! tables
//!
//! Record layouts of the 3.3.5a (build 12340) client tables. Offsets are
//! in bytes from the start of the record.

mod auction_house;
mod gm_survey_answers;
mod lightfloat_band;
mod lock;
mod lock_type;
mod object_effect_modifier;
mod skill_line;
mod skill_race_class_info;
mod skill_tiers;
mod spell;
mod spell_item_enchantment_condition;
mod spell_rune_cost;

pub use auction_house::AuctionHouse;
pub use gm_survey_answers::GMSurveyAnswers;
pub use lightfloat_band::LightfloatBand;
pub use lock::{Lock, LOCK_INDICES};
pub use lock_type::LockType;
pub use object_effect_modifier::ObjectEffectModifier;
pub use skill_line::SkillLine;
pub use skill_race_class_info::SkillRaceClassInfo;
pub use skill_tiers::{SkillTiers, SKILL_TIER_SLOTS};
pub use spell::Spell;
pub use spell_item_enchantment_condition::SpellItemEnchantmentCondition;
pub use spell_rune_cost::SpellRuneCost;
