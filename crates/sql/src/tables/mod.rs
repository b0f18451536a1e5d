//! World database table layouts.

mod gameobject_loot_template;
mod gameobject_template;

pub use gameobject_loot_template::GameObjectLootTemplate;
pub use gameobject_template::{GameObjectTemplate, GAMEOBJECT_DATA_COLUMNS};
