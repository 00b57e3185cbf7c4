use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::schema::{Field, FieldRule, Schema};

pub const COLLECTION: &str = "inventory";

/// An inventory item, owned by exactly one character. `characterId` is an
/// opaque reference; giving an item to another character means creating a
/// new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub rarity: String,
    pub character_name: String,
    pub character_id: String,
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    pub stats: ItemStats,
    pub level_requirement: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStats {
    #[serde(default)]
    pub attack: i64,
    #[serde(default)]
    pub defense: i64,
    #[serde(default)]
    pub mana_boost: i64,
    #[serde(default)]
    pub hp_boost: i64,
}

fn default_quantity() -> i64 {
    1
}

impl Item {
    /// Quantities below one persist as one; an item either exists with a
    /// positive count or not at all.
    pub fn normalized(mut self) -> Self {
        if self.quantity < 1 {
            self.quantity = 1;
        }
        self
    }
}

static RULES: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        Field::required("name", FieldRule::text_max(100)),
        Field::required("type", FieldRule::text()),
        Field::required("rarity", FieldRule::text()),
        Field::required("characterName", FieldRule::text()),
        Field::required("characterId", FieldRule::text()),
        Field::required("description", FieldRule::text()),
        // Zero and negative quantities are accepted here and clamped to 1
        // by Item::normalized before the write.
        Field::optional("quantity", FieldRule::Integer { min: None, max: None }),
        Field::required(
            "stats",
            FieldRule::object(vec![
                Field::required("attack", FieldRule::integer_min(0)),
                Field::required("defense", FieldRule::integer_min(0)),
                Field::required("manaBoost", FieldRule::integer_min(0)),
                Field::required("hpBoost", FieldRule::integer_min(0)),
            ]),
        ),
        Field::required("levelRequirement", FieldRule::integer_range(1, 20)),
    ])
});

pub fn rules() -> &'static Schema {
    &RULES
}
