use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::schema::{Field, FieldRule, Schema};

pub const COLLECTION: &str = "characters";

/// A player character. `userId` is an opaque reference to the owning player;
/// deleting a player does not cascade here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub user_id: String,
    pub class: String,
    pub race: String,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default = "default_ten")]
    pub hit_points: i64,
    #[serde(default = "default_ten")]
    pub armor_class: i64,
    #[serde(default = "default_ten")]
    pub strength: i64,
    #[serde(default = "default_ten")]
    pub dexterity: i64,
    #[serde(default = "default_ten")]
    pub constitution: i64,
    #[serde(default = "default_ten")]
    pub intelligence: i64,
    #[serde(default = "default_ten")]
    pub wisdom: i64,
    #[serde(default = "default_ten")]
    pub charisma: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
}

fn default_level() -> i64 {
    1
}

fn default_ten() -> i64 {
    10
}

static RULES: Lazy<Schema> = Lazy::new(|| {
    let ability = || FieldRule::integer_range(1, 30);
    Schema::new(vec![
        Field::required("name", FieldRule::text_max(100)),
        Field::required("userId", FieldRule::text()),
        Field::required("class", FieldRule::text_max(50)),
        Field::required("race", FieldRule::text_max(50)),
        Field::optional("level", FieldRule::integer_range(1, 20)),
        Field::optional("hitPoints", FieldRule::integer_min(1)),
        Field::optional("armorClass", FieldRule::integer_min(1)),
        Field::optional("strength", ability()),
        Field::optional("dexterity", ability()),
        Field::optional("constitution", ability()),
        Field::optional("intelligence", ability()),
        Field::optional("wisdom", ability()),
        Field::optional("charisma", ability()),
        Field::optional("background", FieldRule::text_max(200)),
        Field::optional("alignment", FieldRule::text_max(50)),
    ])
});

pub fn rules() -> &'static Schema {
    &RULES
}
