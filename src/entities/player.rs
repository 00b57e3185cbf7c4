use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{Field, FieldRule, Schema};

pub const COLLECTION: &str = "players";

/// A player account. `createdAt` is store-managed: set once at creation and
/// preserved across replaces, never taken from the request body. Character
/// references are opaque; no referential integrity is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub username: String,
    pub profile_url: String,
    #[serde(default)]
    pub characters: Vec<Value>,
}

static RULES: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        Field::required("username", FieldRule::text()),
        Field::required("profileUrl", FieldRule::text()),
        Field::required("characters", FieldRule::array()),
    ])
});

pub fn rules() -> &'static Schema {
    &RULES
}
