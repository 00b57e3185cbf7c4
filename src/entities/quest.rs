use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::schema::{Field, FieldRule, Schema};

pub const COLLECTION: &str = "quests";

pub const DIFFICULTIES: &[&str] = &["easy", "medium", "hard", "legendary"];
pub const STATUSES: &[&str] = &["available", "in-progress", "completed", "failed", "locked"];
pub const QUEST_TYPES: &[&str] = &["main", "side", "daily", "weekly", "event"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub title: String,
    pub description: String,
    pub difficulty: String,
    #[serde(default)]
    pub experience_reward: i64,
    #[serde(default)]
    pub gold_reward: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_reward: Option<String>,
    pub quest_giver: String,
    pub location: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,
    #[serde(default = "default_quest_type")]
    pub quest_type: String,
    #[serde(default)]
    pub is_repeatable: bool,
    #[serde(default = "default_minimum_level")]
    pub minimum_level: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

fn default_status() -> String {
    "available".to_string()
}

fn default_quest_type() -> String {
    "main".to_string()
}

fn default_minimum_level() -> i64 {
    1
}

static RULES: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        Field::required("title", FieldRule::text_max(100)),
        Field::required("description", FieldRule::text_max(1000)),
        Field::required("difficulty", FieldRule::one_of(DIFFICULTIES)),
        Field::optional("experienceReward", FieldRule::integer_min(0)),
        Field::optional("goldReward", FieldRule::integer_min(0)),
        Field::optional("itemReward", FieldRule::text()),
        Field::required("questGiver", FieldRule::text_max(100)),
        Field::required("location", FieldRule::text_max(100)),
        Field::optional("requirements", FieldRule::array_of(FieldRule::text())),
        Field::optional(
            "objectives",
            FieldRule::array_of(FieldRule::object(vec![
                Field::required("description", FieldRule::text_max(200)),
                Field::optional("completed", FieldRule::Boolean),
            ])),
        ),
        Field::optional("status", FieldRule::one_of(STATUSES)),
        Field::optional("estimatedDuration", FieldRule::text_max(50)),
        Field::optional("questType", FieldRule::one_of(QUEST_TYPES)),
        Field::optional("isRepeatable", FieldRule::Boolean),
        Field::optional("minimumLevel", FieldRule::integer_range(1, 20)),
    ])
});

pub fn rules() -> &'static Schema {
    &RULES
}
