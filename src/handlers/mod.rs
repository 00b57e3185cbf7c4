//! Resource controllers: translate request parameters and validated bodies
//! into store operations and map outcomes to status codes and JSON bodies.
//! Every operation touches exactly one collection.

pub mod auth;
pub mod characters;
pub mod inventory;
pub mod players;
pub mod quests;
pub mod system;
