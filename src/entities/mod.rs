//! The four resource kinds and their validation rule sets.
//!
//! Each module owns the payload struct (serde defaults double as the
//! create/update field defaults), the collection name, and the declarative
//! [`Schema`](crate::schema::Schema) its write routes validate against.

pub mod character;
pub mod item;
pub mod player;
pub mod quest;

pub use character::Character;
pub use item::{Item, ItemStats};
pub use player::Player;
pub use quest::{Objective, Quest};
