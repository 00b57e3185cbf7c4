pub mod session;
pub mod validate;

pub use session::{require_session, CurrentSession};
pub use validate::{
    validate_character, validate_item, validate_player, validate_quest,
};
