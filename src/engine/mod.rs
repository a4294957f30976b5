//! Game session, hint search, and the player intent surface

mod hints;
mod manager;
mod session;

pub use hints::MIN_WORD_LEN;
pub use manager::GameManager;
pub use session::{Alert, GameSession};
