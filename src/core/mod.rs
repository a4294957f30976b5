//! Core board types
//!
//! This module contains the fundamental board types with zero external game
//! logic: letters with stable identity, per-slot colors, and the letter pool
//! that partitions the board between available and chosen letters.

mod letter;
mod pool;

pub use letter::{Letter, LetterColor};
pub use pool::LetterPool;

/// Number of letters on the board, and the required seed-word length.
pub const BOARD_SIZE: usize = 10;
