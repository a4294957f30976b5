//! Board letter representation
//!
//! A Letter carries a single uppercase character plus two identities: the
//! `slot_id` addressing its fixed grid position (and color state), and the
//! `position_key` deciding where it reinserts into the available sequence
//! when the player un-chooses it.

use std::fmt;

/// A single letter on the board
///
/// `slot_id` never changes for a letter's lifetime; `position_key` is the
/// creation-order index and is re-attached per display position across
/// shuffles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    content: u8,
    slot_id: usize,
    position_key: usize,
}

impl Letter {
    /// Create a letter from an ASCII-uppercase content byte
    #[must_use]
    pub const fn new(content: u8, slot_id: usize, position_key: usize) -> Self {
        Self {
            content,
            slot_id,
            position_key,
        }
    }

    /// The letter's content as an ASCII byte
    #[inline]
    #[must_use]
    pub const fn content(self) -> u8 {
        self.content
    }

    /// The letter's content as a char
    #[inline]
    #[must_use]
    pub const fn content_char(self) -> char {
        self.content as char
    }

    /// Stable grid identity, in `[0, BOARD_SIZE)`
    #[inline]
    #[must_use]
    pub const fn slot_id(self) -> usize {
        self.slot_id
    }

    /// Creation-order index used for reinsertion ordering
    #[inline]
    #[must_use]
    pub const fn position_key(self) -> usize {
        self.position_key
    }

    pub(crate) const fn set_position_key(&mut self, position_key: usize) {
        self.position_key = position_key;
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content_char())
    }
}

/// Per-slot color state driven by validation feedback and hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterColor {
    /// Resting state
    #[default]
    Default,
    /// Last submit was accepted
    Correct,
    /// Last submit repeated an already-found word
    Duplicate,
    /// Last submit was not a dictionary word
    Invalid,
    /// Slot is part of a revealed hint word
    Hint,
}
