//! Word catalog: the two dictionary views the game runs on
//!
//! A generating list of board-sized seed words and a searching list of all
//! guessable words, the latter also exposed as a set for O(1) membership
//! during submit. Construction validates that at least one seed word exists;
//! a session must never draw from an empty list.

mod embedded;
pub mod loader;

pub use embedded::{GENERATING, GENERATING_COUNT, SEARCHING, SEARCHING_COUNT};

use crate::core::BOARD_SIZE;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for catalog construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No usable seed word of the required length survived loading
    NoSeedWords,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSeedWords => write!(
                f,
                "generating word list has no words of length {BOARD_SIZE}"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The two dictionary views: seed candidates and guessable words
#[derive(Debug, Clone)]
pub struct WordCatalog {
    generating: Vec<String>,
    searching: Vec<String>,
    searching_set: FxHashSet<String>,
}

impl WordCatalog {
    /// Build a catalog from two word lists
    ///
    /// Words are uppercased and blank entries dropped. Generating entries
    /// whose length is not `BOARD_SIZE` are discarded with a warning.
    ///
    /// # Errors
    /// Returns [`CatalogError::NoSeedWords`] if no generating word survives,
    /// which would leave the session with nothing to seed a board from.
    pub fn new(
        generating: Vec<String>,
        searching: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let before = generating.len();
        let generating: Vec<String> = generating
            .into_iter()
            .map(|w| w.trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .filter(|w| w.len() == BOARD_SIZE)
            .collect();

        let dropped = before - generating.len();
        if dropped > 0 {
            log::warn!("dropped {dropped} generating words not of length {BOARD_SIZE}");
        }

        if generating.is_empty() {
            return Err(CatalogError::NoSeedWords);
        }

        let searching: Vec<String> = searching
            .into_iter()
            .map(|w| w.trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        let searching_set = searching.iter().cloned().collect();

        Ok(Self {
            generating,
            searching,
            searching_set,
        })
    }

    /// Build the catalog from the embedded default word lists
    ///
    /// # Errors
    /// Returns [`CatalogError::NoSeedWords`] if the embedded generating list
    /// is unusable (it is validated by tests, so this does not happen in a
    /// correctly built binary).
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::new(
            loader::words_from_slice(GENERATING),
            loader::words_from_slice(SEARCHING),
        )
    }

    /// Whether a word is in the searching set
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.searching_set.contains(word)
    }

    /// Draw a random seed word for a new board
    ///
    /// # Panics
    /// Will not panic - construction fails on an empty generating list.
    #[must_use]
    pub fn random_seed(&self) -> &str {
        self.generating
            .choose(&mut rand::rng())
            .expect("catalog construction guarantees at least one seed word")
    }

    /// All guessable words, for the hint scan
    #[must_use]
    pub fn searching_words(&self) -> &[String] {
        &self.searching
    }

    /// Number of seed-word candidates
    #[must_use]
    pub fn generating_len(&self) -> usize {
        self.generating.len()
    }

    /// Number of guessable words
    #[must_use]
    pub fn searching_len(&self) -> usize {
        self.searching.len()
    }
}
