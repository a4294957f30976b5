//! A single game session
//!
//! Owns the letter pool, per-slot colors, discovered words, score, and the
//! last validation feedback. All mutation funnels through the session's
//! methods; readers get immutable views. A session is replaced wholesale on
//! restart, never reset in place.

use super::hints;
use crate::catalog::WordCatalog;
use crate::core::{BOARD_SIZE, Letter, LetterColor, LetterPool};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Validation feedback shown after a submit
#[derive(Debug, Clone, Default)]
pub struct Alert {
    /// Feedback message text
    pub text: String,
    /// Feedback color, `None` when neutral/cleared
    pub color: Option<LetterColor>,
}

/// Game state for one board: pool, colors, discovered words, score
pub struct GameSession<'a> {
    catalog: &'a WordCatalog,
    pool: LetterPool,
    colors: [LetterColor; BOARD_SIZE],
    seen_words: FxHashSet<String>,
    score: usize,
    alert: Alert,
}

impl<'a> GameSession<'a> {
    /// Start a session on a freshly drawn seed word
    #[must_use]
    pub fn new(catalog: &'a WordCatalog) -> Self {
        let seed = catalog.random_seed();
        Self::from_seed_word(catalog, seed)
    }

    /// Start a session on a specific seed word (deterministic setups, replays)
    ///
    /// The seed is uppercased; its shuffled characters populate the board.
    #[must_use]
    pub fn from_seed_word(catalog: &'a WordCatalog, seed_word: &str) -> Self {
        Self {
            catalog,
            pool: LetterPool::new(&seed_word.to_uppercase()),
            colors: [LetterColor::Default; BOARD_SIZE],
            seen_words: FxHashSet::default(),
            score: 0,
            alert: Alert::default(),
        }
    }

    /// Toggle a letter between the board and the current word
    pub fn choose(&mut self, slot_id: usize) {
        self.pool.choose(slot_id);
    }

    /// Reshuffle the available letters' display order
    pub fn shuffle(&mut self) {
        self.pool.shuffle();
    }

    /// Validate the current word
    ///
    /// Accepted words must be longer than two letters, undiscovered, and in
    /// the searching set; a repeat of a discovered word reports a duplicate;
    /// anything else is invalid. All colors reset first (hints included),
    /// then every chosen slot takes the feedback color. Returns `true` only
    /// on acceptance so the caller can kick off a definition lookup.
    pub fn submit(&mut self) -> bool {
        let word = self.pool.current_word();

        self.set_color_to_default(false);

        let (accepted, color, text) = if word.len() >= hints::MIN_WORD_LEN
            && !self.seen_words.contains(&word)
            && self.catalog.contains(&word)
        {
            self.score += word.len();
            self.seen_words.insert(word);
            (true, LetterColor::Correct, "Great!")
        } else if self.seen_words.contains(&word) {
            (
                false,
                LetterColor::Duplicate,
                "You've already entered this word.",
            )
        } else {
            (
                false,
                LetterColor::Invalid,
                "Mmm... I can't find it in the dictionary.",
            )
        };

        for letter in self.pool.chosen() {
            self.colors[letter.slot_id()] = color;
        }
        self.alert = Alert {
            text: text.to_string(),
            color: Some(color),
        };

        accepted
    }

    /// Reset slot colors to the resting state
    ///
    /// With `preserve_hinted`, slots currently showing a hint keep their
    /// color. The alert color always clears to neutral.
    pub fn set_color_to_default(&mut self, preserve_hinted: bool) {
        for color in &mut self.colors {
            if preserve_hinted && *color == LetterColor::Hint {
                continue;
            }
            *color = LetterColor::Default;
        }
        self.alert.color = None;
    }

    /// Reveal one undiscovered word by coloring its letter slots
    ///
    /// Picks uniformly at random among every searching-set word the board
    /// can still spell, then paints exactly the slots realizing it. When
    /// every constructible word has been found this is a no-op.
    pub fn random_non_found_word(&mut self) {
        let slots = hints::letter_slots(&self.pool);
        let candidates = hints::candidates(self.catalog, &self.seen_words, &slots);

        let Some(word) = candidates.choose(&mut rand::rng()) else {
            return;
        };
        if let Some(slot_ids) = hints::realize(word.as_str(), &slots) {
            for slot_id in slot_ids {
                self.colors[slot_id] = LetterColor::Hint;
            }
        }
    }

    /// The chosen letters' contents, in selection order
    #[must_use]
    pub fn current_word(&self) -> String {
        self.pool.current_word()
    }

    /// Whether this slot's letter is currently part of the word
    #[must_use]
    pub fn is_chosen(&self, slot_id: usize) -> bool {
        self.pool.is_chosen(slot_id)
    }

    /// Available letters in display order
    #[must_use]
    pub fn available_letters(&self) -> &[Letter] {
        self.pool.available()
    }

    /// Chosen letters in selection order
    #[must_use]
    pub fn chosen_letters(&self) -> &[Letter] {
        self.pool.chosen()
    }

    /// Color state for one slot; unknown slots read as the resting color
    #[must_use]
    pub fn color_of(&self, slot_id: usize) -> LetterColor {
        self.colors.get(slot_id).copied().unwrap_or_default()
    }

    /// Words discovered so far
    #[must_use]
    pub fn seen_words(&self) -> &FxHashSet<String> {
        &self.seen_words
    }

    /// Accumulated score (sum of accepted word lengths)
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Last validation feedback
    #[must_use]
    pub fn alert(&self) -> &Alert {
        &self.alert
    }
}
