//! Intent surface wrapping a session
//!
//! The manager is what a frontend talks to: it forwards player intents to
//! the session, owns the definitions discovered this session, and drives the
//! asynchronous lookup plumbing. Restart replaces the session wholesale and
//! swaps the lookup channel so stale results never land in the new game.

use super::session::{Alert, GameSession};
use crate::catalog::WordCatalog;
use crate::core::{Letter, LetterColor};
use crate::definitions::{DefinitionSource, LookupService, NoDefinitions};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// Factor applied to the raw score for display
const SCORE_DISPLAY_FACTOR: usize = 10;

/// A game session plus its definitions and lookup plumbing
pub struct GameManager<'a> {
    catalog: &'a WordCatalog,
    session: GameSession<'a>,
    definitions: FxHashMap<String, FxHashSet<String>>,
    lookups: LookupService,
}

impl<'a> GameManager<'a> {
    /// Start a game with no definition transport
    #[must_use]
    pub fn new(catalog: &'a WordCatalog) -> Self {
        Self::with_source(catalog, Arc::new(NoDefinitions))
    }

    /// Start a game with an injected definition source
    #[must_use]
    pub fn with_source(catalog: &'a WordCatalog, source: Arc<dyn DefinitionSource>) -> Self {
        Self {
            catalog,
            session: GameSession::new(catalog),
            definitions: FxHashMap::default(),
            lookups: LookupService::new(source),
        }
    }

    /// Toggle a letter between the board and the current word
    pub fn choose(&mut self, slot_id: usize) {
        self.session.choose(slot_id);
    }

    /// Validate the current word; accepted words trigger a definition lookup
    pub fn submit(&mut self) -> bool {
        let accepted = self.session.submit();
        if accepted {
            self.lookups.request(&self.session.current_word());
        }
        accepted
    }

    /// Reshuffle the available letters' display order
    pub fn shuffle(&mut self) {
        self.session.shuffle();
    }

    /// Reset slot colors, optionally keeping hint highlights
    pub fn set_color_to_default(&mut self, preserve_hinted: bool) {
        self.session.set_color_to_default(preserve_hinted);
    }

    /// Highlight one undiscovered word the board can still spell
    pub fn request_hint(&mut self) {
        self.session.random_non_found_word();
    }

    /// Throw the board away and start over
    ///
    /// Fresh seed word, zero score, no discovered words, no definitions.
    /// Lookups still in flight resolve into the old channel and are dropped.
    pub fn restart(&mut self) {
        self.session = GameSession::new(self.catalog);
        self.definitions.clear();
        self.lookups.reset();
    }

    /// Apply completed definition lookups; returns how many were delivered
    pub fn poll_definitions(&mut self) -> usize {
        let completed = self.lookups.completed();
        let count = completed.len();
        for (word, definitions) in completed {
            self.definitions.insert(word, definitions);
        }
        count
    }

    /// Available letters in display order
    #[must_use]
    pub fn available_letters(&self) -> &[Letter] {
        self.session.available_letters()
    }

    /// Chosen letters in selection order
    #[must_use]
    pub fn chosen_letters(&self) -> &[Letter] {
        self.session.chosen_letters()
    }

    /// The word currently assembled from chosen letters
    #[must_use]
    pub fn current_word(&self) -> String {
        self.session.current_word()
    }

    /// Whether this slot's letter is currently part of the word
    #[must_use]
    pub fn is_chosen(&self, slot_id: usize) -> bool {
        self.session.is_chosen(slot_id)
    }

    /// Color state for one slot
    #[must_use]
    pub fn color_of(&self, slot_id: usize) -> LetterColor {
        self.session.color_of(slot_id)
    }

    /// Raw score: the sum of accepted word lengths
    #[must_use]
    pub fn score(&self) -> usize {
        self.session.score()
    }

    /// Score as shown to the player
    #[must_use]
    pub fn display_score(&self) -> usize {
        self.session.score() * SCORE_DISPLAY_FACTOR
    }

    /// Discovered words, sorted for stable display
    #[must_use]
    pub fn seen_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.session.seen_words().iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Last validation feedback
    #[must_use]
    pub fn alert(&self) -> &Alert {
        self.session.alert()
    }

    /// Definitions delivered for a discovered word, if any
    #[must_use]
    pub fn definitions_of(&self, word: &str) -> Option<&FxHashSet<String>> {
        self.definitions.get(word)
    }

    /// All definitions delivered this session, keyed by word
    #[must_use]
    pub fn definitions(&self) -> &FxHashMap<String, FxHashSet<String>> {
        &self.definitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BOARD_SIZE;
    use std::thread;
    use std::time::Duration;

    struct FixedSource;

    impl DefinitionSource for FixedSource {
        fn fetch(&self, word: &str) -> FxHashSet<String> {
            let mut set = FxHashSet::default();
            set.insert(format!("noun: a {word}"));
            set
        }
    }

    fn catalog() -> WordCatalog {
        WordCatalog::new(
            vec!["CATSBDFGJK".to_string()],
            vec!["CAT".to_string(), "CATS".to_string(), "ACT".to_string()],
        )
        .unwrap()
    }

    fn select(game: &mut GameManager, word: &str) {
        for byte in word.bytes() {
            let slot = game
                .available_letters()
                .iter()
                .filter(|l| l.content() == byte)
                .map(|l| l.slot_id())
                .min()
                .expect("letter should be available");
            game.choose(slot);
        }
    }

    #[test]
    fn accepted_submit_triggers_a_lookup() {
        let catalog = catalog();
        let mut game = GameManager::with_source(&catalog, Arc::new(FixedSource));

        select(&mut game, "CAT");
        assert!(game.submit());

        // The lookup runs on its own thread; poll until it lands
        let mut delivered = 0;
        for _ in 0..50 {
            delivered += game.poll_definitions();
            if delivered > 0 {
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }
        assert_eq!(delivered, 1);

        // Keyed by the word as submitted; fetched lowercase
        let definitions = game.definitions_of("CAT").expect("definitions delivered");
        assert!(definitions.contains("noun: a cat"));
    }

    #[test]
    fn rejected_submit_triggers_no_lookup() {
        let catalog = catalog();
        let mut game = GameManager::with_source(&catalog, Arc::new(FixedSource));

        select(&mut game, "TSB");
        assert!(!game.submit());

        thread::sleep(Duration::from_millis(50));
        assert_eq!(game.poll_definitions(), 0);
        assert!(game.definitions_of("TSB").is_none());
    }

    #[test]
    fn display_score_is_scaled() {
        let catalog = catalog();
        let mut game = GameManager::new(&catalog);

        select(&mut game, "CAT");
        assert!(game.submit());
        assert_eq!(game.score(), 3);
        assert_eq!(game.display_score(), 30);
    }

    #[test]
    fn seen_words_are_sorted() {
        let catalog = catalog();
        let mut game = GameManager::new(&catalog);

        select(&mut game, "CAT");
        assert!(game.submit());
        let chosen: Vec<usize> = game.chosen_letters().iter().map(|l| l.slot_id()).collect();
        for slot in chosen {
            game.choose(slot);
        }
        select(&mut game, "ACT");
        assert!(game.submit());

        assert_eq!(game.seen_words(), vec!["ACT", "CAT"]);
    }

    #[test]
    fn restart_resets_everything() {
        let catalog = catalog();
        let mut game = GameManager::with_source(&catalog, Arc::new(FixedSource));

        select(&mut game, "CAT");
        assert!(game.submit());
        game.request_hint();

        game.restart();

        assert_eq!(game.score(), 0);
        assert!(game.seen_words().is_empty());
        assert!(game.definitions_of("CAT").is_none());
        assert_eq!(game.available_letters().len(), BOARD_SIZE);
        assert!(game.chosen_letters().is_empty());
        for slot_id in 0..BOARD_SIZE {
            assert_eq!(game.color_of(slot_id), LetterColor::Default);
        }
    }
}
