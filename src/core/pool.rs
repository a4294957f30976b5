//! Letter pool: the board's available/chosen partition
//!
//! The pool owns all ten letters and moves them between the available
//! sequence (display order) and the chosen sequence (selection order = word
//! order). Every mutation preserves the invariant that each slot id lives in
//! exactly one of the two sequences.

use super::{BOARD_SIZE, Letter};
use rand::seq::SliceRandom;

/// The ten-letter board state
#[derive(Debug, Clone)]
pub struct LetterPool {
    available: Vec<Letter>,
    chosen: Vec<Letter>,
}

impl LetterPool {
    /// Create a board from a seed word
    ///
    /// The seed's characters are shuffled across the display positions and
    /// slot ids are drawn at random, so the hidden word is not readable off
    /// the board. Position keys follow creation order (0..9).
    ///
    /// # Panics
    /// Panics in debug mode if the seed word is not `BOARD_SIZE` ASCII
    /// uppercase letters; the catalog only hands out validated seeds.
    #[must_use]
    pub fn new(seed_word: &str) -> Self {
        debug_assert_eq!(seed_word.len(), BOARD_SIZE, "seed word must fill the board");
        debug_assert!(seed_word.bytes().all(|b| b.is_ascii_uppercase()));

        let mut rng = rand::rng();

        let mut contents: Vec<u8> = seed_word.bytes().collect();
        contents.shuffle(&mut rng);

        let mut slot_ids: Vec<usize> = (0..BOARD_SIZE).collect();
        slot_ids.shuffle(&mut rng);

        let available = contents
            .into_iter()
            .zip(slot_ids)
            .enumerate()
            .map(|(position_key, (content, slot_id))| Letter::new(content, slot_id, position_key))
            .collect();

        Self {
            available,
            chosen: Vec::new(),
        }
    }

    /// Build a pool with an explicit available sequence (deterministic setups)
    pub(crate) fn from_letters(available: Vec<Letter>) -> Self {
        Self {
            available,
            chosen: Vec::new(),
        }
    }

    /// Toggle a letter between the available pool and the chosen word
    ///
    /// An available letter is appended to the chosen word. A chosen letter
    /// returns to the available sequence just before the first available
    /// letter with a greater position key, so it lands back where it visually
    /// belongs. Unknown slot ids are ignored.
    pub fn choose(&mut self, slot_id: usize) {
        if let Some(index) = self.available.iter().position(|l| l.slot_id() == slot_id) {
            let letter = self.available.remove(index);
            self.chosen.push(letter);
        } else if let Some(index) = self.chosen.iter().position(|l| l.slot_id() == slot_id) {
            let letter = self.chosen.remove(index);
            let insert_at = self
                .available
                .iter()
                .position(|l| l.position_key() > letter.position_key())
                .unwrap_or(self.available.len());
            self.available.insert(insert_at, letter);
        }
    }

    /// Randomly permute the available letters' display order
    ///
    /// Retries until the order differs from the previous one; slot ids are
    /// unique, so a differing order always exists for two or more letters.
    /// The previous per-position sequence of position keys is re-attached so
    /// reinsertion ordering survives the shuffle. No-op below two letters.
    pub fn shuffle(&mut self) {
        if self.available.len() < 2 {
            return;
        }

        let previous = self.available.clone();
        let mut rng = rand::rng();
        loop {
            self.available.shuffle(&mut rng);
            if self.available != previous {
                break;
            }
        }

        for (letter, prev) in self.available.iter_mut().zip(&previous) {
            letter.set_position_key(prev.position_key());
        }
    }

    /// The chosen letters' contents, in selection order
    #[must_use]
    pub fn current_word(&self) -> String {
        self.chosen.iter().map(|l| l.content_char()).collect()
    }

    /// Whether the letter with this slot id is currently chosen
    #[must_use]
    pub fn is_chosen(&self, slot_id: usize) -> bool {
        self.chosen.iter().any(|l| l.slot_id() == slot_id)
    }

    /// Available letters in display order
    #[must_use]
    pub fn available(&self) -> &[Letter] {
        &self.available
    }

    /// Chosen letters in selection order
    #[must_use]
    pub fn chosen(&self) -> &[Letter] {
        &self.chosen
    }

    /// All ten letters, available then chosen
    pub fn letters(&self) -> impl Iterator<Item = &Letter> {
        self.available.iter().chain(self.chosen.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_from(word: &str) -> LetterPool {
        let available = word
            .bytes()
            .enumerate()
            .map(|(i, b)| Letter::new(b, i, i))
            .collect();
        LetterPool::from_letters(available)
    }

    fn slot_ids(letters: &[Letter]) -> Vec<usize> {
        letters.iter().map(|l| l.slot_id()).collect()
    }

    #[test]
    fn new_board_has_all_slots_available() {
        let pool = LetterPool::new("BLACKBERRY");
        assert_eq!(pool.available().len(), BOARD_SIZE);
        assert!(pool.chosen().is_empty());

        let mut slots: Vec<usize> = pool.available().iter().map(|l| l.slot_id()).collect();
        slots.sort_unstable();
        assert_eq!(slots, (0..BOARD_SIZE).collect::<Vec<_>>());

        let mut contents: Vec<u8> = pool.available().iter().map(|l| l.content()).collect();
        contents.sort_unstable();
        let mut expected: Vec<u8> = b"BLACKBERRY".to_vec();
        expected.sort_unstable();
        assert_eq!(contents, expected);
    }

    #[test]
    fn choose_moves_letter_to_chosen() {
        let mut pool = pool_from("CATSBDFGJK");
        pool.choose(0);
        assert_eq!(pool.current_word(), "C");
        assert!(pool.is_chosen(0));
        assert_eq!(pool.available().len(), 9);
    }

    #[test]
    fn choose_builds_word_in_selection_order() {
        let mut pool = pool_from("CATSBDFGJK");
        pool.choose(2); // T
        pool.choose(1); // A
        pool.choose(0); // C
        assert_eq!(pool.current_word(), "TAC");
    }

    #[test]
    fn choose_is_its_own_inverse() {
        let mut pool = pool_from("CATSBDFGJK");
        let before = slot_ids(pool.available());

        pool.choose(3);
        pool.choose(3);

        assert_eq!(slot_ids(pool.available()), before);
        assert!(pool.chosen().is_empty());
    }

    #[test]
    fn returned_letter_reinserts_by_position_key() {
        let mut pool = pool_from("CATSBDFGJK");
        // Take C, A, T off the board, then put A back: it must land in front
        // of T (position key 2), not at the end.
        pool.choose(0);
        pool.choose(1);
        pool.choose(2);
        pool.choose(1);

        assert_eq!(pool.available()[0].slot_id(), 1);
        assert_eq!(pool.current_word(), "CT");
    }

    #[test]
    fn returned_letter_with_greatest_key_goes_last() {
        let mut pool = pool_from("CATSBDFGJK");
        pool.choose(9);
        pool.choose(9);
        assert_eq!(pool.available().last().map(|l| l.slot_id()), Some(9));
    }

    #[test]
    fn unknown_slot_id_is_ignored() {
        let mut pool = pool_from("CATSBDFGJK");
        let before = slot_ids(pool.available());
        pool.choose(42);
        assert_eq!(slot_ids(pool.available()), before);
        assert!(pool.chosen().is_empty());
    }

    #[test]
    fn partition_invariant_holds_over_choose_sequences() {
        let mut pool = pool_from("CATSBDFGJK");
        for slot_id in [0, 3, 3, 7, 9, 0, 5, 7, 1] {
            pool.choose(slot_id);

            let mut slots: Vec<usize> = pool.letters().map(|l| l.slot_id()).collect();
            slots.sort_unstable();
            assert_eq!(slots, (0..BOARD_SIZE).collect::<Vec<_>>());
        }
    }

    #[test]
    fn shuffle_changes_order_and_preserves_pairs() {
        let mut pool = pool_from("CATSBDFGJK");
        let before: Vec<(usize, u8)> = pool
            .available()
            .iter()
            .map(|l| (l.slot_id(), l.content()))
            .collect();

        pool.shuffle();

        let after: Vec<(usize, u8)> = pool
            .available()
            .iter()
            .map(|l| (l.slot_id(), l.content()))
            .collect();
        assert_ne!(after, before);

        let mut sorted_before = before;
        let mut sorted_after = after;
        sorted_before.sort_unstable();
        sorted_after.sort_unstable();
        assert_eq!(sorted_after, sorted_before);
    }

    #[test]
    fn shuffle_reattaches_position_keys_in_place() {
        let mut pool = pool_from("CATSBDFGJK");
        let keys_before: Vec<usize> = pool.available().iter().map(|l| l.position_key()).collect();

        pool.shuffle();

        let keys_after: Vec<usize> = pool.available().iter().map(|l| l.position_key()).collect();
        assert_eq!(keys_after, keys_before);
    }

    #[test]
    fn shuffle_skips_tiny_pools() {
        let mut pool = LetterPool::from_letters(vec![Letter::new(b'A', 0, 0)]);
        pool.shuffle();
        assert_eq!(pool.available().len(), 1);

        let mut empty = LetterPool::from_letters(Vec::new());
        empty.shuffle();
        assert!(empty.available().is_empty());
    }

    #[test]
    fn shuffle_only_touches_available_letters() {
        let mut pool = pool_from("CATSBDFGJK");
        pool.choose(0);
        pool.choose(1);
        pool.shuffle();
        assert_eq!(pool.current_word(), "CA");
    }
}
