//! Hint search: finding an undiscovered word buried in the board
//!
//! A word is constructible when the board's letter multiset covers it. The
//! search maps each content byte to the sorted slot ids holding it, then
//! realizes candidate words by consuming the smallest remaining slot id per
//! character. Taking the smallest id first keeps repeated hints for the same
//! word on the same slots, so a doubled letter never flickers between
//! equivalent positions.

use crate::catalog::WordCatalog;
use crate::core::LetterPool;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Words shorter than this are never hinted (or accepted)
pub const MIN_WORD_LEN: usize = 3;

/// Map each content byte to the sorted slot ids holding it
///
/// Merges available and chosen letters: the whole board is eligible for a
/// hint, not just what is currently un-chosen.
pub(crate) fn letter_slots(pool: &LetterPool) -> FxHashMap<u8, Vec<usize>> {
    let mut slots: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
    for letter in pool.letters() {
        slots.entry(letter.content()).or_default().push(letter.slot_id());
    }
    for ids in slots.values_mut() {
        ids.sort_unstable();
    }
    slots
}

/// Realize a word against the slot map, smallest slot id first
///
/// Returns the slot ids spelling the word in word order, or `None` when the
/// board's letters cannot cover it.
pub(crate) fn realize(word: &str, slots: &FxHashMap<u8, Vec<usize>>) -> Option<Vec<usize>> {
    let mut consumed: FxHashMap<u8, usize> = FxHashMap::default();
    let mut result = Vec::with_capacity(word.len());

    for byte in word.bytes() {
        let ids = slots.get(&byte)?;
        let taken = consumed.entry(byte).or_insert(0);
        // ids are sorted ascending, so this is the smallest unconsumed slot
        let id = *ids.get(*taken)?;
        *taken += 1;
        result.push(id);
    }

    Some(result)
}

/// All undiscovered searching-set words the board can spell
pub(crate) fn candidates<'a>(
    catalog: &'a WordCatalog,
    seen_words: &FxHashSet<String>,
    slots: &FxHashMap<u8, Vec<usize>>,
) -> Vec<&'a String> {
    catalog
        .searching_words()
        .par_iter()
        .filter(|word| {
            word.len() >= MIN_WORD_LEN
                && !seen_words.contains(*word)
                && realize(word.as_str(), slots).is_some()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn pool_from(word: &str) -> LetterPool {
        let available = word
            .bytes()
            .enumerate()
            .map(|(i, b)| Letter::new(b, i, i))
            .collect();
        LetterPool::from_letters(available)
    }

    fn catalog(searching: &[&str]) -> WordCatalog {
        WordCatalog::new(
            vec!["BLACKBERRY".to_string()],
            searching.iter().map(|w| (*w).to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn letter_slots_are_sorted_and_merged() {
        let mut pool = pool_from("WORWDAAAAA");
        pool.choose(3); // move the second W into the chosen word

        let slots = letter_slots(&pool);
        assert_eq!(slots[&b'W'], vec![0, 3]);
        assert_eq!(slots[&b'A'], vec![5, 6, 7, 8, 9]);
        assert_eq!(slots[&b'O'], vec![1]);
    }

    #[test]
    fn realize_spells_the_word_in_order() {
        let pool = pool_from("CATSBDFGJK");
        let slots = letter_slots(&pool);
        assert_eq!(realize("TAC", &slots), Some(vec![2, 1, 0]));
    }

    #[test]
    fn realize_takes_smallest_slot_for_repeats() {
        // Two Ws at slots 0 and 3; a word using one W must take slot 0
        let pool = pool_from("WORWDAAAAA");
        let slots = letter_slots(&pool);

        assert_eq!(realize("WORD", &slots), Some(vec![0, 1, 2, 4]));
        // Both Ws: smallest first, then the next smallest
        assert_eq!(realize("WOW", &slots), Some(vec![0, 1, 3]));
    }

    #[test]
    fn realize_is_deterministic_across_calls() {
        let pool = pool_from("WORWDAAAAA");
        let slots = letter_slots(&pool);
        let first = realize("WORD", &slots);
        for _ in 0..10 {
            assert_eq!(realize("WORD", &slots), first);
        }
    }

    #[test]
    fn realize_rejects_missing_letters() {
        let pool = pool_from("AAAAAAAAAA");
        let slots = letter_slots(&pool);
        assert_eq!(realize("CAB", &slots), None);
    }

    #[test]
    fn realize_rejects_overdrawn_letters() {
        let pool = pool_from("CATSBDFGJK");
        let slots = letter_slots(&pool);
        // Only one A on the board
        assert_eq!(realize("AA", &slots), None);
    }

    #[test]
    fn candidates_respect_length_and_seen_words() {
        let catalog = catalog(&["cat", "cats", "act", "at", "dog"]);
        let pool = pool_from("CATSBDFGJK");
        let slots = letter_slots(&pool);

        let mut seen = FxHashSet::default();
        seen.insert("CAT".to_string());

        let mut found: Vec<&str> = candidates(&catalog, &seen, &slots)
            .into_iter()
            .map(String::as_str)
            .collect();
        found.sort_unstable();

        // CAT is seen, AT is too short, DOG is not on the board
        assert_eq!(found, vec!["ACT", "CATS"]);
    }

    #[test]
    fn all_same_letter_board_yields_no_candidates() {
        let catalog = catalog(&["cab"]);
        let pool = pool_from("AAAAAAAAAA");
        let slots = letter_slots(&pool);
        assert!(candidates(&catalog, &FxHashSet::default(), &slots).is_empty());
    }
}
