//! Check a single word against the searching dictionary

use crate::catalog::WordCatalog;
use crate::engine::MIN_WORD_LEN;
use colored::Colorize;

/// Report whether a word would be accepted as a guess
pub fn run_check(catalog: &WordCatalog, word: &str) {
    let word = word.trim().to_uppercase();

    if word.len() < MIN_WORD_LEN {
        println!(
            "{} {word} is too short: words must be at least {MIN_WORD_LEN} letters.",
            "✗".red()
        );
        return;
    }

    if catalog.contains(&word) {
        println!(
            "{} {word} is in the dictionary ({} points).",
            "✓".green(),
            word.len()
        );
    } else {
        println!("{} {word} is not in the dictionary.", "✗".red());
    }
}
