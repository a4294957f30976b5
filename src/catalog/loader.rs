//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! All loading paths normalize to uppercase and drop blank lines; validation
//! of seed-word length happens in the catalog constructor.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Returns uppercase words with blank lines filtered out.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use scramble::catalog::loader::load_from_file;
///
/// let words = load_from_file("data/wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize(content.lines()))
}

/// Convert an embedded string slice to an uppercase word vector
///
/// # Examples
/// ```
/// use scramble::catalog::loader::words_from_slice;
/// use scramble::catalog::SEARCHING;
///
/// let words = words_from_slice(SEARCHING);
/// assert_eq!(words.len(), SEARCHING.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    normalize(slice.iter().copied())
}

fn normalize<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_uppercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_uppercases() {
        let words = words_from_slice(&["cat", "Act", "CATS"]);
        assert_eq!(words, vec!["CAT", "ACT", "CATS"]);
    }

    #[test]
    fn words_from_slice_filters_blanks() {
        let words = words_from_slice(&["cat", "", "  ", "act"]);
        assert_eq!(words, vec!["CAT", "ACT"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn embedded_searching_list_converts() {
        use crate::catalog::SEARCHING;

        let words = words_from_slice(SEARCHING);
        assert_eq!(words.len(), SEARCHING.len());
    }
}
