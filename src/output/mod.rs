//! Terminal output formatting for the play harness

use crate::core::LetterColor;
use crate::engine::GameManager;
use colored::{ColoredString, Colorize};

/// Map a slot color to its terminal rendering
fn paint(text: &str, color: LetterColor) -> ColoredString {
    match color {
        LetterColor::Default => text.magenta(),
        LetterColor::Correct => text.green(),
        LetterColor::Duplicate => text.cyan(),
        LetterColor::Invalid => text.red(),
        LetterColor::Hint => text.yellow(),
    }
}

/// Print the board: available letters with their slot ids, then the word
pub fn print_board(game: &GameManager) {
    print!("Board: ");
    for letter in game.available_letters() {
        let cell = format!("{}:{}", letter.slot_id(), letter.content_char());
        print!(" {}", paint(&cell, game.color_of(letter.slot_id())));
    }
    println!();

    print!("Word:  ");
    for letter in game.chosen_letters() {
        let cell = letter.content_char().to_string();
        print!(" {}", paint(&cell, game.color_of(letter.slot_id())).bold());
    }
    println!("    (score: {})", game.display_score());
}

/// Print the last validation feedback, colored to match the board
pub fn print_alert(game: &GameManager) {
    let alert = game.alert();
    if alert.text.is_empty() {
        return;
    }
    match alert.color {
        Some(color) => println!("{}", paint(&alert.text, color)),
        None => println!("{}", alert.text),
    }
}

/// Print every discovered word, sorted
pub fn print_seen_words(game: &GameManager) {
    let words = game.seen_words();
    if words.is_empty() {
        println!("No words found yet.");
        return;
    }
    println!("Found {}:", words.len());
    for word in words {
        println!("  • {word}");
    }
}

/// Print the definitions delivered for one word
pub fn print_definitions(game: &GameManager, word: &str) {
    let word = word.to_uppercase();
    match game.definitions_of(&word) {
        Some(definitions) if !definitions.is_empty() => {
            println!("{}:", word.bold());
            let mut sorted: Vec<&String> = definitions.iter().collect();
            sorted.sort_unstable();
            for definition in sorted {
                println!("  • {definition}");
            }
        }
        Some(_) => println!("No definitions found for {word}."),
        None => println!("No definitions delivered for {word} (yet)."),
    }
}
