//! Interactive CLI play mode
//!
//! A plain stdin loop over the engine's intent surface. Letters are chosen
//! either by slot id or by typing a word, which greedily selects matching
//! available letters.

use crate::catalog::WordCatalog;
use crate::engine::GameManager;
use crate::output::{print_alert, print_board, print_definitions, print_seen_words};
use anyhow::Result;
use std::io::{self, Write};

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(catalog: &WordCatalog) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Scramble - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Ten letters hide a ten-letter word. Build words from them:\n");
    println!("  - Type slot numbers (e.g. '3 0 7') to toggle letters");
    println!("  - Or type a word to select its letters off the board");
    println!("  - 'submit' to check the word, 'shuffle' to rearrange");
    println!("  - 'hint' to reveal a word you haven't found yet");
    println!("  - 'words' for found words, 'defs <word>' for definitions");
    println!("  - 'new' for a fresh board, 'quit' to exit\n");

    let mut game = GameManager::new(catalog);

    loop {
        game.poll_definitions();
        print_board(&game);
        print_alert(&game);

        let input = get_user_input("> ")?;
        let input = input.trim().to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                game.restart();
                println!("\n🔄 New board!\n");
            }
            "submit" | "s" => {
                if game.submit() {
                    println!("✅ {} points", game.current_word().len());
                }
            }
            "shuffle" | "f" => game.shuffle(),
            "hint" | "h" => {
                game.set_color_to_default(false);
                game.request_hint();
            }
            "clear" | "c" => game.set_color_to_default(true),
            "words" | "w" => print_seen_words(&game),
            "" => {}
            _ => {
                if let Some(word) = input.strip_prefix("defs ") {
                    print_definitions(&game, word.trim());
                } else if input.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()) {
                    toggle_slots(&mut game, &input);
                } else if input.chars().all(|c| c.is_ascii_alphabetic()) {
                    select_word(&mut game, &input.to_uppercase());
                } else {
                    println!("Unrecognized input. Slot numbers, a word, or a command.");
                }
            }
        }
    }

    println!("\nFinal score: {}", game.display_score());
    print_seen_words(&game);
    Ok(())
}

fn toggle_slots(game: &mut GameManager, input: &str) {
    for token in input.split_whitespace() {
        match token.parse::<usize>() {
            Ok(slot_id) => game.choose(slot_id),
            Err(_) => println!("'{token}' is not a slot number."),
        }
    }
}

/// Return any chosen letters, then greedily select the word's letters
fn select_word(game: &mut GameManager, word: &str) {
    let chosen: Vec<usize> = game.chosen_letters().iter().map(|l| l.slot_id()).collect();
    for slot_id in chosen {
        game.choose(slot_id);
    }

    for byte in word.bytes() {
        let slot = game
            .available_letters()
            .iter()
            .filter(|l| l.content() == byte)
            .map(|l| l.slot_id())
            .min();
        match slot {
            Some(slot_id) => game.choose(slot_id),
            None => {
                println!("The board has no spare '{}'.", byte as char);
                return;
            }
        }
    }
}

fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}
