//! Scramble
//!
//! Game-state and word-matching engine for a single-player letter-rearrangement
//! word game: ten letters drawn from a hidden seed word, dictionary validation,
//! duplicate-guess detection, scoring, and deterministic hints.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scramble::catalog::WordCatalog;
//! use scramble::engine::GameManager;
//!
//! let catalog = WordCatalog::embedded().unwrap();
//! let mut game = GameManager::new(&catalog);
//!
//! // Toggle a letter onto the word, then submit it
//! let slot = game.available_letters()[0].slot_id();
//! game.choose(slot);
//! let accepted = game.submit();
//! println!("accepted: {accepted}, score: {}", game.score());
//! ```

// Core board types
pub mod core;

// Word lists
pub mod catalog;

// Game session, hints, and the intent surface
pub mod engine;

// Dictionary definition lookup seam
pub mod definitions;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
