//! Dictionary definition lookup seam
//!
//! The engine consumes definitions, it does not fetch them: a
//! [`DefinitionSource`] is injected by the host and may be backed by any
//! transport. Lookups are fire-and-forget; each request runs on its own
//! thread and delivers a `(word, definitions)` pair over a channel that the
//! game drains on its own schedule. Failures of any kind resolve to an empty
//! definition set, never an error.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// A completed lookup: the word as submitted plus its definitions
pub type LookupResult = (String, FxHashSet<String>);

/// Blocking definition fetch, injected by the host
///
/// `word` arrives lowercase-normalized. Implementations must swallow their
/// own failures and return an empty set.
pub trait DefinitionSource: Send + Sync {
    fn fetch(&self, word: &str) -> FxHashSet<String>;
}

/// Source that never finds anything; backs hosts without a transport
pub struct NoDefinitions;

impl DefinitionSource for NoDefinitions {
    fn fetch(&self, _word: &str) -> FxHashSet<String> {
        FxHashSet::default()
    }
}

/// One entry of the dictionary API response
///
/// The API returns an array of entries per word; only the meanings are kept.
#[derive(Debug, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// A part of speech with its definitions
#[derive(Debug, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<DefinitionBody>,
}

/// A single prose definition
#[derive(Debug, Deserialize)]
pub struct DefinitionBody {
    pub definition: String,
}

/// Flatten a dictionary API payload into `"partOfSpeech: definition"` strings
///
/// Any decode failure yields the empty set; a malformed payload reads the
/// same as a word with no definitions.
#[must_use]
pub fn parse_definitions(json: &str) -> FxHashSet<String> {
    let entries: Vec<DictionaryEntry> = match serde_json::from_str(json) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("definition payload did not decode: {err}");
            return FxHashSet::default();
        }
    };

    let mut definitions = FxHashSet::default();
    for entry in entries {
        for meaning in entry.meanings {
            for body in &meaning.definitions {
                definitions.insert(format!("{}: {}", meaning.part_of_speech, body.definition));
            }
        }
    }
    definitions
}

/// Fire-and-forget lookup dispatch with channel delivery
///
/// `request` spawns a thread that fetches and sends; `completed` drains
/// whatever has arrived. `reset` swaps the channel so results from lookups
/// issued before a restart are discarded on delivery.
pub struct LookupService {
    source: Arc<dyn DefinitionSource>,
    tx: Sender<LookupResult>,
    rx: Receiver<LookupResult>,
}

impl LookupService {
    #[must_use]
    pub fn new(source: Arc<dyn DefinitionSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    /// Start a lookup for `word` (stored as given, fetched lowercase)
    pub fn request(&self, word: &str) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let word = word.to_string();

        thread::spawn(move || {
            let definitions = source.fetch(&word.to_lowercase());
            if tx.send((word, definitions)).is_err() {
                log::debug!("discarding definition lookup that completed after restart");
            }
        });
    }

    /// Drain all lookups completed so far
    #[must_use]
    pub fn completed(&self) -> Vec<LookupResult> {
        self.rx.try_iter().collect()
    }

    /// Drop the delivery channel; in-flight lookups resolve into the void
    pub fn reset(&mut self) {
        let (tx, rx) = mpsc::channel();
        self.tx = tx;
        self.rx = rx;
    }
}
