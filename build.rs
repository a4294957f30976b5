//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate the seed-word list (10-letter words the board is drawn from)
    generate_word_list(
        "data/wordlist_generating.txt",
        &Path::new(&out_dir).join("generating.rs"),
        "GENERATING",
        "Seed-word candidates (10-letter words the board is drawn from)",
    );

    // Generate the searching list (full dictionary for validation and hints)
    generate_word_list(
        "data/wordlist.txt",
        &Path::new(&out_dir).join("searching.rs"),
        "SEARCHING",
        "Guessable dictionary words used for validation and hints",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/wordlist_generating.txt");
    println!("cargo:rerun-if-changed=data/wordlist.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
