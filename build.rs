//! Build script to generate embedded word lists
//!
//! Reads `WORD|description` list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate daily list
    generate_word_list(
        "data/daily.txt",
        &Path::new(&out_dir).join("daily.rs"),
        "DAILY",
        "Daily puzzle words with their descriptions",
    );

    // Generate unlimited list
    generate_word_list(
        "data/unlimited.txt",
        &Path::new(&out_dir).join("unlimited.rs"),
        "UNLIMITED",
        "Unlimited mode words with their descriptions",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/daily.txt");
    println!("cargo:rerun-if-changed=data/unlimited.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (word, description) = line.split_once('|').unwrap_or((line, ""));
            (word.trim(), description.trim())
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (word, description) in entries {
        writeln!(output, "    ({word:?}, {description:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
