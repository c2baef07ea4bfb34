//! Per-line lexical statistics.
//!
//! Each line is measured in isolation: there is no state carried between
//! lines, so a line yields the same record whether it is measured alone or
//! as part of a document.
//!
//! The caller is responsible for stripping surrounding whitespace before
//! calling [`calculate_line_metrics`]. `total_length` and
//! `length_without_spaces` count whatever they are given.

use super::tokenizer::{count_signs, count_vowels, is_preposition, strip, tokenize};
use serde::{Deserialize, Serialize};

/// Statistics for a single line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineMetrics {
    pub number_of_terms: usize,
    pub number_of_signs: usize,
    pub number_of_prepositions: usize,
    /// Vowels per token; exactly 0.0 when the line has no tokens.
    pub average_vowels: f64,
    pub max_length: usize,
    pub min_length: usize,
    pub total_length: usize,
    pub length_without_spaces: usize,
}

impl LineMetrics {
    /// Column names in table order.
    pub const FIELDS: [&'static str; 8] = [
        "number_of_terms",
        "number_of_signs",
        "number_of_prepositions",
        "average_vowels",
        "max_length",
        "min_length",
        "total_length",
        "length_without_spaces",
    ];

    pub fn has_terms(&self) -> bool {
        self.number_of_terms > 0
    }
}

/// Compute the eight statistics of one (already stripped) line.
pub fn calculate_line_metrics(line: &str) -> LineMetrics {
    let words = tokenize(line);
    let lengths: Vec<usize> = words.iter().map(|w| w.chars().count()).collect();

    let number_of_prepositions = words.iter().filter(|w| is_preposition(w)).count();
    let total_vowels: usize = words.iter().map(|w| count_vowels(w)).sum();

    LineMetrics {
        number_of_terms: words.len(),
        number_of_signs: count_signs(line),
        number_of_prepositions,
        average_vowels: average_vowels(total_vowels, words.len()),
        max_length: lengths.iter().copied().max().unwrap_or(0),
        min_length: lengths.iter().copied().min().unwrap_or(0),
        total_length: line.chars().count(),
        length_without_spaces: line.chars().filter(|&c| c != ' ').count(),
    }
}

/// Measure every line of a document after stripping surrounding whitespace.
pub fn calculate_document_metrics<S: AsRef<str>>(lines: &[S]) -> Vec<LineMetrics> {
    lines
        .iter()
        .map(|line| calculate_line_metrics(strip(line.as_ref())))
        .collect()
}

fn average_vowels(total_vowels: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    total_vowels as f64 / word_count as f64
}
