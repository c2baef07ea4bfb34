//! Word segmentation and the fixed vocabularies used by every metric.
//!
//! A token is a maximal run of word characters taken from the lowercased
//! text. Word characters are Unicode letters (`L*`), numbers (`N*`) and the
//! underscore; combining marks and other connector punctuation are not word
//! characters. Signs are the characters of the original text that are neither
//! word characters nor whitespace.
//!
//! Whitespace is Unicode `White_Space` plus the information separators
//! U+001C..=U+001F, which plain-text tooling treats as line and field breaks.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Closed preposition vocabulary. "under" is listed twice in the word list
/// the tool has always shipped with; the set collapses it to 17 entries.
const PREPOSITION_WORDS: &[&str] = &[
    "to", "before", "under", "with", "against", "from", "since", "in", "between", "towards",
    "until", "for", "by", "according", "without", "under", "on", "after",
];

/// Vowels counted by `average_vowels`. Tokens are lowercase, so only
/// lowercase forms are needed.
pub const VOWELS: [char; 10] = ['a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú'];

pub static PREPOSITIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PREPOSITION_WORDS.iter().copied().collect());

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("Invalid word regex"));

static SIGN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s\x1C-\x1F]").expect("Invalid sign regex"));

/// Split `text` into lowercase tokens in document order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count punctuation and symbol characters in `text` as given (no case folding).
pub fn count_signs(text: &str) -> usize {
    SIGN_PATTERN.find_iter(text).count()
}

pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Remove leading and trailing whitespace as defined by [`is_space`].
pub fn strip(text: &str) -> &str {
    text.trim_matches(is_space)
}

pub fn is_preposition(token: &str) -> bool {
    PREPOSITIONS.contains(token)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Number of vowel characters in a single token.
pub fn count_vowels(token: &str) -> usize {
    token.chars().filter(|&c| is_vowel(c)).count()
}
