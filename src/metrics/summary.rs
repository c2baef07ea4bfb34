//! Corpus-wide aggregation.
//!
//! Combines the per-line records with a second pass over the raw lines to
//! build global word and preposition frequencies and line-length dispersion.

use super::frequency::FrequencyTable;
use super::line::LineMetrics;
use super::tokenizer::{is_preposition, strip, tokenize};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize, Serializer};

/// Document-level statistics.
///
/// Aggregates that come out integral are serialized as integers (`2`, not
/// `2.0`), matching the output format the reports have always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub total_number_of_lines: usize,
    #[serde(serialize_with = "serialize_compact")]
    pub average_terms: f64,
    #[serde(serialize_with = "serialize_compact")]
    pub average_prepositions: f64,
    #[serde(serialize_with = "serialize_compact")]
    pub average_signs: f64,
    #[serde(serialize_with = "serialize_compact")]
    pub average_characters: f64,
    #[serde(serialize_with = "serialize_compact")]
    pub character_variance: f64,
    /// `None` only when no line contains a single token.
    pub most_frequent_word: Option<String>,
    /// `None` when the corpus contains no preposition.
    pub most_frequent_preposition: Option<String>,
}

/// Global token counts gathered from the raw lines.
#[derive(Debug, Clone, Default)]
pub struct CorpusFrequencies {
    pub words: FrequencyTable,
    pub prepositions: FrequencyTable,
}

impl CorpusFrequencies {
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut frequencies = Self::default();
        for line in lines {
            let words = tokenize(line.as_ref());
            frequencies.words.extend(words.iter().map(String::as_str));
            frequencies.prepositions.extend(
                words
                    .iter()
                    .map(String::as_str)
                    .filter(|w| is_preposition(w)),
            );
        }
        frequencies
    }
}

/// Summarize a document from its raw lines and their per-line metrics.
///
/// `metrics[i]` must describe `lines[i]` stripped of surrounding whitespace.
/// Both slices must be non-empty and of equal length; anything else is a
/// caller bug and is reported as [`Error::InvalidInput`].
pub fn calculate_summary<S: AsRef<str>>(
    lines: &[S],
    metrics: &[LineMetrics],
) -> Result<CorpusSummary> {
    validate_inputs(lines.len(), metrics.len())?;

    let frequencies = CorpusFrequencies::from_lines(lines);
    let lengths: Vec<usize> = lines
        .iter()
        .map(|line| strip(line.as_ref()).chars().count())
        .collect();

    log::debug!(
        "Summarizing {} lines ({} distinct words, {} distinct prepositions)",
        lines.len(),
        frequencies.words.len(),
        frequencies.prepositions.len()
    );

    Ok(CorpusSummary {
        total_number_of_lines: lines.len(),
        average_terms: mean_of(metrics, |m| m.number_of_terms)?,
        average_prepositions: mean_of(metrics, |m| m.number_of_prepositions)?,
        average_signs: mean_of(metrics, |m| m.number_of_signs)?,
        average_characters: mean_of(&lengths, |&len| len)?,
        character_variance: sample_variance(&lengths),
        most_frequent_word: most_common_key(&frequencies.words),
        most_frequent_preposition: most_common_key(&frequencies.prepositions),
    })
}

/// Arithmetic mean; undefined (and an error) for an empty slice.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::InvalidInput(
            "mean requires at least one value".to_string(),
        ));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (n - 1 denominator) of counts; 0 for fewer than two values.
///
/// Computed as `(n * sum(x^2) - sum(x)^2) / (n * (n - 1))` in integers, so
/// the only rounding is the final division. The fraction is reduced first;
/// the result is correctly rounded whenever the reduced terms fit in 53 bits.
pub fn sample_variance(values: &[usize]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as u128;
    let (sum, sum_of_squares) = values.iter().fold((0u128, 0u128), |(s, sq), &v| {
        let v = v as u128;
        (s + v, sq + v * v)
    });
    let numerator = n * sum_of_squares - sum * sum;
    let denominator = n * (n - 1);
    let divisor = gcd(numerator, denominator);
    (numerator / divisor) as f64 / (denominator / divisor) as f64
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn mean_of<T>(items: &[T], field: impl Fn(&T) -> usize) -> Result<f64> {
    let values: Vec<f64> = items.iter().map(|item| field(item) as f64).collect();
    mean(&values)
}

fn most_common_key(table: &FrequencyTable) -> Option<String> {
    table.most_common().map(|(key, _)| key.to_string())
}

fn validate_inputs(line_count: usize, metrics_count: usize) -> Result<()> {
    if line_count == 0 {
        return Err(Error::InvalidInput(
            "cannot summarize an empty document".to_string(),
        ));
    }
    if line_count != metrics_count {
        return Err(Error::InvalidInput(format!(
            "{line_count} lines but {metrics_count} line metrics"
        )));
    }
    Ok(())
}

// Integral values below 2^53 are exact in f64 and print as integers.
fn serialize_compact<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
