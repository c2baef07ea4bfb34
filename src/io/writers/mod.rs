pub mod csv;
pub mod json;

pub use csv::{format_average_vowels, parse_csv_rows, CsvWriter};
pub use json::{JsonWriter, SummaryReport};
