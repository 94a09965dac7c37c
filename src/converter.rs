use thiserror::Error;

use crate::record::{self, Record};
use crate::tokenizer;

/// Failure modes of a whole conversion call. Per-row problems never appear
/// here; they are absorbed into [`SkippedRow`] diagnostics instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("CSV input is empty")]
    EmptyInput,
}

/// Diagnostic for a data row that could not be converted. Carries the
/// 1-based line number and the raw line so callers can log it; it has no
/// effect on the conversion outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// What happened to a single data line.
#[derive(Debug)]
pub enum RowOutcome {
    /// Row qualified and maps to a record.
    Included(Record),
    /// Line was empty after trimming; not emitted, not counted.
    Blank,
    /// Row parsed but every mapped value was blank; not emitted, not counted.
    Excluded,
    /// Row failed to convert; recorded as a diagnostic.
    Skipped(SkippedRow),
}

/// Result of converting one CSV text: the concatenated JSONL output, the
/// number of emitted rows, and diagnostics for any skipped rows.
#[derive(Debug, Default)]
pub struct Conversion {
    pub lines: String,
    pub count: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Converts CSV text to JSON Lines, one object per qualifying data row,
/// with the first row supplying field names.
///
/// Line endings are normalized before splitting: `\r\n` and lone `\r`
/// both become `\n`, so Windows and old-Mac files parse the same as Unix
/// ones. A single pass over the lines; no state survives the call.
pub fn convert(csv_text: &str) -> Result<Conversion, ConvertError> {
    let normalized = csv_text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    convert_lines(&lines)
}

fn convert_lines(lines: &[&str]) -> Result<Conversion, ConvertError> {
    // split() on a non-empty separator always yields at least one piece,
    // so this only fires for callers handing us a pre-split empty list.
    // The validation is kept explicit all the same.
    if lines.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let headers = tokenizer::split_line(lines[0].trim());

    let mut result = Conversion::default();
    for (i, raw) in lines.iter().enumerate().skip(1) {
        match convert_line(&headers, raw) {
            RowOutcome::Included(record) => match serde_json::to_string(&record) {
                Ok(json_line) => {
                    result.lines.push_str(&json_line);
                    result.lines.push('\n');
                    result.count += 1;
                }
                // One bad row must never fail the whole file.
                Err(err) => result.skipped.push(SkippedRow {
                    line: i + 1,
                    content: (*raw).to_string(),
                    reason: err.to_string(),
                }),
            },
            RowOutcome::Skipped(skipped) => result.skipped.push(skipped),
            RowOutcome::Blank | RowOutcome::Excluded => {}
        }
    }

    Ok(result)
}

/// Resolves a single data line to its [`RowOutcome`].
pub fn convert_line(headers: &[String], raw: &str) -> RowOutcome {
    let line = raw.trim();
    if line.is_empty() {
        return RowOutcome::Blank;
    }

    let values = tokenizer::split_line(line);
    let record = record::map_row(headers, &values);
    if record::has_content(&record) {
        RowOutcome::Included(record)
    } else {
        RowOutcome::Excluded
    }
}
