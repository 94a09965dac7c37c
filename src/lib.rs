pub mod converter;
pub mod record;
pub mod tokenizer;

// Re-export commonly used items for convenience
pub use converter::{convert, ConvertError, Conversion, RowOutcome, SkippedRow};
pub use record::{has_content, map_row, Record};
pub use tokenizer::split_line;

use anyhow::{Context, Result};
use std::path::Path;

/// High-level function to convert a CSV file on disk to JSON Lines.
/// Reads the whole file as UTF-8 text and runs a single conversion pass.
pub fn convert_csv_file(input_path: &Path) -> Result<Conversion> {
    let csv_text = std::fs::read_to_string(input_path)
        .context(format!("Failed to read input file: {:?}", input_path))?;

    let conversion =
        converter::convert(&csv_text).context("Failed to convert CSV to JSON Lines")?;
    Ok(conversion)
}
