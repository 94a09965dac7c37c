use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use csv_jsonl::convert_csv_file;

#[derive(clap::Parser, Debug)]
#[command(
    name = "csv-jsonl",
    about = "Converts a CSV file to JSON Lines, one JSON object per data row"
)]
struct Args {
    /// Input CSV file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output JSONL file path; '-' for stdout (default: input path with .jsonl extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the first 5 output lines to stderr
    #[arg(short, long)]
    preview: bool,
}

const PREVIEW_LINES: usize = 5;

fn main() -> Result<()> {
    let args = Args::parse();

    let result = convert_csv_file(&args.input)?;

    // Row-level diagnostics never abort the conversion; report them here
    for skipped in &result.skipped {
        eprintln!(
            "Skipped malformed line {} ({}): {}",
            skipped.line, skipped.reason, skipped.content
        );
    }

    if result.lines.is_empty() {
        bail!("No valid data found in the CSV file");
    }

    eprintln!(
        "Conversion complete! Converted {} rows ({:.2} MB).",
        result.count,
        result.lines.len() as f64 / 1024.0 / 1024.0
    );

    if args.preview {
        eprintln!("Preview (first {} lines):", PREVIEW_LINES);
        for line in result.lines.lines().take(PREVIEW_LINES) {
            eprintln!("{}", line);
        }
    }

    let output_path = args
        .output
        .unwrap_or_else(|| args.input.with_extension("jsonl"));

    if output_path.as_os_str() == "-" {
        let mut writer = BufWriter::new(std::io::stdout());
        writer
            .write_all(result.lines.as_bytes())
            .context("Failed to write output")?;
        writer.flush().context("Failed to flush output")?;
    } else {
        let file = File::create(&output_path)
            .context(format!("Failed to create output file: {:?}", output_path))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(result.lines.as_bytes())
            .context("Failed to write output")?;
        writer.flush().context("Failed to flush output")?;
        eprintln!("Wrote {:?}", output_path);
    }

    Ok(())
}
