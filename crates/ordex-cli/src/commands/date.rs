//! Date command - run the delivery date heuristic on its own.
//!
//! Useful for checking how a supplier email will be read before it goes
//! through the full analysis pipeline.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use ordex_core::order::rules::{extract_delivery_date, DeliveryDateExtractor, FieldExtractor};

/// Arguments for the date command.
#[derive(Args)]
pub struct DateArgs {
    /// Input text file
    #[arg(required_unless_present = "text")]
    file: Option<PathBuf>,

    /// Inline text to scan instead of a file
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Print every candidate date instead of the selected one
    #[arg(long)]
    all: bool,
}

pub async fn run(args: DateArgs) -> anyhow::Result<()> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            fs::read_to_string(path)?
        }
        (None, None) => anyhow::bail!("Provide an input file or --text"),
    };

    debug!("Scanning {} characters", text.len());

    if args.all {
        let extractor = DeliveryDateExtractor::new();
        let candidates = extractor.extract_all(&text);
        if candidates.is_empty() {
            anyhow::bail!("No dates found in the input text");
        }
        for candidate in candidates {
            println!(
                "{} ({})",
                candidate.date.format("%d/%m/%Y"),
                candidate.literal
            );
        }
        return Ok(());
    }

    match extract_delivery_date(&text) {
        Some(date) => {
            println!("{date}");
            Ok(())
        }
        None => anyhow::bail!("No delivery date found in the input text"),
    }
}
