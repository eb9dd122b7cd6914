//! Analyze command - extract order fields from a saved email or PDF.
//!
//! By default only the offline rules run (order ID and delivery date);
//! `--llm` sends the document through the full pipeline against the
//! configured completion API.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use ordex_core::llm::AzureOpenAiClient;
use ordex_core::models::{LlmConfig, OrderExtraction};
use ordex_core::order::{extract_delivery_date, extract_order_id};
use ordex_core::pdf::extract_pdf_text;
use ordex_core::pipeline::{analyze_order, AnalysisInput};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input file (email text or PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Run the full pipeline against the completion API (requires the
    /// AZURE_OPENAI_* environment variables)
    #[arg(long)]
    llm: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output with the wire field names
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    info!("Analyzing file: {}", args.input.display());

    let extraction = if args.llm {
        analyze_live(&args, &extension).await?
    } else {
        analyze_offline(&args, &extension)?
    };

    let output = format_extraction(&extraction, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn analyze_offline(args: &AnalyzeArgs, extension: &str) -> anyhow::Result<OrderExtraction> {
    let text = if extension == "pdf" {
        let data = fs::read(&args.input)?;
        extract_pdf_text(&data)?
    } else {
        fs::read_to_string(&args.input)?
    };

    debug!("Read {} characters of input text", text.len());

    Ok(OrderExtraction {
        order_id: extract_order_id(&text),
        delivery_date: extract_delivery_date(&text),
        ..Default::default()
    })
}

async fn analyze_live(args: &AnalyzeArgs, extension: &str) -> anyhow::Result<OrderExtraction> {
    let config = LlmConfig::from_env()?;
    let client = AzureOpenAiClient::new(config)?;

    let input = if extension == "pdf" {
        AnalysisInput {
            pdf_attachment: Some(fs::read(&args.input)?),
            ..Default::default()
        }
    } else {
        AnalysisInput {
            email_body: Some(fs::read_to_string(&args.input)?),
            ..Default::default()
        }
    };

    Ok(analyze_order(&client, &input).await?)
}

fn format_extraction(extraction: &OrderExtraction, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(extraction)?),
        OutputFormat::Text => Ok(format_text(extraction)),
    }
}

fn format_text(extraction: &OrderExtraction) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    let mut output = String::new();
    output.push_str(&format!("ID commande:    {}\n", field(&extraction.order_id)));
    output.push_str(&format!(
        "Fournisseur:    {}\n",
        field(&extraction.supplier_name)
    ));
    output.push_str(&format!(
        "Date réception: {}\n",
        field(&extraction.reception_date)
    ));
    output.push_str(&format!(
        "Date livraison: {}\n",
        field(&extraction.delivery_date)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text_fills_missing_fields() {
        let extraction = OrderExtraction {
            order_id: Some("BSK2506CF0383".to_string()),
            delivery_date: Some("12/10/2025".to_string()),
            ..Default::default()
        };
        let text = format_text(&extraction);
        assert!(text.contains("ID commande:    BSK2506CF0383"));
        assert!(text.contains("Fournisseur:    -"));
        assert!(text.contains("Date livraison: 12/10/2025"));
    }

    #[test]
    fn test_format_json_uses_wire_names() {
        let extraction = OrderExtraction {
            order_id: Some("CMD123456".to_string()),
            ..Default::default()
        };
        let json = format_extraction(&extraction, OutputFormat::Json).unwrap();
        assert!(json.contains("\"ID_commande\""));
        assert!(json.contains("\"date_livraison\""));
    }
}
