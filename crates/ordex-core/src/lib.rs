//! Core library for French purchase-order analysis.
//!
//! This crate provides:
//! - PDF processing (text extraction from uploads and attachments)
//! - LLM-backed extraction of order metadata via Azure OpenAI
//! - Rule-based French delivery-date and order-number extraction
//! - The analysis pipeline combining all of the above

pub mod error;
pub mod llm;
pub mod models;
pub mod order;
pub mod pdf;
pub mod pipeline;

pub use error::{ConfigError, LlmError, OrdexError, PdfError, Result};
pub use llm::{AzureOpenAiClient, CompletionClient, SYSTEM_INSTRUCTION};
pub use models::{LlmConfig, OrderExtraction, SourceDocument, SourceOrigin};
pub use order::rules::{
    extract_delivery_date, extract_order_id, DateCandidate, DateIntent, FieldExtractor,
};
pub use order::{enrich_extraction, fallback_extraction};
pub use pdf::{extract_pdf_text, PdfExtractor, PdfTextExtractor};
pub use pipeline::{analyze_order, order_id_from_pdf, AnalysisInput};
