//! Order-document analysis: rule-based extraction and LLM post-processing.

pub mod enrich;
pub mod rules;

pub use enrich::{enrich_extraction, fallback_extraction};
pub use rules::{extract_delivery_date, extract_order_id, FieldExtractor};
