//! Post-processing of LLM replies with the rule-based extractors.

use tracing::{info, warn};

use crate::models::OrderExtraction;
use crate::order::rules::extract_delivery_date;

/// Parse a chat-completion reply into an extraction record.
///
/// Models wrap JSON in prose or code fences often enough that a strict
/// parse is not enough; when it fails, retry on the outermost brace
/// span before giving up.
fn parse_llm_payload(content: &str) -> Option<OrderExtraction> {
    if let Ok(parsed) = serde_json::from_str::<OrderExtraction>(content) {
        return Some(parsed);
    }
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&content[start..=end]).ok()
}

/// Merge an LLM reply with rule-based extraction over the source text.
///
/// The reply wins for every field it carries. A missing delivery date
/// (absent, empty or the literal string `"null"`) is replaced with
/// whatever the delivery-date rules find in the source text; a present
/// one is never overwritten.
pub fn enrich_extraction(llm_content: &str, source_text: &str) -> OrderExtraction {
    let Some(mut extraction) = parse_llm_payload(llm_content) else {
        warn!("LLM reply is not parseable as JSON, extracting from text only");
        return fallback_extraction(source_text);
    };

    if extraction.delivery_date_missing() {
        extraction.delivery_date = extract_delivery_date(source_text);
        if let Some(date) = &extraction.delivery_date {
            info!("delivery date recovered from source text: {}", date);
        }
    }

    extraction
}

/// Rule-only extraction used when the LLM reply is unusable.
pub fn fallback_extraction(text: &str) -> OrderExtraction {
    OrderExtraction {
        delivery_date: extract_delivery_date(text),
        ..OrderExtraction::default()
    }
}
