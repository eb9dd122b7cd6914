//! End-to-end analysis pipeline from request inputs to an extraction record.

use tracing::{info, warn};

use crate::error::{OrdexError, Result};
use crate::llm::CompletionClient;
use crate::models::{OrderExtraction, SourceDocument, SourceOrigin};
use crate::order::enrich_extraction;
use crate::order::rules::extract_order_id;
use crate::pdf::{self, extract_pdf_text};

/// Label the upstream workflow puts in front of the supplier name.
const SUPPLIER_MARKER: &str = "Fournisseur : ";

/// Inputs of one analysis request.
#[derive(Debug, Clone, Default)]
pub struct AnalysisInput {
    /// Address of the email sender, used as the supplier fallback.
    pub sender_email: String,

    /// Raw email body text.
    pub email_body: Option<String>,

    /// PDF attachment bytes, already base64-decoded.
    pub pdf_attachment: Option<Vec<u8>>,
}

/// Fill in the sender address when the email carries the supplier
/// marker with nothing behind it. An email without the marker passes
/// through unchanged.
///
/// "Behind it" means everything up to the next marker occurrence, so a
/// later non-blank line counts as a named supplier.
fn ensure_supplier_marker(email: &str, sender: &str) -> String {
    let named = email
        .split(SUPPLIER_MARKER)
        .nth(1)
        .map(|segment| !segment.trim().is_empty())
        .unwrap_or(false);
    if named {
        return email.to_string();
    }
    email.replace(SUPPLIER_MARKER, &format!("{SUPPLIER_MARKER}{sender}"))
}

/// Run the full analysis: assemble the source text, query the
/// completion API, post-process the reply with the rule extractors.
///
/// A PDF attachment that cannot be read is skipped with a warning; the
/// analysis proceeds on whatever text remains. With no usable text at
/// all this fails with [`OrdexError::NoContent`].
pub async fn analyze_order<C>(client: &C, input: &AnalysisInput) -> Result<OrderExtraction>
where
    C: CompletionClient + Sync,
{
    let mut document = SourceDocument::new();

    if let Some(email) = input.email_body.as_deref() {
        document.push(
            SourceOrigin::EmailBody,
            ensure_supplier_marker(email, &input.sender_email),
        );
    }

    if let Some(data) = input.pdf_attachment.as_deref() {
        match extract_pdf_text(data) {
            Ok(text) => {
                info!("extracted {} bytes of text from PDF attachment", text.len());
                document.push(SourceOrigin::PdfAttachment, text);
            }
            Err(e) => warn!("PDF attachment skipped: {}", e),
        }
    }

    if document.is_empty() {
        return Err(OrdexError::NoContent);
    }

    let combined = document.combined();
    let reply = client.complete(&combined).await?;
    info!("completion reply of {} bytes", reply.len());

    Ok(enrich_extraction(&reply, &combined))
}

/// Extract an order number straight from PDF bytes, without the
/// completion API. Serves the direct PDF upload route.
pub fn order_id_from_pdf(data: &[u8]) -> pdf::Result<Option<String>> {
    let text = extract_pdf_text(data)?;
    Ok(extract_order_id(&text))
}
