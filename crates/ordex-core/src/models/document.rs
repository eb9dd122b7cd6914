//! Source document assembled from email text and PDF extractions.

use serde::{Deserialize, Serialize};

/// Where a text fragment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceOrigin {
    /// Body of the inbound email.
    EmailBody,
    /// Text extracted from a base64 PDF attachment.
    PdfAttachment,
    /// Text extracted from a raw PDF upload.
    PdfUpload,
}

/// One extracted text fragment with its origin.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Origin of the fragment.
    pub origin: SourceOrigin,
    /// Extracted plain text.
    pub text: String,
}

/// Ordered collection of text fragments built once per request.
///
/// The combined text is what gets sent to the completion API and scanned
/// by the local heuristics. When both an email body and a PDF attachment
/// are present, the two sections are labeled so the model can tell them
/// apart; a single source is passed through unlabeled.
#[derive(Debug, Clone, Default)]
pub struct SourceDocument {
    fragments: Vec<Fragment>,
    raw_len: usize,
}

impl SourceDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Empty text is ignored.
    pub fn push(&mut self, origin: SourceOrigin, text: String) {
        if text.is_empty() {
            return;
        }
        self.raw_len += text.len();
        self.fragments.push(Fragment { origin, text });
    }

    /// Whether no usable text was collected.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Total byte length of the collected fragments.
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// Fragments in insertion order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    fn first_text_of(&self, origin: SourceOrigin) -> Option<&str> {
        self.fragments
            .iter()
            .find(|f| f.origin == origin)
            .map(|f| f.text.as_str())
    }

    /// Combined analysis text with section labels when both an email body
    /// and an attachment are present.
    pub fn combined(&self) -> String {
        let email = self.first_text_of(SourceOrigin::EmailBody);
        let pdf = self
            .first_text_of(SourceOrigin::PdfAttachment)
            .or_else(|| self.first_text_of(SourceOrigin::PdfUpload));

        match (email, pdf) {
            (Some(email), Some(pdf)) => {
                format!("EMAIL:\n{email}\n\nPIECE_JOINTE_PDF:\n{pdf}")
            }
            (Some(email), None) => email.to_string(),
            (None, Some(pdf)) => pdf.to_string(),
            (None, None) => String::new(),
        }
    }
}
