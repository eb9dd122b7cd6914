//! Order-number extraction from purchase-order text.

use tracing::{debug, warn};

use super::patterns::ORDER_ID_CASCADE;
use super::FieldExtractor;

/// Shape family an order-number pattern belongs to.
///
/// The cascade runs from known supplier prefixes down to bare digit
/// runs, so the kind records how much trust the match deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPatternKind {
    /// Supplier prefix seen in the wild (`BSK`, `TAC`).
    KnownPrefix,
    /// Letter prefix followed by a digit run, optionally dashed.
    PrefixedCode,
    /// Generic alphanumeric token, accepted only when it mixes
    /// letters and digits.
    GenericAlnum,
    /// Digit-only reference.
    NumericOnly,
}

/// An order number found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderIdMatch {
    /// Matched reference, verbatim.
    pub value: String,
    /// Shape family of the pattern that matched.
    pub kind: IdPatternKind,
    /// Byte offsets of the match in the source text.
    pub position: (usize, usize),
}

/// Order-number extractor walking the shape cascade in priority order.
pub struct OrderIdExtractor;

impl OrderIdExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Generic alphanumeric tiers are wide enough to swallow plain
    /// uppercase words, so those require at least one letter and one
    /// digit. The prefixed and numeric tiers enforce shape already.
    fn acceptable(kind: IdPatternKind, token: &str) -> bool {
        match kind {
            IdPatternKind::GenericAlnum => {
                token.chars().any(|c| c.is_ascii_alphabetic())
                    && token.chars().any(|c| c.is_ascii_digit())
            }
            _ => true,
        }
    }
}

impl Default for OrderIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for OrderIdExtractor {
    type Output = OrderIdMatch;

    fn extract(&self, text: &str) -> Option<OrderIdMatch> {
        for (kind, pattern) in ORDER_ID_CASCADE.iter() {
            for m in pattern.find_iter(text) {
                if !Self::acceptable(*kind, m.as_str()) {
                    continue;
                }
                debug!("order id {} matched as {:?}", m.as_str(), kind);
                return Some(OrderIdMatch {
                    value: m.as_str().to_string(),
                    kind: *kind,
                    position: (m.start(), m.end()),
                });
            }
        }
        warn!("no order id found");
        None
    }

    fn extract_all(&self, text: &str) -> Vec<OrderIdMatch> {
        let mut found: Vec<OrderIdMatch> = Vec::new();
        for (kind, pattern) in ORDER_ID_CASCADE.iter() {
            for m in pattern.find_iter(text) {
                if !Self::acceptable(*kind, m.as_str()) {
                    continue;
                }
                if found.iter().any(|f| f.value == m.as_str()) {
                    continue;
                }
                found.push(OrderIdMatch {
                    value: m.as_str().to_string(),
                    kind: *kind,
                    position: (m.start(), m.end()),
                });
            }
        }
        found
    }
}

/// Extract the most plausible order number from free-form text.
pub fn extract_order_id(text: &str) -> Option<String> {
    OrderIdExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> Option<OrderIdMatch> {
        OrderIdExtractor::new().extract(text)
    }

    #[test]
    fn test_bsk_reference() {
        let m = extract("Commande BSK2506CF0383 du 23/06/2025").unwrap();
        assert_eq!(m.value, "BSK2506CF0383");
        assert_eq!(m.kind, IdPatternKind::KnownPrefix);
    }

    #[test]
    fn test_tac_reference_keeps_whole_token() {
        let m = extract("Référence TAC ETAC60JDF pour la commande").unwrap();
        assert_eq!(m.value, "TAC ETAC60JDF");
        assert_eq!(m.kind, IdPatternKind::KnownPrefix);
    }

    #[test]
    fn test_dashed_reference() {
        let m = extract("Bon de commande BC2025-001 émis.").unwrap();
        assert_eq!(m.value, "BC2025-001");
        assert_eq!(m.kind, IdPatternKind::PrefixedCode);
    }

    #[test]
    fn test_letter_prefix_long_digit_run() {
        let m = extract("Ref PO12345678 confirmée").unwrap();
        assert_eq!(m.value, "PO12345678");
        assert_eq!(m.kind, IdPatternKind::PrefixedCode);
    }

    #[test]
    fn test_pure_numeric_reference() {
        let m = extract("Votre commande 212011016 est en préparation").unwrap();
        assert_eq!(m.value, "212011016");
        assert_eq!(m.kind, IdPatternKind::NumericOnly);
    }

    #[test]
    fn test_short_numeric_reference() {
        let m = extract("Commande du fournisseur : numéro 45872").unwrap();
        assert_eq!(m.value, "45872");
        assert_eq!(m.kind, IdPatternKind::NumericOnly);
    }

    #[test]
    fn test_uppercase_words_are_not_references() {
        assert_eq!(extract("COMMANDE URGENTE"), None);
    }

    #[test]
    fn test_lowercase_reference_not_matched() {
        assert_eq!(extract("commande bsk2506cf0383"), None);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract(""), None);
    }

    #[test]
    fn test_position_offsets() {
        let m = extract("ID BSK2506CF0383").unwrap();
        assert_eq!(m.position, (3, 16));
    }

    #[test]
    fn test_extract_all_dedups_by_value() {
        let extractor = OrderIdExtractor::new();
        let all = extractor.extract_all("BSK2506CF0383 et encore BSK2506CF0383");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].kind, IdPatternKind::KnownPrefix);
    }

    #[test]
    fn test_extract_order_id_convenience() {
        assert_eq!(
            extract_order_id("Commande BSK2506CF0383"),
            Some("BSK2506CF0383".to_string())
        );
        assert_eq!(extract_order_id("aucune référence ici"), None);
    }
}
