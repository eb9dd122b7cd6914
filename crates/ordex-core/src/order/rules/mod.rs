//! Rule-based field extraction from order emails and purchase orders.
//!
//! The LLM carries the broad extraction; these rules are the
//! deterministic backstop for the fields it tends to miss.

pub mod dates;
pub mod delivery;
pub mod order_id;
pub mod patterns;

pub use dates::{format_delivery_date, french_month_to_number, parse_numeric_date};
pub use delivery::{extract_delivery_date, DateCandidate, DateIntent, DeliveryDateExtractor};
pub use order_id::{extract_order_id, IdPatternKind, OrderIdExtractor, OrderIdMatch};

/// A rule-based extractor for one field of an order document.
pub trait FieldExtractor {
    /// Extracted value type.
    type Output;

    /// Best single match, or `None` when the field is absent.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Every distinct match, in discovery order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
