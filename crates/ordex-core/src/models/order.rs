//! Order extraction result model matching the upstream response contract.

use serde::{Deserialize, Serialize};

/// Structured metadata extracted from an order email or document.
///
/// Field names on the wire are the French keys produced by the completion
/// API and consumed by the downstream workflow tool. Absent fields
/// serialize as JSON `null`; all four keys are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderExtraction {
    /// Purchase-order identifier.
    #[serde(rename = "ID_commande")]
    pub order_id: Option<String>,

    /// Supplier name or address.
    #[serde(rename = "nom_fournisseur")]
    pub supplier_name: Option<String>,

    /// Date the order was received, as written in the source.
    #[serde(rename = "date_reception")]
    pub reception_date: Option<String>,

    /// Delivery date, normalized to DD/MM/YYYY once enriched.
    #[serde(rename = "date_livraison")]
    pub delivery_date: Option<String>,
}

impl OrderExtraction {
    /// Whether the delivery date should be treated as absent for
    /// enrichment purposes. The completion API signals absence with JSON
    /// `null`, the literal string `"null"`, or an empty string.
    pub fn delivery_date_missing(&self) -> bool {
        matches!(self.delivery_date.as_deref(), None | Some("") | Some("null"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wire_field_names() {
        let extraction = OrderExtraction {
            order_id: Some("BSK2506CF0383".to_string()),
            supplier_name: Some("Société Générale de Quincaillerie".to_string()),
            reception_date: Some("01/10/2025".to_string()),
            delivery_date: None,
        };

        let json = serde_json::to_value(&extraction).unwrap();
        assert_eq!(json["ID_commande"], "BSK2506CF0383");
        assert_eq!(json["nom_fournisseur"], "Société Générale de Quincaillerie");
        assert_eq!(json["date_reception"], "01/10/2025");
        assert_eq!(json["date_livraison"], serde_json::Value::Null);
    }

    #[test]
    fn test_absent_fields_still_serialized() {
        let json = serde_json::to_string(&OrderExtraction::default()).unwrap();
        for key in [
            "ID_commande",
            "nom_fournisseur",
            "date_reception",
            "date_livraison",
        ] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
    }

    #[test]
    fn test_deserialize_partial_payload() {
        let extraction: OrderExtraction =
            serde_json::from_str(r#"{"ID_commande": "TAC ETAC60JDF"}"#).unwrap();
        assert_eq!(extraction.order_id.as_deref(), Some("TAC ETAC60JDF"));
        assert_eq!(extraction.supplier_name, None);
        assert_eq!(extraction.delivery_date, None);
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let extraction: OrderExtraction = serde_json::from_str(
            r#"{"ID_commande": "CMD123456", "commentaire": "livraison express"}"#,
        )
        .unwrap();
        assert_eq!(extraction.order_id.as_deref(), Some("CMD123456"));
    }

    #[test]
    fn test_delivery_date_missing() {
        let mut extraction = OrderExtraction::default();
        assert!(extraction.delivery_date_missing());

        extraction.delivery_date = Some("null".to_string());
        assert!(extraction.delivery_date_missing());

        extraction.delivery_date = Some(String::new());
        assert!(extraction.delivery_date_missing());

        extraction.delivery_date = Some("12/10/2025".to_string());
        assert!(!extraction.delivery_date_missing());
    }
}
