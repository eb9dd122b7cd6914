//! Delivery-date extraction: contextual phrases first, bare dates second.

use chrono::NaiveDate;
use tracing::debug;

use super::dates::{format_delivery_date, french_month_to_number, parse_numeric_date};
use super::patterns::{DATE_FRENCH_ABBR, DATE_FRENCH_LONG, DATE_NUMERIC, DELIVERY_PHRASES};
use super::FieldExtractor;

/// Semantic category of the phrase a date was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateIntent {
    /// The delivery will not happen before the date.
    NegativeDelay,
    /// The delivery was pushed back to the date.
    Rescheduled,
    /// A delay notice naming the date.
    DelayNotice,
    /// The delivery is confirmed or planned for the date.
    ConfirmedDelivery,
    /// Abbreviated "livraison le" phrasing.
    ShortDelivery,
    /// Loose temporal-proximity wording.
    Proximity,
    /// Week- or month-relative wording.
    PeriodRelative,
    /// Bare date with no delivery wording around it.
    Generic,
}

/// A candidate delivery date found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCandidate {
    /// Parsed calendar date.
    pub date: NaiveDate,
    /// Literal substring the date was parsed from.
    pub literal: String,
    /// Category of the phrase that produced the match.
    pub intent: DateIntent,
}

/// Delivery-date extractor.
///
/// Two cascading phases. Phase A walks the contextual phrase table in
/// priority order: the first template whose captured date survives
/// calendar validation decides the result, first occurrence in the text.
/// Phase B only runs when no phrase matched: it harvests every
/// date-like substring and keeps the chronologically latest.
pub struct DeliveryDateExtractor;

impl DeliveryDateExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Phase A: contextual phrase matching over the ordered table.
    fn phrase_candidate(&self, text: &str) -> Option<DateCandidate> {
        for (intent, pattern) in DELIVERY_PHRASES.iter() {
            for caps in pattern.captures_iter(text) {
                let literal = &caps[1];
                // A capture that fails calendar validation is noise;
                // keep scanning this template, then the next ones.
                if let Some(date) = parse_numeric_date(literal) {
                    debug!("delivery phrase {:?} matched {}", intent, literal);
                    return Some(DateCandidate {
                        date,
                        literal: literal.to_string(),
                        intent: *intent,
                    });
                }
            }
        }
        None
    }
}

impl Default for DeliveryDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DeliveryDateExtractor {
    type Output = DateCandidate;

    fn extract(&self, text: &str) -> Option<DateCandidate> {
        if text.is_empty() {
            return None;
        }

        if let Some(candidate) = self.phrase_candidate(text) {
            return Some(candidate);
        }

        let mut candidates = self.extract_all(text);
        if candidates.is_empty() {
            debug!("no delivery date candidate found");
            return None;
        }
        candidates.sort_by_key(|c| c.date);
        candidates.pop()
    }

    /// Phase B harvest: every parseable date in the text, in scan order.
    fn extract_all(&self, text: &str) -> Vec<DateCandidate> {
        let mut candidates: Vec<DateCandidate> = Vec::new();

        for m in DATE_NUMERIC.find_iter(text) {
            if let Some(date) = parse_numeric_date(m.as_str()) {
                candidates.push(DateCandidate {
                    date,
                    literal: m.as_str().to_string(),
                    intent: DateIntent::Generic,
                });
            }
        }

        for caps in DATE_FRENCH_LONG
            .captures_iter(text)
            .chain(DATE_FRENCH_ABBR.captures_iter(text))
        {
            let Some(candidate) = month_name_candidate(&caps) else {
                continue;
            };
            // "mai" appears in both month tables; skip exact duplicates
            if candidates
                .iter()
                .any(|c| c.date == candidate.date && c.literal == candidate.literal)
            {
                continue;
            }
            candidates.push(candidate);
        }

        candidates
    }
}

fn month_name_candidate(caps: &regex::Captures<'_>) -> Option<DateCandidate> {
    let day: u32 = caps[1].parse().ok()?;
    let month = french_month_to_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(DateCandidate {
        date,
        literal: caps[0].to_string(),
        intent: DateIntent::Generic,
    })
}

/// Extract the most plausible delivery date from free-form text,
/// formatted DD/MM/YYYY.
pub fn extract_delivery_date(text: &str) -> Option<String> {
    DeliveryDateExtractor::new()
        .extract(text)
        .map(|candidate| format_delivery_date(candidate.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> Option<DateCandidate> {
        DeliveryDateExtractor::new().extract(text)
    }

    #[test]
    fn test_negative_delay_phrase() {
        let candidate =
            extract("La commande ne sera pas livrée avant le 12/10/25 comme prévu initialement.")
                .unwrap();
        assert_eq!(candidate.intent, DateIntent::NegativeDelay);
        assert_eq!(candidate.literal, "12/10/25");
        assert_eq!(format_delivery_date(candidate.date), "12/10/2025");
    }

    #[test]
    fn test_negative_delay_delivery_word_first() {
        let candidate =
            extract("La livraison ne pourra pas être effectuée avant le 18/10/25.").unwrap();
        assert_eq!(candidate.intent, DateIntent::NegativeDelay);
        assert_eq!(format_delivery_date(candidate.date), "18/10/2025");
    }

    #[test]
    fn test_confirmed_delivery_phrase() {
        let candidate = extract("Livraison prévue pour le 15/10/2025.").unwrap();
        assert_eq!(candidate.intent, DateIntent::ConfirmedDelivery);
        assert_eq!(format_delivery_date(candidate.date), "15/10/2025");
    }

    #[test]
    fn test_rescheduled_phrase() {
        let candidate = extract(
            "Nous vous informons que la livraison de votre commande est reportée au 20/10/2025.",
        )
        .unwrap();
        assert_eq!(candidate.intent, DateIntent::Rescheduled);
        assert_eq!(format_delivery_date(candidate.date), "20/10/2025");
    }

    #[test]
    fn test_delay_notice_phrase() {
        let candidate =
            extract("Le retard de livraison est confirmé, nouvelle date : 30/11/2025.").unwrap();
        assert_eq!(candidate.intent, DateIntent::DelayNotice);
        assert_eq!(format_delivery_date(candidate.date), "30/11/2025");
    }

    #[test]
    fn test_short_delivery_phrase() {
        let candidate = extract("Livraison le 30/10/2025.").unwrap();
        assert_eq!(candidate.intent, DateIntent::ShortDelivery);
        assert_eq!(format_delivery_date(candidate.date), "30/10/2025");
    }

    #[test]
    fn test_planned_for_phrase() {
        let candidate = extract("Initialement prévue pour le 10/10/2025, merci de patienter.")
            .unwrap();
        assert_eq!(candidate.intent, DateIntent::ShortDelivery);
        assert_eq!(format_delivery_date(candidate.date), "10/10/2025");
    }

    #[test]
    fn test_negative_phrase_beats_surrounding_dates() {
        let text = "Réception du colis confirmée le 01/09/2025. \
                    La commande ne sera pas livrée avant le 12/10/25. \
                    Facture à régler avant le 30/12/2025.";
        let candidate = extract(text).unwrap();
        assert_eq!(candidate.intent, DateIntent::NegativeDelay);
        assert_eq!(format_delivery_date(candidate.date), "12/10/2025");
    }

    #[test]
    fn test_wrapped_negation_clause() {
        let text = "Bonjour,\n\n\
                    Suite à votre commande BSK2506CF0383, nous avons rencontré des difficultés.\n\n\
                    Initialement prévue pour le 10/10/2025, la livraison ne pourra pas être effectuée\n\
                    avant le 12/10/25 en raison d'un problème de stock.\n\n\
                    Nous nous excusons pour ce contretemps et faisons tout notre possible pour\n\
                    respecter cette nouvelle échéance du 12/10/2025.\n\n\
                    Cordialement,\n\
                    L'équipe logistique";
        let candidate = extract(text).unwrap();
        assert_eq!(candidate.intent, DateIntent::NegativeDelay);
        assert_eq!(candidate.literal, "12/10/25");
        assert_eq!(format_delivery_date(candidate.date), "12/10/2025");
    }

    #[test]
    fn test_bare_dates_latest_wins() {
        let text = "Devis envoyé le 01/08/2025, relance le 15/09/2025, réunion le 03/10/2025.";
        let candidate = extract(text).unwrap();
        assert_eq!(candidate.intent, DateIntent::Generic);
        assert_eq!(format_delivery_date(candidate.date), "03/10/2025");
    }

    #[test]
    fn test_separator_and_year_width_equivalence() {
        for text in ["le 05/11/2025", "le 05-11-2025", "le 05/11/25"] {
            let candidate = extract(text).unwrap();
            assert_eq!(
                format_delivery_date(candidate.date),
                "05/11/2025",
                "input {text}"
            );
        }
    }

    #[test]
    fn test_french_month_name_fallback() {
        let candidate = extract("La commande sera disponible le 22 octobre 2025.").unwrap();
        assert_eq!(candidate.intent, DateIntent::Generic);
        assert_eq!(format_delivery_date(candidate.date), "22/10/2025");
    }

    #[test]
    fn test_abbreviated_month_name() {
        let candidate = extract("Expédition : 15 sep 2025").unwrap();
        assert_eq!(format_delivery_date(candidate.date), "15/09/2025");
    }

    #[test]
    fn test_invalid_only_candidate_yields_none() {
        assert_eq!(extract("Rendez-vous le 32/13/2025 pour le contrôle."), None);
    }

    #[test]
    fn test_day_month_without_year_yields_none() {
        assert_eq!(extract("On ne pourra pas livrer avant le 25/10."), None);
    }

    #[test]
    fn test_no_date_yields_none() {
        assert_eq!(extract("Bonjour, merci pour votre message. Cordialement."), None);
        assert_eq!(extract(""), None);
    }

    #[test]
    fn test_idempotent() {
        let text = "Livraison prévue pour le 15/10/2025.";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn test_harvest_keeps_every_parseable_date() {
        let extractor = DeliveryDateExtractor::new();
        let candidates =
            extractor.extract_all("Relance du 01/02/2025, clôture le 15 mars 2025, fin 03/04/25.");
        let literals: Vec<&str> = candidates.iter().map(|c| c.literal.as_str()).collect();
        assert_eq!(literals, vec!["01/02/2025", "03/04/25", "15 mars 2025"]);
    }

    #[test]
    fn test_extract_delivery_date_formats() {
        assert_eq!(
            extract_delivery_date("Livraison le 30/10/2025."),
            Some("30/10/2025".to_string())
        );
        assert_eq!(extract_delivery_date("Aucune date ici."), None);
    }
}
