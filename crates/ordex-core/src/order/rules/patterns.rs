//! Compiled regex tables shared by the rule-based extractors.

use lazy_static::lazy_static;
use regex::Regex;

use super::delivery::DateIntent;
use super::order_id::IdPatternKind;

lazy_static! {
    /// Contextual delivery phrases, most specific first. Group 1 of
    /// every template captures a numeric date. The negation, reschedule
    /// and delay templates run in dotall mode since courtesy emails
    /// hard-wrap mid-clause; the looser tiers stay line-bound.
    pub static ref DELIVERY_PHRASES: Vec<(DateIntent, Regex)> = vec![
        // negative phrases, both clause orders
        (
            DateIntent::NegativeDelay,
            Regex::new(r"(?si)(?:ne sera pas|pas de|impossible de|ne pourra pas).*?livr[ée]*.*?(?:avant le|avant|le)\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        (
            DateIntent::NegativeDelay,
            Regex::new(r"(?si)livr[ée]*.*?(?:ne sera pas|ne pourra pas|impossible).*?(?:avant le|avant|le)\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        (
            DateIntent::Rescheduled,
            Regex::new(r"(?si)(?:livraison|livr[ée]*).*?(?:reportée|repoussée|décalée).*?(?:au|le|pour le)\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        (
            DateIntent::DelayNotice,
            Regex::new(r"(?si)(?:délai|retard).*?(?:livraison|livr[ée]*).*?(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        // positive phrases
        (
            DateIntent::ConfirmedDelivery,
            Regex::new(r"(?i)(?:livraison|livr[ée]*).*?(?:prévue|estimée|planifiée).*?(?:le|pour le|au)\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        (
            DateIntent::ConfirmedDelivery,
            Regex::new(r"(?i)(?:disponible|prêt).*?(?:le|pour le|au)\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        (
            DateIntent::ConfirmedDelivery,
            Regex::new(r"(?i)(?:commande|colis).*?(?:livr[ée]*|expédi[ée]*).*?(?:le|pour le|au)\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        // abbreviated phrasing
        (
            DateIntent::ShortDelivery,
            Regex::new(r"(?i)(?:livraison|livr[ée]*)\s+(?:le|pour le|au)\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        (
            DateIntent::ShortDelivery,
            Regex::new(r"(?i)(?:prévu|estimé|planifié).*?(?:pour le|le|au)\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        // loose temporal wording
        (
            DateIntent::Proximity,
            Regex::new(r"(?i)(?:dans|en|vers|autour de)\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        (
            DateIntent::PeriodRelative,
            Regex::new(r"(?i)(?:fin|début|mi).*?(?:semaine|mois).*?(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        (
            DateIntent::PeriodRelative,
            Regex::new(r"(?i)(?:semaine|mois).*?(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
        (
            DateIntent::PeriodRelative,
            Regex::new(r"(?i)(?:prochaine|suivante).*?(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap(),
        ),
    ];

    /// Bare numeric date, slash or dash separated, 2 or 4 digit year.
    pub static ref DATE_NUMERIC: Regex =
        Regex::new(r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}").unwrap();

    /// Day, full French month name, 4 digit year.
    pub static ref DATE_FRENCH_LONG: Regex = Regex::new(
        r"(?i)(\d{1,2})\s+(janvier|février|mars|avril|mai|juin|juillet|août|septembre|octobre|novembre|décembre)\s+(\d{4})"
    ).unwrap();

    /// Day, abbreviated French month name, 4 digit year.
    pub static ref DATE_FRENCH_ABBR: Regex = Regex::new(
        r"(?i)(\d{1,2})\s+(jan|fév|mar|avr|mai|jun|jul|aoû|sep|oct|nov|déc)\s+(\d{4})"
    ).unwrap();

    /// Order-number shapes, most specific first. Supplier references
    /// seen in the wild: BSK, TAC, CMD, PO, BC, ORDER, REF prefixes and
    /// plain numeric codes.
    pub static ref ORDER_ID_CASCADE: Vec<(IdPatternKind, Regex)> = vec![
        (
            IdPatternKind::KnownPrefix,
            Regex::new(r"\bBSK[A-Z0-9]{10}\b").unwrap(),
        ),
        (
            IdPatternKind::KnownPrefix,
            Regex::new(r"\bTAC\s+[A-Z0-9]+\b").unwrap(),
        ),
        (
            IdPatternKind::PrefixedCode,
            Regex::new(r"\b[A-Z]{2,4}[0-9]{6,12}\b").unwrap(),
        ),
        (
            IdPatternKind::PrefixedCode,
            Regex::new(r"\b[A-Z]{2,4}[0-9]{3,4}-?[0-9]{3}\b").unwrap(),
        ),
        (
            IdPatternKind::GenericAlnum,
            Regex::new(r"\b[A-Z0-9]{8,15}\b").unwrap(),
        ),
        (
            IdPatternKind::NumericOnly,
            Regex::new(r"\b[0-9]{9,12}\b").unwrap(),
        ),
        (
            IdPatternKind::GenericAlnum,
            Regex::new(r"\b[A-Z0-9]{6,20}\b").unwrap(),
        ),
        (
            IdPatternKind::PrefixedCode,
            Regex::new(r"\b[A-Z]{2,6}[0-9]{4,10}\b").unwrap(),
        ),
        (
            IdPatternKind::GenericAlnum,
            Regex::new(r"\b[A-Z0-9]{4,25}\b").unwrap(),
        ),
        (
            IdPatternKind::PrefixedCode,
            Regex::new(r"\b[A-Z]{1,8}[0-9]{1,15}\b").unwrap(),
        ),
        (
            IdPatternKind::NumericOnly,
            Regex::new(r"\b[0-9]{4,20}\b").unwrap(),
        ),
    ];
}
