//! Date normalization shared by both phases of the delivery-date heuristic.

use chrono::NaiveDate;

/// Parse a numeric day-first date like `12/10/2025` or `12-10-25`.
///
/// The separator may be `/` or `-` in any position. A two-digit year is
/// prefixed with "20": supplier correspondence in this domain never
/// references the previous century. Returns `None` when the components
/// do not form a real calendar date.
pub fn parse_numeric_date(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.split(['/', '-']).collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;
    let year_part = parts[2].trim();
    let year: i32 = if year_part.len() == 2 {
        2000 + year_part.parse::<i32>().ok()?
    } else {
        year_part.parse().ok()?
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a date in the canonical output representation, DD/MM/YYYY.
pub fn format_delivery_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Resolve a French month name or abbreviation to its number.
///
/// The abbreviation set matches what appears in the correspondence this
/// system reads ("jun"/"jul" rather than the dictionary "juin"/"juil.").
pub fn french_month_to_number(month: &str) -> Option<u32> {
    match month.to_lowercase().as_str() {
        "janvier" | "jan" => Some(1),
        "février" | "fév" => Some(2),
        "mars" | "mar" => Some(3),
        "avril" | "avr" => Some(4),
        "mai" => Some(5),
        "juin" | "jun" => Some(6),
        "juillet" | "jul" => Some(7),
        "août" | "aoû" => Some(8),
        "septembre" | "sep" => Some(9),
        "octobre" | "oct" => Some(10),
        "novembre" | "nov" => Some(11),
        "décembre" | "déc" => Some(12),
        _ => None,
    }
}
