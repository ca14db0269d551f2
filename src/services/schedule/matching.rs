//! HS-code matching and rate extraction
//!
//! Schedule entries are heterogeneous records outside this service's control.
//! The field names for codes and rates are tried from ordered candidate lists.

use serde_json::Value;

/// Accepted field names for the HS code, tried in order; first key present wins
pub const CODE_FIELDS: [&str; 3] = ["hts_number", "hs_code", "product_code"];

/// Accepted field names for the duty rate, tried in order
pub const RATE_FIELDS: [&str; 3] = ["duty_rate", "tariff_rate", "rate"];

/// Find the current tariff rate for an HS code in the schedule
///
/// Scans entries in payload order and takes the first whose code field starts
/// with the first 6 characters of `hs_code`. The first prefix match is final:
/// if its rate does not parse, the lookup fails rather than continuing the
/// scan, since a later entry would be a different tariff line.
pub fn find_rate(entries: &[Value], hs_code: &str) -> Option<f64> {
    let prefix: String = hs_code.chars().take(6).collect();

    let entry = entries.iter().find(|entry| {
        field_value(entry, &CODE_FIELDS)
            .and_then(code_text)
            .is_some_and(|code| code.starts_with(&prefix))
    })?;

    match field_value(entry, &RATE_FIELDS) {
        Some(rate) => parse_rate(rate),
        // Schedule lines without a rate column are duty free
        None => Some(0.0),
    }
}

/// Parse one of the rate representations the publication uses
///
/// Numbers pass through; strings are normalized and may be a duty-free
/// sentinel or a percent figure. Anything else is `None`, never an error.
pub fn parse_rate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let normalized = s.trim().to_uppercase();
            if matches!(normalized.as_str(), "FREE" | "DUTY FREE" | "0") {
                return Some(0.0);
            }
            let trimmed = normalized
                .strip_suffix('%')
                .map(str::trim_end)
                .unwrap_or(&normalized);
            trimmed.parse().ok()
        }
        _ => None,
    }
}

/// First value present under any of the candidate field names
fn field_value<'a>(entry: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates.iter().find_map(|key| entry.get(key))
}

/// Render a code field as matchable text
fn code_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
