// src/core/value.rs
//
// Field normalization shared by every reconstructor. A value is a grade if
// and only if it parses as a finite number; everything else is "absent".
// Zero is an earned grade and stays zero.

use chrono::NaiveDate;

use crate::config::consts::{DATE_FORMATS, NOT_APPLICABLE};
use crate::core::sanitize::{normalize_ws, unescape_json};
use crate::model::{PortalDate, ReportValue};

pub fn parse_grade(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() || NOT_APPLICABLE.iter().any(|m| t.eq_ignore_ascii_case(m)) {
        return None;
    }
    t.parse::<f64>().ok().filter(|g| g.is_finite())
}

/// Correlation ids are only meaningful when numeric and non-zero.
pub fn parse_correlation_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|&id| id != 0)
}

/// Try every known portal format; fall back to the cleaned source text.
pub fn parse_date(raw: &str) -> PortalDate {
    let cleaned = normalize_ws(&unescape_json(raw));
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .map(PortalDate::Date)
        .unwrap_or(PortalDate::Raw(cleaned))
}

/// Report-card cells: numbers become grades, anything else is kept as a mark.
pub fn parse_report_value(raw: &str) -> ReportValue {
    let t = raw.trim();
    match t.parse::<f64>() {
        Ok(g) if g.is_finite() => ReportValue::Grade(g),
        _ => ReportValue::Mark(s!(t)),
    }
}
