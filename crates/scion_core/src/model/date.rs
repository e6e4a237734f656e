//! Composite genealogy date and its normalizer.
//!
//! # Responsibility
//! - Turn a raw `Date` element into a `CompositeDate`.
//! - Serve both personal (name) and event (fact) dates with one routine.
//!
//! # Invariants
//! - An endpoint is `Some` only if at least one of year/month/day was non-empty.
//! - Absent endpoints are never zero-filled.
//! - Unparsable components become `0`; normalization never fails.
//! - `kind` is passed through verbatim, including the empty string.

use crate::model::document::{RawDate, RawDateVal};
use serde::{Deserialize, Serialize};

/// One present date endpoint. Unknown components are `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl DateValue {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }
}

/// Date that may be a range and may be missing either endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeDate {
    /// Free-form date type label from the export.
    #[serde(rename = "type")]
    pub kind: String,
    pub start: Option<DateValue>,
    pub end: Option<DateValue>,
}

impl CompositeDate {
    /// Returns whether neither endpoint is present.
    pub fn is_undated(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Normalizes a raw `Date` element.
///
/// Start and end are handled independently with identical rules.
pub fn normalize_date(raw: &RawDate) -> CompositeDate {
    CompositeDate {
        kind: raw.kind.clone(),
        start: normalize_endpoint(&raw.start.value),
        end: normalize_endpoint(&raw.end.value),
    }
}

fn normalize_endpoint(raw: &RawDateVal) -> Option<DateValue> {
    if raw.year.is_empty() && raw.month.is_empty() && raw.day.is_empty() {
        return None;
    }

    Some(DateValue {
        year: parse_component(&raw.year),
        month: parse_component(&raw.month),
        day: parse_component(&raw.day),
    })
}

fn parse_component(text: &str) -> i32 {
    text.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::parse_component;

    #[test]
    fn parse_component_defaults_to_zero() {
        assert_eq!(parse_component(""), 0);
        assert_eq!(parse_component("abc"), 0);
        assert_eq!(parse_component("12x"), 0);
        assert_eq!(parse_component("99999999999"), 0);
    }

    #[test]
    fn parse_component_accepts_signed_integers() {
        assert_eq!(parse_component("1887"), 1887);
        assert_eq!(parse_component("+7"), 7);
        assert_eq!(parse_component("-44"), -44);
        assert_eq!(parse_component("007"), 7);
    }
}
