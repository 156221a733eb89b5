//! Sort key types for comparing catalog items
//!
//! These types wrap the values extracted from items and handle missing data
//! gracefully in their Ord implementations.

use super::traits::SortKey;
use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Title key with an accent- and case-insensitive collation.
///
/// Titles compare by their folded form first so "alien", "Alien" and
/// "Álien" sit together; the raw text breaks ties deterministically.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TitleKey(Option<(String, String)>);

impl TitleKey {
    /// Key for a present title.
    pub fn new(title: &str) -> Self {
        TitleKey(Some((collation_form(title), title.to_string())))
    }
}

/// NFD-decompose, drop combining marks, then lowercase.
fn collation_form(title: &str) -> String {
    title
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Ord for TitleKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some((a_folded, a_raw)), Some((b_folded, b_raw))) => {
                a_folded.cmp(b_folded).then_with(|| a_raw.cmp(b_raw))
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for TitleKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for TitleKey {
    fn missing() -> Self {
        TitleKey(None)
    }

    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// Release date key; unparsable dates are treated as missing (date minimum).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionalDateKey(Option<NaiveDate>);

impl OptionalDateKey {
    /// Key for an already parsed date.
    pub fn new(value: Option<NaiveDate>) -> Self {
        OptionalDateKey(value)
    }

    /// Parse `YYYY-MM-DD`, accepting a bare `YYYY` as January 1st.
    pub fn parse(value: Option<&str>) -> Self {
        let parsed = value.map(str::trim).and_then(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
                raw.parse::<i32>()
                    .ok()
                    .filter(|_| raw.len() == 4)
                    .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            })
        });
        OptionalDateKey(parsed)
    }
}

impl Ord for OptionalDateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with dates come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for OptionalDateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for OptionalDateKey {
    fn missing() -> Self {
        OptionalDateKey(None)
    }

    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

/// Float key for numeric sorting (rating, popularity)
#[derive(Clone, Debug, PartialEq)]
pub struct OptionalFloatKey(Option<OrderedFloat<f64>>);

impl OptionalFloatKey {
    /// `NaN` counts as missing.
    pub fn new(value: Option<f64>) -> Self {
        OptionalFloatKey(value.filter(|v| !v.is_nan()).map(OrderedFloat))
    }
}

impl Eq for OptionalFloatKey {}

impl Ord for OptionalFloatKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with values come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for OptionalFloatKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for OptionalFloatKey {
    fn missing() -> Self {
        OptionalFloatKey(None)
    }

    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}
