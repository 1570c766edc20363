// Search parameter bag passed through to the travel search service

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::datum::LegacyCoordinate;
use crate::resolver::CoordinateResolution;

pub const LOCATION: &str = "location";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const SEARCH_RADIUS: &str = "searchRadius";
pub const CHECKIN_DATE: &str = "checkinDate";
pub const CHECKOUT_DATE: &str = "checkoutDate";

/// The place text a coordinate was resolved from, kept for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateMatch {
    pub original_location: String,
    pub resolution: CoordinateResolution,
}

/// Caller-supplied search parameters plus the resolver's bookkeeping.
///
/// `fields` is sent to the search service as-is. `coordinate_failed` and
/// `coordinate_match` are internal and never leave the process.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchParams {
    pub fields: Map<String, Value>,
    pub coordinate_failed: bool,
    pub coordinate_match: Option<CoordinateMatch>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Sets check-in and check-out dates for a stay of `nights` (at least one).
    pub fn with_stay(self, check_in: NaiveDate, nights: u32) -> Self {
        let check_out = check_in + Duration::days(i64::from(nights.max(1)));
        self.with(CHECKIN_DATE, format_date_no_padding(check_in))
            .with(CHECKOUT_DATE, format_date_no_padding(check_out))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// The free-text place name, when present and non-blank.
    pub fn location(&self) -> Option<&str> {
        self.fields
            .get(LOCATION)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub(crate) fn apply_coordinate(
        &mut self,
        coordinate: LegacyCoordinate,
        resolution: CoordinateResolution,
        default_radius: u32,
    ) {
        let original_location = self
            .fields
            .remove(LOCATION)
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        self.fields
            .insert(LATITUDE.to_string(), coordinate.latitude().into());
        self.fields
            .insert(LONGITUDE.to_string(), coordinate.longitude().into());
        self.fields
            .entry(SEARCH_RADIUS)
            .or_insert_with(|| default_radius.into());

        self.coordinate_match = Some(CoordinateMatch {
            original_location,
            resolution,
        });
    }

    pub(crate) fn mark_coordinate_failed(&mut self) {
        self.coordinate_failed = true;
    }

    /// Query pairs for the search service. Nulls are dropped; nested values are
    /// sent as compact JSON.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter_map(|(key, value)| {
                let rendered = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => b.to_string(),
                    Value::Number(n) => n.to_string(),
                    other => other.to_string(),
                };
                Some((key.clone(), rendered))
            })
            .collect()
    }
}

/// `YYYY-M-D` without zero padding, the format the search service expects.
pub fn format_date_no_padding(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}
