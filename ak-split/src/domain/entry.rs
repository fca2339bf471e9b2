//! Timetable records returned by the JSON API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DurationError, DurationRecord};

/// One row of a timetable, kept exactly as the API sent it.
///
/// The API's field names are Croatian; accessors expose the fields the
/// presentation layer needs without validating the rest. Serializing an
/// entry reproduces the received object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimetableEntry(Map<String, Value>);

impl TimetableEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Departure time as a duration since midnight (`polazak`).
    pub fn departure(&self) -> Option<&str> {
        self.str_field("polazak")
    }

    /// Arrival time as a duration since midnight (`dolazak`).
    pub fn arrival(&self) -> Option<&str> {
        self.str_field("dolazak")
    }

    /// Trip length (`trajanje`).
    pub fn duration(&self) -> Option<&str> {
        self.str_field("trajanje")
    }

    /// Platform (`peron`). `None` when absent or not a string, which the API
    /// uses for "not applicable".
    pub fn platform(&self) -> Option<&str> {
        self.str_field("peron")
    }

    /// Operator name (`txtprijevoznik`).
    pub fn operator(&self) -> Option<&str> {
        self.str_field("txtprijevoznik")
    }

    pub fn departure_record(&self) -> Option<Result<DurationRecord, DurationError>> {
        self.departure().map(DurationRecord::parse)
    }

    pub fn arrival_record(&self) -> Option<Result<DurationRecord, DurationError>> {
        self.arrival().map(DurationRecord::parse)
    }

    pub fn duration_record(&self) -> Option<Result<DurationRecord, DurationError>> {
        self.duration().map(DurationRecord::parse)
    }

    /// All fields as received.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}
