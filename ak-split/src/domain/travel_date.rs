//! Travel dates offered by the timetable forms.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};

/// Format of the option values in the date select control.
const SOURCE_FORMAT: &str = "%d.%m.%Y";

/// Format sent to the JSON API.
const MACHINE_FORMAT: &str = "%Y-%m-%d";

/// Short format shown when picking a date.
const DISPLAY_FORMAT: &str = "%d.%m.";

/// Error returned when a date string is in neither accepted format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel date {0:?}: expected DD.MM.YYYY or YYYY-MM-DD")]
pub struct InvalidTravelDate(String);

/// A calendar date on which the website lists a timetable.
///
/// # Examples
///
/// ```
/// use ak_split::domain::TravelDate;
///
/// let date = TravelDate::parse("05.03.2024").unwrap();
/// assert_eq!(date.machine(), "2024-03-05");
/// assert_eq!(date.display(), "05.03.");
///
/// assert_eq!(TravelDate::parse("2024-03-05").unwrap(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Parse `DD.MM.YYYY` (as found on the website) or `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Result<Self, InvalidTravelDate> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(trimmed, SOURCE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(trimmed, MACHINE_FORMAT))
            .map(Self)
            .map_err(|_| InvalidTravelDate(s.to_string()))
    }

    /// `YYYY-MM-DD`, the form the JSON API expects.
    pub fn machine(&self) -> String {
        self.0.format(MACHINE_FORMAT).to_string()
    }

    /// `DD.MM.`, day and month only.
    pub fn display(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(MACHINE_FORMAT))
    }
}

impl FromStr for TravelDate {
    type Err = InvalidTravelDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
