//! Travel direction relative to the home terminal.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction {0:?}: expected \"arrival\" or \"departure\"")]
pub struct InvalidDirection(String);

/// Whether a query concerns buses arriving at or departing from the home
/// terminal.
///
/// Departure is the default, matching the website's landing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Arrival,
    #[default]
    Departure,
}

impl Direction {
    /// Both directions, in the order they are offered to the user.
    pub const ALL: [Direction; 2] = [Direction::Arrival, Direction::Departure];

    /// Human-readable label, also used as the matching timetable column name.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Arrival => "Arrival",
            Direction::Departure => "Departure",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrival" | "arrivals" | "a" => Ok(Direction::Arrival),
            "departure" | "departures" | "d" => Ok(Direction::Departure),
            _ => Err(InvalidDirection(s.to_string())),
        }
    }
}
