//! Endpoint pair sent to the timetable API.

use serde::Serialize;

use super::{Direction, Station};

/// The fixed central station all timetables are relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeTerminal {
    /// Station id used by the JSON API.
    pub id: u32,
    /// Display name as it appears in the station lists.
    pub name: String,
}

impl HomeTerminal {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Whether a station list entry refers to the home terminal.
    ///
    /// Matches names case-insensitively and exactly otherwise.
    pub fn is_named(&self, name: &str) -> bool {
        name.to_lowercase() == self.name.to_lowercase()
    }
}

impl Default for HomeTerminal {
    fn default() -> Self {
        Self::new(1, "Split")
    }
}

/// Origin and destination ids for a timetable query.
///
/// One of the two is always the home terminal. Serializes to the API's
/// `id1`/`id2` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteParams {
    #[serde(rename = "id1")]
    pub from: u32,
    #[serde(rename = "id2")]
    pub to: u32,
}

impl RouteParams {
    /// Place the chosen station and the home terminal in the right slots.
    ///
    /// Departures leave the home terminal for `station`; arrivals come from
    /// `station` into the home terminal.
    ///
    /// ```
    /// use ak_split::domain::{Direction, RouteParams, Station};
    ///
    /// let station = Station::new(42, "Zagreb").unwrap();
    /// let dep = RouteParams::build(Direction::Departure, &station, 1);
    /// assert_eq!((dep.from, dep.to), (1, 42));
    /// let arr = RouteParams::build(Direction::Arrival, &station, 1);
    /// assert_eq!((arr.from, arr.to), (42, 1));
    /// ```
    pub fn build(direction: Direction, station: &Station, home_id: u32) -> Self {
        match direction {
            Direction::Departure => Self {
                from: home_id,
                to: station.id(),
            },
            Direction::Arrival => Self {
                from: station.id(),
                to: home_id,
            },
        }
    }
}
