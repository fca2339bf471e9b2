//! Request construction for the form pages and the JSON API.
//!
//! Everything here is pure: no I/O, no clock reads except `default_date`.

use serde::Serialize;

use crate::domain::{Direction, HomeTerminal, RouteParams, Station, TravelDate};

/// Form page listing arrivals into the home terminal.
pub const ARRIVALS_FORM_PATH: &str = "/dolasci-u-split";

/// Form page listing departures from the home terminal.
pub const DEPARTURES_FORM_PATH: &str = "/polasci-iz-splita";

/// JSON timetable endpoint.
pub const API_PATH: &str = "/ak-api";

/// Join a path onto a base URL with exactly one slash at the seam.
///
/// ```
/// use ak_split::client::query::join_url;
///
/// assert_eq!(join_url("http://host/", "/a"), "http://host/a");
/// assert_eq!(join_url("http://host", "a"), "http://host/a");
/// assert_eq!(join_url("http://host/base//", "//a/b"), "http://host/base/a/b");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// URL of the form page for a direction.
pub fn timetable_form_url(base_url: &str, direction: Direction) -> String {
    let path = match direction {
        Direction::Arrival => ARRIVALS_FORM_PATH,
        Direction::Departure => DEPARTURES_FORM_PATH,
    };
    join_url(base_url, path)
}

/// URL of the JSON timetable endpoint.
pub fn timetable_api_url(base_url: &str) -> String {
    join_url(base_url, API_PATH)
}

/// Origin and destination ids for a query about `station`.
pub fn build_route(direction: Direction, station: &Station, home: &HomeTerminal) -> RouteParams {
    RouteParams::build(direction, station, home.id)
}

/// Today's UTC date as `YYYY-MM-DD`, used when no travel date is given.
pub fn default_date() -> String {
    TravelDate::today().machine()
}

/// Query string of a timetable request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableQuery<'a> {
    #[serde(rename = "api-key")]
    pub api_key: &'a str,
    pub date: &'a str,
    pub id1: u32,
    pub id2: u32,
}

impl<'a> TimetableQuery<'a> {
    pub fn new(api_key: &'a str, date: &'a str, route: RouteParams) -> Self {
        Self {
            api_key,
            date,
            id1: route.from,
            id2: route.to,
        }
    }
}
