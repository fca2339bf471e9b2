//! AK Split bus timetable client.
//!
//! Scrapes the station and travel date lists from the timetable forms on
//! the Split bus station website and queries its JSON API for arrivals and
//! departures.

pub mod cli;
pub mod client;
pub mod domain;
pub mod extract;
pub mod normalize;
