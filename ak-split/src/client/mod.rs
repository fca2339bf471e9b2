//! AK Split timetable website client.
//!
//! Fetches the timetable form pages to list stations and travel dates, and
//! queries the JSON API for the buses between the home terminal and a chosen
//! station.
//!
//! Key characteristics of the website:
//! - The station lists differ per direction and come from two HTML pages
//! - Station ids are only exposed as `<option>` values on those pages
//! - The JSON API authenticates with a static key passed as a query parameter
//! - Results are returned in full; there is no pagination

mod config;
mod error;
pub mod query;
mod timetable;


pub use config::{ClientConfig, DEFAULT_API_KEY, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use timetable::TimetableClient;
