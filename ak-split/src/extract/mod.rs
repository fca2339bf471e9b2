//! HTML extraction for the timetable form pages.
//!
//! Each direction has its own form page. Both pages carry a station select
//! control (a different element id per direction) and a travel date select
//! control. The element ids are the only coupling to the website's markup
//! and live in this module alone.

mod error;
mod form;

pub use error::ExtractError;
pub use form::{TimetableForm, extract_form, extract_stations, extract_travel_dates};
