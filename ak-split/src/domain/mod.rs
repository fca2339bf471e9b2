//! Domain types for the timetable client.
//!
//! Values here are produced by the extractor or the client and are never
//! mutated afterwards. Types that carry an invariant check it at
//! construction time.

mod direction;
mod duration;
mod entry;
mod route;
mod station;
mod travel_date;

pub use direction::{Direction, InvalidDirection};
pub use duration::{DurationError, DurationRecord};
pub use entry::TimetableEntry;
pub use route::{HomeTerminal, RouteParams};
pub use station::{InvalidStation, Station};
pub use travel_date::{InvalidTravelDate, TravelDate};
