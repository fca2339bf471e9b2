//! Command-line argument definitions.

use clap::Parser;

use crate::client::DEFAULT_BASE_URL;
use crate::domain::{Direction, TravelDate};

/// Bus timetables for arrivals at and departures from Split bus station
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output data in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Travel direction: arrival or departure (prompted for when omitted)
    #[arg(short, long)]
    pub direction: Option<Direction>,

    /// Station to search for (prompted for when omitted or ambiguous)
    #[arg(short, long)]
    pub station: Option<String>,

    /// Travel date as DD.MM.YYYY or YYYY-MM-DD (prompted for when omitted)
    #[arg(long)]
    pub date: Option<TravelDate>,

    /// Base URL of the timetable website
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}
