//! Command-line front end.
//!
//! Asks for whatever the arguments leave open, queries the timetable and
//! prints it as a table or as JSON.

mod args;
mod prompt;
mod table;

use std::io::{self, BufRead, BufReader, Write};

use tracing::warn;

use crate::client::{ClientConfig, ClientError, TimetableClient};
use crate::domain::TravelDate;

pub use args::Args;
pub use prompt::{Prompt, PromptError, StationIndex};
pub use table::render;

/// Errors that end a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run the CLI against stdin and stdout.
pub async fn run(args: Args) -> Result<(), CliError> {
    let client = TimetableClient::new(ClientConfig::new().with_base_url(&args.base_url))?;
    let mut prompt = Prompt::new(BufReader::new(io::stdin()), io::stdout());
    execute(&client, &args, &mut prompt).await
}

/// One complete lookup: direction, date, station, timetable.
pub async fn execute<R: BufRead, W: Write>(
    client: &TimetableClient,
    args: &Args,
    prompt: &mut Prompt<R, W>,
) -> Result<(), CliError> {
    let direction = match args.direction {
        Some(direction) => direction,
        None => prompt.select_direction()?,
    };

    let (stations, raw_dates) = futures::try_join!(
        client.get_stations(direction),
        client.get_travel_dates(direction)
    )?;

    let date = match args.date {
        Some(date) => Some(date),
        None => {
            let dates = offered_dates(&raw_dates);
            if dates.is_empty() {
                writeln!(prompt.output(), "No travel dates listed, using today.")?;
                None
            } else {
                Some(prompt.select_date(&dates)?)
            }
        }
    };

    let index = StationIndex::new(&stations);
    if index.is_empty() {
        writeln!(prompt.output(), "No stations available.")?;
        return Ok(());
    }

    let preselected = args.station.as_deref().and_then(|q| index.resolve(q)).cloned();
    let station = match preselected {
        Some(station) => station,
        None => prompt.select_station(&index, direction, args.station.as_deref())?,
    };

    let machine_date = date.map(|d| d.machine());
    let entries = client
        .get_timetable(direction, &station, machine_date.as_deref())
        .await?;

    let out = prompt.output();
    writeln!(out)?;
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        write!(out, "{}", render(&entries, direction))?;
    }
    out.flush()?;
    Ok(())
}

/// Travel dates from the form page, skipping values that are not dates.
fn offered_dates(raw: &[String]) -> Vec<TravelDate> {
    raw.iter()
        .filter_map(|value| match TravelDate::parse(value) {
            Ok(date) => Some(date),
            Err(e) => {
                warn!(error = %e, "Skipping travel date option");
                None
            }
        })
        .collect()
}
