//! Line-based interactive selection.
//!
//! Lists are numbered; the user answers with a number. The station prompt
//! also accepts free text, which narrows the list by normalized fuzzy match.

use std::io::{self, BufRead, Write};

use crate::domain::{Direction, Station, TravelDate};
use crate::normalize::{matches, normalize};

/// Maximum number of stations listed at once.
const PAGE_SIZE: usize = 10;

/// Errors from interactive selection.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input ended before a choice was made
    #[error("input closed before a choice was made")]
    Cancelled,

    /// There was nothing to choose from
    #[error("no {0} to choose from")]
    NoChoices(&'static str),
}

/// Stations paired with their normalized names for searching.
#[derive(Debug, Clone)]
pub struct StationIndex {
    entries: Vec<(Station, String)>,
}

impl StationIndex {
    pub fn new(stations: &[Station]) -> Self {
        Self {
            entries: stations
                .iter()
                .map(|s| (s.clone(), normalize(s.name())))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stations whose name fuzzy-matches `query`, in listing order.
    pub fn search(&self, query: &str) -> Vec<&Station> {
        self.entries
            .iter()
            .filter(|(_, name)| matches(query, name))
            .map(|(station, _)| station)
            .collect()
    }

    /// The station to take directly for `query`, if it is unambiguous.
    ///
    /// An exact normalized name wins; otherwise there must be exactly one
    /// fuzzy match.
    pub fn resolve(&self, query: &str) -> Option<&Station> {
        let wanted = normalize(query);
        if let Some((station, _)) = self.entries.iter().find(|(_, name)| *name == wanted) {
            return Some(station);
        }
        match self.search(query).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Interactive prompt over any line-based input and output.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask for the travel direction.
    pub fn select_direction(&mut self) -> Result<Direction, PromptError> {
        let labels: Vec<&str> = Direction::ALL.iter().map(|d| d.label()).collect();
        let idx = self.choose("Choose travel type", &labels)?;
        Ok(Direction::ALL[idx])
    }

    /// Ask for one of the offered travel dates, shown as `DD.MM.`.
    pub fn select_date(&mut self, dates: &[TravelDate]) -> Result<TravelDate, PromptError> {
        if dates.is_empty() {
            return Err(PromptError::NoChoices("travel dates"));
        }
        let labels: Vec<String> = dates.iter().map(TravelDate::display).collect();
        let idx = self.choose("Choose travel date", &labels)?;
        Ok(dates[idx])
    }

    /// Ask for a station, starting from an optional search query.
    ///
    /// Arrivals ask for the start of the trip, departures for its
    /// destination.
    pub fn select_station(
        &mut self,
        index: &StationIndex,
        direction: Direction,
        query: Option<&str>,
    ) -> Result<Station, PromptError> {
        if index.is_empty() {
            return Err(PromptError::NoChoices("stations"));
        }

        let message = match direction {
            Direction::Arrival => "Select start",
            Direction::Departure => "Select destination",
        };
        let mut query = query.unwrap_or("").to_string();

        loop {
            let mut candidates = index.search(&query);
            if candidates.is_empty() {
                writeln!(self.output, "No stations match \"{query}\".")?;
                query.clear();
                candidates = index.search(&query);
            }

            writeln!(self.output, "? {message}")?;
            let shown = &candidates[..candidates.len().min(PAGE_SIZE)];
            for (i, station) in shown.iter().enumerate() {
                writeln!(self.output, "  {:>2}) {}", i + 1, station.name())?;
            }
            if candidates.len() > shown.len() {
                writeln!(
                    self.output,
                    "  ... {} more, type part of a name to narrow down",
                    candidates.len() - shown.len()
                )?;
            }
            write!(self.output, "> ")?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            if let Some(station) = pick(&answer, shown.len()).map(|i| shown[i]) {
                return Ok(station.clone());
            }
            if answer.is_empty() && shown.len() == 1 {
                return Ok(shown[0].clone());
            }
            query = answer;
        }
    }

    /// Show a numbered list and wait for a valid number.
    fn choose<T: AsRef<str>>(
        &mut self,
        message: &str,
        labels: &[T],
    ) -> Result<usize, PromptError> {
        loop {
            writeln!(self.output, "? {message}")?;
            for (i, label) in labels.iter().enumerate() {
                writeln!(self.output, "  {:>2}) {}", i + 1, label.as_ref())?;
            }
            write!(self.output, "> ")?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            if let Some(idx) = pick(&answer, labels.len()) {
                return Ok(idx);
            }
            writeln!(self.output, "Enter a number between 1 and {}.", labels.len())?;
        }
    }

    fn read_answer(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }
        Ok(line.trim().to_string())
    }
}

/// Zero-based index for a 1-based answer within `len` choices.
fn pick(answer: &str, len: usize) -> Option<usize> {
    match answer.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}
