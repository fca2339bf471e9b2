//! Timetable HTTP client.
//!
//! Provides async methods for listing stations and travel dates and for
//! querying timetables. Each call performs its own request; nothing is
//! cached between calls.

use reqwest::RequestBuilder;
use tracing::debug;

use crate::domain::{Direction, Station, TimetableEntry};
use crate::extract::{TimetableForm, extract_form, extract_stations, extract_travel_dates};

use super::config::ClientConfig;
use super::error::ClientError;
use super::query::{
    TimetableQuery, build_route, default_date, timetable_api_url, timetable_form_url,
};

/// How much of an unparsable response body to keep for diagnostics.
const BODY_SNIPPET_CHARS: usize = 500;

/// Client for the AK Split timetable website.
///
/// Holds no mutable state, so calls may be issued concurrently.
#[derive(Debug, Clone)]
pub struct TimetableClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl TimetableClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Create a client around an existing HTTP client.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List the stations offered for a direction.
    ///
    /// The home terminal is never part of the result. An empty list means
    /// the form page no longer has the expected select control.
    pub async fn get_stations(&self, direction: Direction) -> Result<Vec<Station>, ClientError> {
        let html = self.fetch_form(direction).await?;
        let stations = extract_stations(&html, direction, &self.config.home_terminal)?;
        debug!(%direction, stations = stations.len(), "Fetched stations");
        Ok(stations)
    }

    /// List the travel dates offered for a direction, verbatim.
    pub async fn get_travel_dates(&self, direction: Direction) -> Result<Vec<String>, ClientError> {
        let html = self.fetch_form(direction).await?;
        let dates = extract_travel_dates(&html)?;
        debug!(%direction, dates = dates.len(), "Fetched travel dates");
        Ok(dates)
    }

    /// Fetch a form page once and extract both stations and travel dates.
    pub async fn get_form(&self, direction: Direction) -> Result<TimetableForm, ClientError> {
        let html = self.fetch_form(direction).await?;
        let form = extract_form(&html, direction, &self.config.home_terminal)?;
        debug!(
            %direction,
            stations = form.stations.len(),
            dates = form.travel_dates.len(),
            "Fetched timetable form"
        );
        Ok(form)
    }

    /// Query the timetable between the home terminal and `station`.
    ///
    /// `date` is `YYYY-MM-DD` and defaults to today (UTC). The response is
    /// returned as received; only its top-level shape (an array of objects)
    /// is checked.
    pub async fn get_timetable(
        &self,
        direction: Direction,
        station: &Station,
        date: Option<&str>,
    ) -> Result<Vec<TimetableEntry>, ClientError> {
        let date = date.map_or_else(default_date, str::to_string);
        let route = build_route(direction, station, &self.config.home_terminal);
        let query = TimetableQuery::new(&self.config.api_key, &date, route);
        let url = timetable_api_url(&self.config.base_url);

        debug!(
            %direction,
            station = %station,
            %date,
            from = route.from,
            to = route.to,
            "Querying timetable"
        );

        let body = self.send(self.http.get(&url).query(&query)).await?;

        let entries: Vec<TimetableEntry> =
            serde_json::from_str(&body).map_err(|e| ClientError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
            })?;

        debug!(entries = entries.len(), "Fetched timetable");
        Ok(entries)
    }

    /// Buses from `station` into the home terminal.
    pub async fn get_arrivals(
        &self,
        station: &Station,
        date: Option<&str>,
    ) -> Result<Vec<TimetableEntry>, ClientError> {
        self.get_timetable(Direction::Arrival, station, date).await
    }

    /// Buses from the home terminal to `station`.
    pub async fn get_departures(
        &self,
        station: &Station,
        date: Option<&str>,
    ) -> Result<Vec<TimetableEntry>, ClientError> {
        self.get_timetable(Direction::Departure, station, date).await
    }

    async fn fetch_form(&self, direction: Direction) -> Result<String, ClientError> {
        let url = timetable_form_url(&self.config.base_url, direction);
        debug!(%url, "Fetching form page");
        self.send(self.http.get(&url)).await
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> Result<String, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}
