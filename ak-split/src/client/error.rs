//! Timetable client error types.

use crate::extract::ExtractError;

/// Errors that can occur when talking to the timetable website.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed (network error, invalid URL, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Website returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// A form page could not be read
    #[error("form page error: {0}")]
    Extract(#[from] ExtractError),

    /// Timetable response was not a JSON array of objects
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ClientError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = ClientError::Json {
            message: "expected a sequence".into(),
            body: Some("{}".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected a sequence");

        let err = ClientError::from(ExtractError::EmptyStationName { id: 4 });
        assert_eq!(err.to_string(), "form page error: station 4 has an empty name");
    }
}
