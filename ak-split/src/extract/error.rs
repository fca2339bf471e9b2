//! Extraction error types.

/// Errors raised while reading station and date options from a form page.
///
/// A missing select control is not an error; extraction yields an empty
/// list instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// An option's value attribute is not a base-10 station id
    #[error("invalid station id {value:?} for {name:?}")]
    InvalidStationId { value: String, name: String },

    /// An option has an id but no visible name
    #[error("station {id} has an empty name")]
    EmptyStationName { id: u32 },

    /// A built-in CSS selector failed to parse
    #[error("invalid selector {selector:?}: {message}")]
    Selector {
        selector: &'static str,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ExtractError::InvalidStationId {
            value: "abc".into(),
            name: "Trogir".into(),
        };
        assert_eq!(err.to_string(), "invalid station id \"abc\" for \"Trogir\"");

        let err = ExtractError::EmptyStationName { id: 12 };
        assert_eq!(err.to_string(), "station 12 has an empty name");
    }
}
