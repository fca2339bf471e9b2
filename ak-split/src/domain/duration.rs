//! ISO-8601-style duration records used by the timetable API.
//!
//! The API encodes departure and arrival times as durations since midnight
//! and trip lengths as elapsed durations, both as `PT[nH][nM][nS]`.

use std::fmt;

/// Error returned when parsing an invalid duration record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration record: {reason}")]
pub struct DurationError {
    reason: &'static str,
}

impl DurationError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A parsed `PT[nH][nM][nS]` value.
///
/// # Examples
///
/// ```
/// use ak_split::domain::DurationRecord;
///
/// let record = DurationRecord::parse("PT1H30M").unwrap();
/// assert_eq!(record.to_string(), "01:30");
///
/// assert!(DurationRecord::parse("1:30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationRecord {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DurationRecord {
    /// Parse a duration record.
    ///
    /// Components are optional but must appear in `H`, `M`, `S` order, each
    /// at most once. A bare `PT` is zero.
    pub fn parse(s: &str) -> Result<Self, DurationError> {
        let rest = s
            .strip_prefix("PT")
            .ok_or_else(|| DurationError::new("expected PT prefix"))?;

        let mut record = Self::default();
        // Index of the next unit allowed in "HMS".
        let mut next_unit = 0;
        let mut digits = String::new();

        for c in rest.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }

            let unit = match c {
                'H' => 0,
                'M' => 1,
                'S' => 2,
                _ => return Err(DurationError::new("unexpected character")),
            };
            if unit < next_unit {
                return Err(DurationError::new("components out of order"));
            }
            if digits.is_empty() {
                return Err(DurationError::new("missing digits before unit"));
            }
            let value: u32 = digits
                .parse()
                .map_err(|_| DurationError::new("component out of range"))?;
            match unit {
                0 => record.hours = value,
                1 => record.minutes = value,
                _ => record.seconds = value,
            }
            digits.clear();
            next_unit = unit + 1;
        }

        if !digits.is_empty() {
            return Err(DurationError::new("trailing digits without unit"));
        }

        Ok(record)
    }

    /// Format as `HH:MM`, dropping seconds.
    pub fn hhmm(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }
}

impl fmt::Display for DurationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hhmm())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Anything matching PT(\d+H)?(\d+M)?(\d+S)? parses to its components.
        #[test]
        fn well_formed_records_parse(
            h in proptest::option::of(0u32..48),
            m in proptest::option::of(0u32..60),
            s in proptest::option::of(0u32..60),
        ) {
            let mut text = String::from("PT");
            if let Some(h) = h { text.push_str(&format!("{h}H")); }
            if let Some(m) = m { text.push_str(&format!("{m}M")); }
            if let Some(s) = s { text.push_str(&format!("{s}S")); }

            let record = DurationRecord::parse(&text).unwrap();
            prop_assert_eq!(record.hours, h.unwrap_or(0));
            prop_assert_eq!(record.minutes, m.unwrap_or(0));
            prop_assert_eq!(record.seconds, s.unwrap_or(0));
        }

        /// Arbitrary input never panics.
        #[test]
        fn never_panics(s in ".*") {
            let _ = DurationRecord::parse(&s);
        }
    }
}
