//! Station records scraped from the timetable forms.

use std::fmt;

/// Error returned when building a station with an invalid name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station {id}: name must not be empty")]
pub struct InvalidStation {
    id: u32,
}

/// A bus station as listed by the website.
///
/// Identity is the numeric `id`; the name is only for display and search.
///
/// # Examples
///
/// ```
/// use ak_split::domain::Station;
///
/// let zagreb = Station::new(42, "  Zagreb ").unwrap();
/// assert_eq!(zagreb.id(), 42);
/// assert_eq!(zagreb.name(), "Zagreb");
///
/// assert!(Station::new(7, "   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    id: u32,
    name: String,
}

impl Station {
    /// Create a station, trimming the name.
    pub fn new(id: u32, name: impl AsRef<str>) -> Result<Self, InvalidStation> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(InvalidStation { id });
        }
        Ok(Self {
            id,
            name: name.to_string(),
        })
    }

    /// Numeric station identifier used by the JSON API.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_name() {
        let station = Station::new(3, "\n  Makarska\t").unwrap();
        assert_eq!(station.name(), "Makarska");
        assert_eq!(station.to_string(), "Makarska");
    }

    #[test]
    fn rejects_empty_name() {
        let err = Station::new(9, "").unwrap_err();
        assert_eq!(err.to_string(), "invalid station 9: name must not be empty");
    }

    #[test]
    fn equality_uses_id_and_name() {
        let a = Station::new(1, "Split").unwrap();
        let b = Station::new(1, "Split").unwrap();
        let c = Station::new(2, "Split").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
