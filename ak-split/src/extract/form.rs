//! Station and travel date extraction.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::domain::{Direction, HomeTerminal, Station};

use super::error::ExtractError;

/// Travel date select control, shared by both form pages.
const DATE_SELECT: &str = "#select_date";

const OPTION: &str = "option";

/// Station select control for a direction's form page.
fn station_select(direction: Direction) -> &'static str {
    match direction {
        Direction::Arrival => "#select_dolasci",
        Direction::Departure => "#select_polasci",
    }
}

/// Everything a form page offers for one direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimetableForm {
    pub stations: Vec<Station>,
    /// Option values verbatim, `DD.MM.YYYY` on the live site.
    pub travel_dates: Vec<String>,
}

/// Extract the station list from a form page.
///
/// Option values become station ids and option text becomes the name.
/// Placeholder options without a value are skipped, as is the home
/// terminal: a station cannot be its own origin or destination.
///
/// Returns an empty list if the page has no station select control.
pub fn extract_stations(
    html: &str,
    direction: Direction,
    home: &HomeTerminal,
) -> Result<Vec<Station>, ExtractError> {
    let document = Html::parse_document(html);
    stations_from(&document, direction, home)
}

/// Extract the travel date option values from a form page.
///
/// Returns an empty list if the page has no date select control.
pub fn extract_travel_dates(html: &str) -> Result<Vec<String>, ExtractError> {
    let document = Html::parse_document(html);
    travel_dates_from(&document)
}

/// Extract stations and travel dates from a single parse of a form page.
pub fn extract_form(
    html: &str,
    direction: Direction,
    home: &HomeTerminal,
) -> Result<TimetableForm, ExtractError> {
    let document = Html::parse_document(html);
    Ok(TimetableForm {
        stations: stations_from(&document, direction, home)?,
        travel_dates: travel_dates_from(&document)?,
    })
}

fn stations_from(
    document: &Html,
    direction: Direction,
    home: &HomeTerminal,
) -> Result<Vec<Station>, ExtractError> {
    let Some(options) = options_of(document, station_select(direction))? else {
        return Ok(Vec::new());
    };

    let mut stations = Vec::with_capacity(options.len());
    for option in options {
        let text: String = option.text().collect();
        let name = text.trim();

        let value = option.value().attr("value").map(str::trim).unwrap_or("");
        if value.is_empty() {
            continue;
        }

        let id: u32 = value.parse().map_err(|_| ExtractError::InvalidStationId {
            value: value.to_string(),
            name: name.to_string(),
        })?;

        if home.is_named(name) {
            continue;
        }

        let station =
            Station::new(id, name).map_err(|_| ExtractError::EmptyStationName { id })?;
        stations.push(station);
    }

    Ok(stations)
}

fn travel_dates_from(document: &Html) -> Result<Vec<String>, ExtractError> {
    let Some(options) = options_of(document, DATE_SELECT)? else {
        return Ok(Vec::new());
    };

    Ok(options
        .into_iter()
        .filter_map(|option| option.value().attr("value"))
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Option elements of the select control with the given id selector.
///
/// `None` when the control is missing, which usually means the markup
/// changed upstream.
fn options_of<'a>(
    document: &'a Html,
    select_id: &'static str,
) -> Result<Option<Vec<ElementRef<'a>>>, ExtractError> {
    let control = selector(select_id)?;
    let option = selector(OPTION)?;

    let Some(select) = document.select(&control).next() else {
        warn!(select = select_id, "select control not found in form page");
        return Ok(None);
    };

    Ok(Some(select.select(&option).collect()))
}

fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector {
        selector: css,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPARTURES_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Polasci iz Splita</title></head>
<body>
  <form id="vozni_red">
    <select id="select_polasci" name="polasci">
      <option value="">Odaberite odredište</option>
      <option value="1">Split</option>
      <option value="42"> Zagreb </option>
      <option value="17">&#268;akovec</option>
      <option value="105">Đakovo</option>
    </select>
    <select id="select_date" name="datum">
      <option value="16.10.2026">16.10.</option>
      <option value="17.10.2026">17.10.</option>
    </select>
  </form>
</body>
</html>"#;

    const ARRIVALS_PAGE: &str = r#"<html><body>
    <select id="select_dolasci">
      <option value="3">Makarska</option>
      <option value="1">SPLIT</option>
      <option value="8">Šibenik</option>
    </select>
    <select id="select_date"><option value="16.10.2026">16.10.</option></select>
    </body></html>"#;

    fn home() -> HomeTerminal {
        HomeTerminal::default()
    }

    fn ids(stations: &[Station]) -> Vec<u32> {
        stations.iter().map(Station::id).collect()
    }

    #[test]
    fn departure_stations() {
        let stations = extract_stations(DEPARTURES_PAGE, Direction::Departure, &home()).unwrap();

        assert_eq!(ids(&stations), vec![42, 17, 105]);
        assert_eq!(stations[0].name(), "Zagreb");
        assert_eq!(stations[1].name(), "Čakovec");
        assert_eq!(stations[2].name(), "Đakovo");
    }

    #[test]
    fn departure_excludes_home_terminal() {
        let stations = extract_stations(DEPARTURES_PAGE, Direction::Departure, &home()).unwrap();
        assert!(!stations.iter().any(|s| s.name().eq_ignore_ascii_case("split")));
    }

    #[test]
    fn arrival_uses_its_own_control() {
        let stations = extract_stations(ARRIVALS_PAGE, Direction::Arrival, &home()).unwrap();
        assert_eq!(ids(&stations), vec![3, 8]);

        // The departures control is absent from the arrivals page.
        let stations = extract_stations(ARRIVALS_PAGE, Direction::Departure, &home()).unwrap();
        assert!(stations.is_empty());
    }

    #[test]
    fn arrival_excludes_home_terminal() {
        let stations = extract_stations(ARRIVALS_PAGE, Direction::Arrival, &home()).unwrap();
        assert!(!stations.iter().any(|s| home().is_named(s.name())));
    }

    #[test]
    fn missing_control_yields_empty() {
        let html = "<html><body><p>Stranica je u izradi</p></body></html>";
        for direction in Direction::ALL {
            assert!(extract_stations(html, direction, &home()).unwrap().is_empty());
        }
        assert!(extract_travel_dates(html).unwrap().is_empty());
    }

    #[test]
    fn non_numeric_id_fails() {
        let html = r#"<select id="select_polasci"><option value="x7">Omiš</option></select>"#;
        let err = extract_stations(html, Direction::Departure, &home()).unwrap_err();
        assert_eq!(
            err,
            ExtractError::InvalidStationId {
                value: "x7".into(),
                name: "Omiš".into()
            }
        );
    }

    #[test]
    fn negative_id_fails() {
        let html = r#"<select id="select_polasci"><option value="-4">Omiš</option></select>"#;
        assert!(extract_stations(html, Direction::Departure, &home()).is_err());
    }

    #[test]
    fn empty_name_fails() {
        let html = r#"<select id="select_polasci"><option value="9">  </option></select>"#;
        let err = extract_stations(html, Direction::Departure, &home()).unwrap_err();
        assert_eq!(err, ExtractError::EmptyStationName { id: 9 });
    }

    #[test]
    fn travel_dates_verbatim() {
        let dates = extract_travel_dates(DEPARTURES_PAGE).unwrap();
        assert_eq!(dates, vec!["16.10.2026", "17.10.2026"]);
    }

    #[test]
    fn travel_dates_skip_placeholders() {
        let html = r#"<select id="select_date">
            <option>Datum</option>
            <option value="">--</option>
            <option value="01.11.2026">01.11.</option>
        </select>"#;
        assert_eq!(extract_travel_dates(html).unwrap(), vec!["01.11.2026"]);
    }

    #[test]
    fn form_extracts_both_lists() {
        let form = extract_form(DEPARTURES_PAGE, Direction::Departure, &home()).unwrap();
        assert_eq!(form.stations.len(), 3);
        assert_eq!(form.travel_dates.len(), 2);
    }

    #[test]
    fn extraction_is_deterministic() {
        let a = extract_stations(DEPARTURES_PAGE, Direction::Departure, &home()).unwrap();
        let b = extract_stations(DEPARTURES_PAGE, Direction::Departure, &home()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn custom_home_terminal() {
        let home = HomeTerminal::new(42, "zagreb");
        let stations = extract_stations(DEPARTURES_PAGE, Direction::Departure, &home).unwrap();
        assert_eq!(ids(&stations), vec![1, 17, 105]);
    }
}
