//! Plain-text timetable rendering.

use crate::domain::{Direction, DurationRecord, TimetableEntry};

const HEADERS: [&str; 5] = ["Departure", "Arrival", "Duration", "Position", "Operator"];

/// Shown for platforms the API marks as not applicable.
const NOT_APPLICABLE: &str = "N/A";

/// Render entries as an aligned table.
///
/// The column matching `direction` is marked with `*`. Times that fail to
/// parse render as empty cells.
pub fn render(entries: &[TimetableEntry], direction: Direction) -> String {
    if entries.is_empty() {
        return "No buses found.\n".to_string();
    }

    let header: Vec<String> = HEADERS
        .iter()
        .map(|&h| {
            if h == direction.label() {
                format!("{h} *")
            } else {
                h.to_string()
            }
        })
        .collect();

    let rows: Vec<[String; 5]> = entries.iter().map(row).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn row(entry: &TimetableEntry) -> [String; 5] {
    [
        time_cell(entry.departure()),
        time_cell(entry.arrival()),
        time_cell(entry.duration()),
        entry.platform().unwrap_or(NOT_APPLICABLE).to_string(),
        entry.operator().unwrap_or_default().to_string(),
    ]
}

/// `HH:MM` for a duration record, empty when absent or malformed.
fn time_cell(record: Option<&str>) -> String {
    record
        .and_then(|r| DurationRecord::parse(r).ok())
        .map(|r| r.hhmm())
        .unwrap_or_default()
}

fn push_line<T: AsRef<str>>(out: &mut String, cells: &[T], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
