//! CSV export with RFC-style field quoting.

use crate::calendar::{EventStore, MonthRef};

const HEADER: &str = "Day,Month,Year,Event Name,Start Time,End Time,Description,Category";

/// Serializes the displayed month's events as CSV.
///
/// One header row, then one row per event in ascending day order (insertion
/// order within a day). The Month column is zero-based.
pub fn export_csv(store: &EventStore, month: MonthRef) -> Vec<u8> {
    let mut out = String::from(HEADER);
    out.push('\n');

    for (day, events) in store.as_map() {
        if !month.contains_day(*day) {
            continue;
        }
        for event in events {
            let fields = [
                day.to_string(),
                (month.month - 1).to_string(),
                month.year.to_string(),
                event.name.clone(),
                event.start_time.format("%H:%M").to_string(),
                event.end_time.format("%H:%M").to_string(),
                event.description.clone().unwrap_or_default(),
                event.category.to_string(),
            ];
            let row: Vec<String> = fields.iter().map(|field| escape_field(field)).collect();
            out.push_str(&row.join(","));
            out.push('\n');
        }
    }

    out.into_bytes()
}

/// Quotes a field when it contains a comma, quote, or line break; embedded
/// quotes are doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
