//! JSON export: a pretty-printed array of `{day, events}` objects.

use crate::calendar::{DayEvents, EventStore, MonthRef};

use super::ExportError;

/// Serializes the displayed month's events in ascending day order.
///
/// Days outside the month (a day-31 entry while February is displayed) are
/// left out.
pub fn export_json(store: &EventStore, month: MonthRef) -> Result<Vec<u8>, ExportError> {
    let days: Vec<DayEvents> = store
        .day_events()
        .into_iter()
        .filter(|day| month.contains_day(day.day))
        .collect();
    Ok(serde_json::to_vec_pretty(&days)?)
}
