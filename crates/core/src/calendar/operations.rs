use super::error::EventError;
use super::types::Event;

/// Half-open interval intersection test for two events on the same day.
///
/// Touching endpoints (one ends exactly when the other starts) do not
/// overlap.
pub fn intervals_overlap(a: &Event, b: &Event) -> bool {
    a.start_time < b.end_time && a.end_time > b.start_time
}

/// True iff the candidate's interval intersects any existing event's.
pub fn overlaps(existing: &[Event], candidate: &Event) -> bool {
    find_conflict(existing, candidate).is_some()
}

/// The first existing event whose interval intersects the candidate's.
pub fn find_conflict<'a>(existing: &'a [Event], candidate: &Event) -> Option<&'a Event> {
    existing.iter().find(|e| intervals_overlap(e, candidate))
}

/// Validates an event before it reaches the store.
pub fn validate_event(event: &Event) -> Result<(), EventError> {
    if event.name.trim().is_empty() {
        return Err(EventError::EmptyName);
    }
    if event.end_time <= event.start_time {
        return Err(EventError::InvalidTimeRange);
    }
    Ok(())
}

/// Case-insensitive substring match on the event name.
///
/// An empty keyword matches everything.
pub fn matches_keyword(event: &Event, keyword: &str) -> bool {
    keyword.is_empty() || event.name.to_lowercase().contains(&keyword.to_lowercase())
}
