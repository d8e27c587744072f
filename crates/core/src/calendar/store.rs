//! The day-keyed event store.

use super::error::{IndexError, OverlapError, UpdateError};
use super::operations::{find_conflict, intervals_overlap, matches_keyword};
use super::types::{DayEvents, Event, EventMap};

/// The event collection for the month grid, keyed by day of month.
///
/// A day key is present only while its event list is non-empty; each list
/// keeps insertion order, which is also the display and edit-index order.
/// Mutations either fully apply or fully reject, and the store is the single
/// source of truth the persistence adapter mirrors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: EventMap,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a persisted blob.
    pub fn from_blob(raw: &str) -> Result<Self, serde_json::Error> {
        let events: EventMap = serde_json::from_str(raw)?;
        Ok(Self { events })
    }

    /// Loads from an optional persisted blob.
    ///
    /// Absent or malformed input yields an empty store; this never fails.
    /// Callers that want to report a malformed blob use [`Self::from_blob`].
    pub fn load(raw: Option<&str>) -> Self {
        raw.and_then(|raw| Self::from_blob(raw).ok())
            .unwrap_or_default()
    }

    /// Serializes for the persistence adapter.
    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.events)
    }

    /// Appends an event to a day unless it overlaps an existing one.
    ///
    /// On rejection the store is unchanged.
    pub fn add_event(&mut self, day: u8, event: Event) -> Result<(), OverlapError> {
        let existing = self.events_for_day(day);
        if let Some(conflict) = find_conflict(existing, &event) {
            return Err(OverlapError {
                day,
                candidate: event.name,
                existing: conflict.name.clone(),
                existing_start: conflict.start_time,
                existing_end: conflict.end_time,
            });
        }
        self.events.entry(day).or_default().push(event);
        Ok(())
    }

    /// Replaces the event at `index` in `day`'s list.
    ///
    /// The replacement is checked for overlap against its siblings; the slot
    /// being replaced is excluded from the check.
    pub fn update_event(&mut self, day: u8, index: usize, event: Event) -> Result<(), UpdateError> {
        let list = self
            .events
            .get_mut(&day)
            .ok_or(IndexError::UnknownDay(day))?;
        if index >= list.len() {
            return Err(IndexError::OutOfBounds {
                day,
                index,
                len: list.len(),
            }
            .into());
        }
        let conflict = list
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, e)| e)
            .find(|e| intervals_overlap(e, &event));
        if let Some(conflict) = conflict {
            return Err(OverlapError {
                day,
                candidate: event.name,
                existing: conflict.name.clone(),
                existing_start: conflict.start_time,
                existing_end: conflict.end_time,
            }
            .into());
        }
        list[index] = event;
        Ok(())
    }

    /// Removes and returns the event at `index` in `day`'s list.
    ///
    /// Removing the last event of a day removes the day key entirely.
    pub fn delete_event(&mut self, day: u8, index: usize) -> Result<Event, IndexError> {
        let list = self
            .events
            .get_mut(&day)
            .ok_or(IndexError::UnknownDay(day))?;
        if index >= list.len() {
            return Err(IndexError::OutOfBounds {
                day,
                index,
                len: list.len(),
            });
        }
        let removed = list.remove(index);
        if list.is_empty() {
            self.events.remove(&day);
        }
        Ok(removed)
    }

    /// True if the store has at least one event on `day`.
    pub fn contains_day(&self, day: u8) -> bool {
        self.events.contains_key(&day)
    }

    /// Number of events on `day`.
    pub fn day_count(&self, day: u8) -> usize {
        self.events.get(&day).map(Vec::len).unwrap_or(0)
    }

    /// Events on `day` in insertion order; empty when the day is absent.
    pub fn events_for_day(&self, day: u8) -> &[Event] {
        self.events.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if no day has events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of events across all days.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Keeps only events whose name matches the keyword case-insensitively;
    /// only days with at least one surviving event appear.
    pub fn filter(&self, keyword: &str) -> EventMap {
        let mut filtered = EventMap::new();
        for (day, events) in &self.events {
            let kept: Vec<Event> = events
                .iter()
                .filter(|event| matches_keyword(event, keyword))
                .cloned()
                .collect();
            if !kept.is_empty() {
                filtered.insert(*day, kept);
            }
        }
        filtered
    }

    /// `{day, events}` pairs in ascending day order.
    pub fn day_events(&self) -> Vec<DayEvents> {
        self.events
            .iter()
            .map(|(day, events)| DayEvents::new(*day, events.clone()))
            .collect()
    }

    /// The underlying day-keyed mapping.
    pub fn as_map(&self) -> &EventMap {
        &self.events
    }
}
