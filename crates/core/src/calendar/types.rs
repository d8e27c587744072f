use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_optional_string, time_hhmm};

/// Display category for an event, used for grouping and coloring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Work,
    Personal,
    Other,
}

impl Category {
    /// Returns the CSS class name for this category.
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Other => "Other",
        };
        f.write_str(label)
    }
}

/// A time-boxed event on a single day of the displayed month.
///
/// The serde representation matches the persisted blob: camelCase field
/// names, times as `"HH:MM"` strings, `description` omitted when absent,
/// and `category` defaulting to [`Category::Work`] so blobs written before
/// the field existed still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    #[serde(with = "time_hhmm")]
    pub start_time: NaiveTime,
    /// Must be strictly after `start_time`; enforced by
    /// [`validate_event`](super::validate_event) before an event reaches
    /// the store.
    #[serde(with = "time_hhmm")]
    pub end_time: NaiveTime,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Category,
}

impl Event {
    /// Creates a new event with the given name and time interval.
    pub fn new(name: impl Into<String>, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            name: name.into(),
            start_time,
            end_time,
            description: None,
            category: Category::default(),
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category for this event.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

/// Day-keyed event lists.
///
/// Keys are days of the displayed month (1..=31); each list keeps insertion
/// order, which is also the display and edit-index order.
pub type EventMap = BTreeMap<u8, Vec<Event>>;

/// A day's events, the shape consumed by the grid view and the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEvents {
    pub day: u8,
    pub events: Vec<Event>,
}

impl DayEvents {
    /// Creates a new DayEvents with the given day and events.
    pub fn new(day: u8, events: Vec<Event>) -> Self {
        Self { day, events }
    }

    /// Returns true if this day has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the number of events for this day.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
