//! Typed payloads for the create and edit intents.
//!
//! These replace the widget's reused modal form object: each intent carries
//! only the fields it needs and is validated before it reaches the store.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::error::EventError;
use super::operations::validate_event;
use super::types::{Category, Event};
use crate::serde::{deserialize_optional_string, time_hhmm, time_hhmm_opt};

/// Payload for creating a new event on a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub day: u8,
    pub name: String,
    #[serde(with = "time_hhmm")]
    pub start_time: NaiveTime,
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

impl CreateEventRequest {
    /// Creates a request for the given day and time interval.
    pub fn new(
        day: u8,
        name: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            day,
            name: name.into(),
            start_time,
            end_time,
            description: None,
            category: Category::default(),
        }
    }

    /// Set the event description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the event category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Validate and convert into the day key and event.
    pub fn into_event(self) -> Result<(u8, Event), EventError> {
        if !(1..=31).contains(&self.day) {
            return Err(EventError::InvalidDay(self.day));
        }
        let event = Event {
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            category: self.category,
        };
        validate_event(&event)?;
        Ok((self.day, event))
    }
}

/// Payload for editing the event in an existing day/index slot.
///
/// Absent fields keep the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time_hhmm_opt"
    )]
    pub start_time: Option<NaiveTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time_hhmm_opt"
    )]
    pub end_time: Option<NaiveTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl UpdateEventRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the event start time.
    pub fn with_start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the event end time.
    pub fn with_end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Set the event description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the event category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Produce the validated replacement for an existing event.
    pub fn apply_to(self, event: &Event) -> Result<Event, EventError> {
        let mut updated = event.clone();
        if let Some(name) = self.name {
            updated.name = name;
        }
        if let Some(start_time) = self.start_time {
            updated.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            updated.end_time = end_time;
        }
        if let Some(description) = self.description {
            updated.description = Some(description);
        }
        if let Some(category) = self.category {
            updated.category = category;
        }
        validate_event(&updated)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_create_request_into_event() {
        let request = CreateEventRequest::new(5, "Standup", make_time(9, 0), make_time(9, 15))
            .with_description("Daily sync")
            .with_category(Category::Personal);

        let (day, event) = request.into_event().unwrap();

        assert_eq!(day, 5);
        assert_eq!(event.name, "Standup");
        assert_eq!(event.description, Some("Daily sync".to_string()));
        assert_eq!(event.category, Category::Personal);
    }

    #[test]
    fn test_create_request_invalid_day() {
        let request = CreateEventRequest::new(0, "Standup", make_time(9, 0), make_time(9, 15));
        assert_eq!(request.into_event(), Err(EventError::InvalidDay(0)));

        let request = CreateEventRequest::new(32, "Standup", make_time(9, 0), make_time(9, 15));
        assert_eq!(request.into_event(), Err(EventError::InvalidDay(32)));
    }

    #[test]
    fn test_create_request_empty_name() {
        let request = CreateEventRequest::new(5, "", make_time(9, 0), make_time(9, 15));
        assert_eq!(request.into_event(), Err(EventError::EmptyName));
    }

    #[test]
    fn test_create_request_backwards_interval() {
        let request = CreateEventRequest::new(5, "Standup", make_time(10, 0), make_time(9, 0));
        assert_eq!(request.into_event(), Err(EventError::InvalidTimeRange));
    }

    #[test]
    fn test_update_request_apply() {
        let event = Event::new("Standup", make_time(9, 0), make_time(9, 15));
        let update = UpdateEventRequest::new().with_end_time(make_time(9, 20));

        let updated = update.apply_to(&event).unwrap();

        assert_eq!(updated.name, "Standup");
        assert_eq!(updated.start_time, make_time(9, 0));
        assert_eq!(updated.end_time, make_time(9, 20));
    }

    #[test]
    fn test_update_request_keeps_absent_fields() {
        let event = Event::new("Standup", make_time(9, 0), make_time(9, 15))
            .with_description("Daily sync")
            .with_category(Category::Personal);
        let update = UpdateEventRequest::new().with_name("Sync");

        let updated = update.apply_to(&event).unwrap();

        assert_eq!(updated.name, "Sync");
        assert_eq!(updated.description, Some("Daily sync".to_string()));
        assert_eq!(updated.category, Category::Personal);
    }

    #[test]
    fn test_update_request_rejects_invalid_result() {
        let event = Event::new("Standup", make_time(9, 0), make_time(9, 15));
        let update = UpdateEventRequest::new().with_end_time(make_time(8, 0));

        assert_eq!(update.apply_to(&event), Err(EventError::InvalidTimeRange));
    }

    #[test]
    fn test_update_request_empty_is_identity() {
        let event = Event::new("Standup", make_time(9, 0), make_time(9, 15));
        let updated = UpdateEventRequest::new().apply_to(&event).unwrap();
        assert_eq!(updated, event);
    }
}
