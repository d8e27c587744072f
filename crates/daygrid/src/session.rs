//! Modal interaction state for the day editor.
//!
//! Submission is synchronous, so there is no resting "submitting" state:
//! a successful submit closes the modal, a rejected one leaves the session
//! untouched so the form can be corrected. The terminal state is always
//! [`ModalState::Idle`].

use chrono::NaiveTime;

use daygrid_core::calendar::{Category, Event};

/// Contents of the add/edit form, retained across an overlap rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub description: String,
    pub category: Category,
}

impl EventForm {
    /// Pre-fills the form from an existing event (edit click).
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            start_time: Some(event.start_time),
            end_time: Some(event.end_time),
            description: event.description.clone().unwrap_or_default(),
            category: event.category,
        }
    }
}

/// Where the modal currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No modal open.
    #[default]
    Idle,
    /// A day cell was clicked; the form targets a new event on that day.
    DaySelected { day: u8 },
    /// The event at `day`/`index` is being edited.
    Editing { day: u8, index: usize },
}

/// Drives the modal through day-click, edit-click, submit, and cancel
/// intents.
#[derive(Debug, Clone, Default)]
pub struct ModalSession {
    state: ModalState,
    form: EventForm,
}

impl ModalSession {
    /// Creates a session in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current modal state.
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Current form contents.
    pub fn form(&self) -> &EventForm {
        &self.form
    }

    /// Replaces the form contents (user typing into the modal).
    pub fn set_form(&mut self, form: EventForm) {
        self.form = form;
    }

    /// Day click: open the modal for that day with a cleared form.
    pub fn select_day(&mut self, day: u8) {
        self.state = ModalState::DaySelected { day };
        self.form = EventForm::default();
    }

    /// Edit click: pre-fill the form from the existing event.
    pub fn begin_edit(&mut self, day: u8, index: usize, event: &Event) {
        self.state = ModalState::Editing { day, index };
        self.form = EventForm::from_event(event);
    }

    /// Successful submit: close the modal, nothing retained.
    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }

    /// Cancel/close: back to idle, nothing retained.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}
