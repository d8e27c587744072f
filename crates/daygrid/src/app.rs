//! Widget application state.
//!
//! Owns the event store, the persistence adapter, the displayed month, the
//! filter keyword, and the modal session. Loaded once at startup; every
//! mutation runs to completion and is written back to the adapter before
//! the next intent is processed.

use std::sync::Arc;

use thiserror::Error;

use daygrid_core::calendar::{
    CreateEventRequest, Event, EventError, EventMap, EventStore, IndexError, MonthRef,
    OverlapError, UpdateError, UpdateEventRequest,
};
use daygrid_core::export::{export_csv, export_json, file_name, ExportError, ExportFormat};
use daygrid_core::storage::{PersistenceAdapter, StorageError};

use crate::config::Config;
use crate::session::ModalSession;

/// Errors surfaced to the presentation layer.
///
/// Every failure is synchronous and leaves the store either fully applied
/// or fully unchanged; nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] EventError),
    #[error(transparent)]
    Overlap(#[from] OverlapError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Update(#[from] UpdateError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Failed to serialize events: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to persist events: {0}")]
    Persist(#[from] StorageError),
}

/// A downloadable export: file name plus contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// The monthly calendar widget, minus rendering.
pub struct CalendarApp {
    store: EventStore,
    adapter: Arc<dyn PersistenceAdapter>,
    store_key: String,
    month: MonthRef,
    keyword: String,
    session: ModalSession,
}

impl CalendarApp {
    /// Opens the widget on the current month.
    pub fn open(adapter: Arc<dyn PersistenceAdapter>, config: &Config) -> Self {
        Self::open_at(adapter, config, MonthRef::current())
    }

    /// Opens the widget on a specific month.
    ///
    /// Absent or malformed persisted state yields an empty store; neither is
    /// surfaced to the caller.
    pub fn open_at(adapter: Arc<dyn PersistenceAdapter>, config: &Config, month: MonthRef) -> Self {
        let raw = match adapter.get(&config.store_key) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read persisted events, starting empty");
                None
            }
        };
        let store = match raw {
            Some(raw) => match EventStore::from_blob(&raw) {
                Ok(store) => store,
                Err(err) => {
                    tracing::warn!(error = %err, "Malformed event blob, starting empty");
                    EventStore::new()
                }
            },
            None => EventStore::new(),
        };
        tracing::debug!(events = store.len(), "Loaded event store");

        Self {
            store,
            adapter,
            store_key: config.store_key.clone(),
            month,
            keyword: String::new(),
            session: ModalSession::new(),
        }
    }

    fn persist(&self) -> Result<(), AppError> {
        let blob = self.store.to_blob()?;
        self.adapter.set(&self.store_key, &blob)?;
        Ok(())
    }

    // ==================== Intents ====================

    /// Day cell click: open the modal for that day.
    pub fn day_click(&mut self, day: u8) {
        tracing::debug!(day, "Day selected");
        self.session.select_day(day);
    }

    /// Edit click on an event in the modal's list.
    pub fn edit_click(&mut self, day: u8, index: usize) -> Result<(), AppError> {
        let events = self.store.events_for_day(day);
        let event = events.get(index).ok_or(IndexError::OutOfBounds {
            day,
            index,
            len: events.len(),
        })?;
        self.session.begin_edit(day, index, event);
        Ok(())
    }

    /// Close/cancel the modal.
    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Submit the modal form as a new event.
    ///
    /// On overlap rejection the store, the modal state, and the form are all
    /// left as they were, so the caller can present the error and let the
    /// user correct the form.
    pub fn submit_create(&mut self, request: CreateEventRequest) -> Result<(), AppError> {
        let (day, event) = request.into_event()?;
        if let Err(err) = self.store.add_event(day, event) {
            tracing::warn!(day, error = %err, "Rejected overlapping event");
            return Err(err.into());
        }
        self.persist()?;
        self.session.submit_succeeded();
        tracing::info!(day, "Created event");
        Ok(())
    }

    /// Submit the modal form as an edit of the event at `day`/`index`.
    pub fn submit_update(
        &mut self,
        day: u8,
        index: usize,
        request: UpdateEventRequest,
    ) -> Result<(), AppError> {
        let events = self.store.events_for_day(day);
        let current = events.get(index).ok_or(IndexError::OutOfBounds {
            day,
            index,
            len: events.len(),
        })?;
        let updated = request.apply_to(current)?;
        if let Err(err) = self.store.update_event(day, index, updated) {
            tracing::warn!(day, index, error = %err, "Rejected event update");
            return Err(err.into());
        }
        self.persist()?;
        self.session.submit_succeeded();
        tracing::info!(day, index, "Updated event");
        Ok(())
    }

    /// Delete click on an event in the modal's list.
    pub fn delete_event(&mut self, day: u8, index: usize) -> Result<Event, AppError> {
        let removed = self.store.delete_event(day, index)?;
        self.persist()?;
        tracing::info!(day, index, name = %removed.name, "Deleted event");
        Ok(removed)
    }

    /// Show the previous month.
    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
    }

    /// Show the next month.
    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    /// Set the keyword the event lists are filtered by.
    pub fn set_filter(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    // ==================== Read surface ====================

    /// The displayed month.
    pub fn month(&self) -> MonthRef {
        self.month
    }

    /// The active filter keyword.
    pub fn filter_keyword(&self) -> &str {
        &self.keyword
    }

    /// The modal session, for rendering the modal.
    pub fn session(&self) -> &ModalSession {
        &self.session
    }

    /// The underlying store, for read-only inspection.
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Per-day event counts for the displayed month's grid cells.
    pub fn day_counts(&self) -> Vec<(u8, usize)> {
        (1..=self.month.days_in_month())
            .map(|day| (day, self.store.day_count(day)))
            .collect()
    }

    /// Events for one day, in display order.
    pub fn events_for_day(&self, day: u8) -> &[Event] {
        self.store.events_for_day(day)
    }

    /// The stored mapping narrowed to the active keyword; only days with at
    /// least one surviving event appear.
    pub fn filtered_events(&self) -> EventMap {
        self.store.filter(&self.keyword)
    }

    /// Export the displayed month in the given format.
    pub fn export(&self, format: ExportFormat) -> Result<ExportFile, AppError> {
        let bytes = match format {
            ExportFormat::Json => export_json(&self.store, self.month)?,
            ExportFormat::Csv => export_csv(&self.store, self.month),
        };
        let name = file_name(self.month, format);
        tracing::debug!(%name, bytes = bytes.len(), "Exported month");
        Ok(ExportFile { name, bytes })
    }
}
