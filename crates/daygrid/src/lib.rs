//! Application layer for the daygrid monthly calendar widget.
//!
//! Wires the core event store to a persistence adapter and exposes the
//! surface a renderer consumes: per-day event counts, the selected day's
//! event list, month navigation, keyword filtering, and month export.
//! Control flow per mutation: intent -> store -> adapter (save) -> re-render.

pub mod app;
pub mod config;
pub mod session;
pub mod storage;

pub use app::{AppError, CalendarApp, ExportFile};
pub use config::Config;
pub use session::{EventForm, ModalSession, ModalState};
pub use storage::{FileStore, MemoryStore};
