//! Core domain logic for daygrid, a monthly calendar widget.
//!
//! This crate holds the pure, I/O-free parts of the widget: the event data
//! model, the day-keyed event store with its overlap rule, keyword filtering,
//! month arithmetic, JSON/CSV export, and the persistence-adapter seam.
//! Everything that touches the environment (files, configuration, logging)
//! lives in the `daygrid` application crate.

pub mod calendar;
pub mod export;
pub mod serde;
pub mod storage;
