//! End-to-end widget flow against a file-backed store.

use std::sync::Arc;

use chrono::NaiveTime;
use tempfile::TempDir;

use daygrid::app::AppError;
use daygrid::{CalendarApp, Config, FileStore, MemoryStore, ModalState};
use daygrid_core::calendar::{CreateEventRequest, EventStore, MonthRef, UpdateEventRequest};
use daygrid_core::export::ExportFormat;
use daygrid_core::storage::{PersistenceAdapter, EVENTS_KEY};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("daygrid=debug")
        .with_test_writer()
        .try_init();
}

fn make_time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

fn test_config(dir: &TempDir) -> Config {
    Config {
        store_path: dir
            .path()
            .join("daygrid_events.json")
            .to_string_lossy()
            .into_owned(),
        store_key: EVENTS_KEY.to_string(),
    }
}

#[test]
fn full_month_flow_with_file_store() {
    init_tracing();

    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let adapter = Arc::new(FileStore::new(&config.store_path));
    let month = MonthRef::new(2025, 8).unwrap();

    let mut app = CalendarApp::open_at(adapter.clone(), &config, month);
    assert!(app.store().is_empty());

    // Add Standup on day 5.
    app.day_click(5);
    app.submit_create(
        CreateEventRequest::new(5, "Standup", make_time(9, 0), make_time(9, 15))
            .with_description("Daily sync"),
    )
    .unwrap();
    assert_eq!(app.session().state(), ModalState::Idle);

    let blob = adapter.get(EVENTS_KEY).unwrap().unwrap();
    assert_eq!(EventStore::load(Some(&blob)).day_count(5), 1);

    // Overlapping Sync is rejected; day 5 still has one event.
    app.day_click(5);
    let rejected = app.submit_create(CreateEventRequest::new(
        5,
        "Sync",
        make_time(9, 10),
        make_time(9, 30),
    ));
    assert!(matches!(rejected, Err(AppError::Overlap(_))));
    assert_eq!(app.store().day_count(5), 1);
    assert_eq!(app.session().state(), ModalState::DaySelected { day: 5 });

    // The rejection did not touch the persisted state.
    let blob = adapter.get(EVENTS_KEY).unwrap().unwrap();
    assert_eq!(EventStore::load(Some(&blob)).day_count(5), 1);

    // Edit Standup's end time to 09:20.
    app.edit_click(5, 0).unwrap();
    app.submit_update(5, 0, UpdateEventRequest::new().with_end_time(make_time(9, 20)))
        .unwrap();
    let events = app.events_for_day(5);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].end_time, make_time(9, 20));

    // Delete it; day 5 disappears from the mapping.
    app.delete_event(5, 0).unwrap();
    assert!(!app.store().contains_day(5));

    let blob = adapter.get(EVENTS_KEY).unwrap().unwrap();
    assert!(EventStore::load(Some(&blob)).is_empty());
}

#[test]
fn events_survive_reopening_the_widget() {
    init_tracing();

    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let month = MonthRef::new(2025, 8).unwrap();

    {
        let adapter = Arc::new(FileStore::new(&config.store_path));
        let mut app = CalendarApp::open_at(adapter, &config, month);
        app.submit_create(CreateEventRequest::new(
            3,
            "Dentist",
            make_time(11, 0),
            make_time(12, 0),
        ))
        .unwrap();
        app.submit_create(CreateEventRequest::new(
            17,
            "Team Meeting",
            make_time(9, 0),
            make_time(10, 0),
        ))
        .unwrap();
    }

    let adapter = Arc::new(FileStore::new(&config.store_path));
    let app = CalendarApp::open_at(adapter, &config, month);

    assert_eq!(app.store().len(), 2);
    assert_eq!(app.events_for_day(3)[0].name, "Dentist");
    assert_eq!(app.events_for_day(17)[0].name, "Team Meeting");
}

#[test]
fn csv_export_covers_every_event_of_the_month() {
    init_tracing();

    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    let adapter = Arc::new(FileStore::new(&config.store_path));
    let month = MonthRef::new(2025, 8).unwrap();
    let mut app = CalendarApp::open_at(adapter, &config, month);

    app.submit_create(CreateEventRequest::new(
        3,
        "Standup",
        make_time(9, 0),
        make_time(9, 15),
    ))
    .unwrap();
    app.submit_create(CreateEventRequest::new(
        3,
        "Review",
        make_time(15, 0),
        make_time(16, 0),
    ))
    .unwrap();
    app.submit_create(CreateEventRequest::new(
        17,
        "Dentist",
        make_time(11, 0),
        make_time(12, 0),
    ))
    .unwrap();

    let export = app.export(ExportFormat::Csv).unwrap();
    assert_eq!(export.name, "events-2025-8.csv");

    let text = String::from_utf8(export.bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    // Data rows carry day, zero-based month, year.
    assert!(lines[1].starts_with("3,7,2025,Standup"));
    assert!(lines[2].starts_with("3,7,2025,Review"));
    assert!(lines[3].starts_with("17,7,2025,Dentist"));
}

#[test]
fn filter_narrows_without_mutating_the_store() {
    init_tracing();

    let adapter = Arc::new(MemoryStore::new());
    let config = Config {
        store_path: "unused".to_string(),
        store_key: EVENTS_KEY.to_string(),
    };
    let month = MonthRef::new(2025, 8).unwrap();
    let mut app = CalendarApp::open_at(adapter, &config, month);

    app.submit_create(CreateEventRequest::new(
        5,
        "Team Meeting",
        make_time(9, 0),
        make_time(10, 0),
    ))
    .unwrap();
    app.submit_create(CreateEventRequest::new(
        5,
        "Lunch",
        make_time(12, 0),
        make_time(13, 0),
    ))
    .unwrap();

    app.set_filter("meet");
    let filtered = app.filtered_events();
    assert_eq!(filtered.get(&5).unwrap().len(), 1);
    assert_eq!(filtered.get(&5).unwrap()[0].name, "Team Meeting");

    // The store itself is untouched.
    assert_eq!(app.store().day_count(5), 2);
}
