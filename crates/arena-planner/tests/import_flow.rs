//! End-to-end import flows through real payload sources.

use std::fs;
use std::io::Cursor;

use arena_planner::compute_insights;
use arena_planner::core::commands::ArenaCommand;
use arena_planner::core::enums::CoverageHealth;
use arena_planner::core::payload::{ImportError, ValidationError};
use arena_planner::layout;
use arena_planner::source::{FileSource, ReaderSource};
use arena_planner::{ArenaStore, PlannerConfig};

#[test]
fn import_from_file() {
    let dir = std::env::temp_dir().join("arena_planner_import_from_file");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("payload.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&layout::sample_payload()).unwrap(),
    )
    .unwrap();

    let mut store = ArenaStore::new(PlannerConfig::default());
    store.import_from(&mut FileSource::new(&path)).unwrap();

    assert_eq!(store.state().config.width, 120.0);
    assert_eq!(store.state().len(), 4);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_source_unavailable() {
    let path = std::env::temp_dir().join("arena_planner_missing/does_not_exist.json");
    let mut store = ArenaStore::new(PlannerConfig::default());
    let before = store.snapshot();

    let err = store.import_from(&mut FileSource::new(path)).unwrap_err();
    assert!(matches!(err, ImportError::SourceUnavailable(_)), "got {err:?}");
    assert_eq!(store.snapshot(), before);
}

#[test]
fn import_from_reader() {
    let json = r#"{
        "arena": { "width": 60, "height": 40 },
        "coverageRadius": 8,
        "targets": [
            { "label": "North Gate", "x": 30, "y": 10, "threat": "Critical", "assignment": "Alpha" },
            { "label": "South Gate", "x": 30, "y": 30, "threat": "High", "assignment": "Bravo" }
        ],
        "comment": "extra fields are ignored"
    }"#;
    let mut store = ArenaStore::new(PlannerConfig::default());
    store
        .import_from(&mut ReaderSource::new("stdin", Cursor::new(json)))
        .unwrap();

    let insights = compute_insights(store.state());
    // 20 m apart, threshold 10.4: no overlap, everyone assigned.
    assert_eq!(insights.overlaps.count, 0);
    assert_eq!(insights.targets.critical, 1);
    assert_eq!(insights.coverage.health, CoverageHealth::Optimal);
}

#[test]
fn reader_with_zero_targets_is_rejected() {
    let json = r#"{ "arena": { "width": 60, "height": 40 }, "coverageRadius": 8, "targets": [] }"#;
    let mut store = ArenaStore::new(PlannerConfig::default());
    let before = store.snapshot();

    let err = store
        .import_from(&mut ReaderSource::new("stdin", Cursor::new(json)))
        .unwrap_err();
    assert!(matches!(
        err,
        ImportError::Validation(ValidationError::EmptyTargets)
    ));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn command_stream_from_json() {
    let commands = r#"[
        { "type": "Reset" },
        { "type": "SetConfig", "patch": { "coverage_radius": 40 } },
        { "type": "AddTarget", "position": [50.0, 50.0] }
    ]"#;
    let commands: Vec<ArenaCommand> = serde_json::from_str(commands).unwrap();

    let mut store = ArenaStore::new(PlannerConfig::default());
    for command in commands {
        store.apply(command).unwrap();
    }

    assert_eq!(store.state().len(), 5);
    assert_eq!(store.state().config.coverage_radius, 40.0);
    let insights = compute_insights(store.state());
    assert!(insights.overlaps.count > 0);
    assert_ne!(insights.coverage.health, CoverageHealth::Optimal);
}
