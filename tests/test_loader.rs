//! Unit tests for the catalog loader

use animepack::pipeline::{load_records, PipelineError};
use std::io::Write;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_load_basic_catalog() {
    let (_dir, path) = common::write_catalog_csv(&[
        "Cowboy Bebop,\"Action, Sci-Fi\",8.75,26,1800000",
        "One Piece,\"Action, Adventure\",8.69,0,2100000",
    ]);

    let loaded = load_records(&path).unwrap();

    assert_eq!(loaded.records.len(), 2);
    assert_eq!(loaded.skipped, 0);
    assert_eq!(loaded.records[0].name.as_deref(), Some("Cowboy Bebop"));
    assert_eq!(loaded.records[0].genres.as_deref(), Some("Action, Sci-Fi"));
    assert_eq!(loaded.records[0].score.as_deref(), Some("8.75"));
    assert_eq!(loaded.records[1].episodes.as_deref(), Some("0"));
}

#[test]
fn test_nonexistent_file_is_source_not_found() {
    let path = std::path::Path::new("/nonexistent/path/to/catalog.csv");

    let err = load_records(path).unwrap_err();

    assert!(
        matches!(err, PipelineError::SourceNotFound { .. }),
        "expected SourceNotFound, got: {err:?}"
    );
}

#[test]
fn test_missing_required_column_is_schema_error() {
    // No 'score' column
    let (_dir, path) = common::write_csv("name,genres,episodes", &["A,Action,12"]);

    let err = load_records(&path).unwrap_err();

    match err {
        PipelineError::SchemaError { column } => assert_eq!(column, "score"),
        other => panic!("expected SchemaError, got: {other:?}"),
    }
}

#[test]
fn test_missing_name_column_is_schema_error() {
    let (_dir, path) = common::write_csv("title,genres,score", &["A,Action,9.0"]);

    let err = load_records(&path).unwrap_err();

    match err {
        PipelineError::SchemaError { column } => assert_eq!(column, "name"),
        other => panic!("expected SchemaError, got: {other:?}"),
    }
}

#[test]
fn test_optional_columns_may_be_absent() {
    let (_dir, path) = common::write_csv("name,genres,score", &["A,Action,9.0"]);

    let loaded = load_records(&path).unwrap();

    assert_eq!(loaded.records.len(), 1);
    assert!(loaded.records[0].episodes.is_none());
    assert!(loaded.records[0].members.is_none());
}

#[test]
fn test_extra_columns_are_ignored() {
    let (_dir, path) = common::write_csv(
        "anime_id,name,genres,score,episodes,members,rank",
        &["1,A,Action,9.0,12,5000,42"],
    );

    let loaded = load_records(&path).unwrap();

    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].name.as_deref(), Some("A"));
    assert_eq!(loaded.records[0].episodes.as_deref(), Some("12"));
}

#[test]
fn test_unreadable_record_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"name,genres,score\n").unwrap();
    // Invalid UTF-8 in the name field
    file.write_all(b"\xff\xfe,Action,9.0\n").unwrap();
    file.write_all(b"B,Comedy,8.0\n").unwrap();
    drop(file);

    let loaded = load_records(&path).unwrap();

    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.skipped, 1);
    assert_eq!(loaded.records[0].name.as_deref(), Some("B"));
}

#[test]
fn test_short_records_load_with_missing_fields() {
    let (_dir, path) = common::write_catalog_csv(&["A,Action,9.0"]);

    let loaded = load_records(&path).unwrap();

    assert_eq!(loaded.records.len(), 1);
    assert!(loaded.records[0].episodes.is_none());
}
