#![allow(clippy::expect_used)]

use std::borrow::Cow;
use std::io::Write;

use healthwatch::application::config::{AppConfig, HistoryConfig};
use healthwatch::domain::ports::history::HistoryError;
use healthwatch::domain::services::history_filter::{
    count_by_tag, empty_state_message, filter_history, EMPTY_STATE_MESSAGE,
};
use healthwatch::domain::value_objects::severity::Severity;
use healthwatch::domain::value_objects::severity_tag::{SeverityTag, ALL_TAGS};
use healthwatch::infrastructure::history::create_history_source;

fn write_history(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(json.as_bytes()).expect("write");
    file
}

#[test]
fn default_config_uses_builtin_history() {
    let config = AppConfig::default();
    let items = create_history_source(&config.history).load().expect("load");

    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    assert!(items.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[test]
fn all_filter_is_identity() {
    let items = create_history_source(&HistoryConfig::default())
        .load()
        .expect("load");

    let visible = filter_history(&items, SeverityTag::All);
    assert!(matches!(visible, Cow::Borrowed(_)));
    assert_eq!(&*visible, items.as_slice());
}

#[test]
fn high_filter_keeps_order() {
    let items = create_history_source(&HistoryConfig::default())
        .load()
        .expect("load");

    let visible = filter_history(&items, SeverityTag::High);
    let errors: Vec<&str> = visible.iter().map(|i| i.error.as_str()).collect();
    assert_eq!(errors, ["Database connection failed", "Memory leak detected"]);
}

#[test]
fn every_tag_partitions_the_builtin_list() {
    let items = create_history_source(&HistoryConfig::default())
        .load()
        .expect("load");

    let specific: usize = ALL_TAGS
        .iter()
        .filter(|tag| **tag != SeverityTag::All)
        .map(|tag| filter_history(&items, *tag).len())
        .sum();
    assert_eq!(specific, items.len());

    let counts = count_by_tag(&items);
    assert_eq!(counts[0], (SeverityTag::All, 5));
    assert_eq!(counts[2], (SeverityTag::High, 2));
}

#[test]
fn json_history_file_is_loaded_and_filtered() {
    let file = write_history(
        r#"[
            {"id":"a1","timestamp":"2024-12-10T10:00:00Z","severity":"CRITICAL","error":"Disk full","status":"Open"},
            {"id":"a2","timestamp":"2024-12-10T09:00:00Z","severity":"high","error":"Lower-case tag","status":"Open"},
            {"id":"a3","timestamp":"2024-12-10T08:00:00Z","severity":"LOW","error":"Slow page","status":"Fixed"}
        ]"#,
    );
    let config = HistoryConfig {
        path: Some(file.path().display().to_string()),
    };
    let items = create_history_source(&config).load().expect("load");
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].severity, Severity::Unknown("high".into()));

    // Matching is exact: a lower-case "high" is not HIGH.
    assert!(filter_history(&items, SeverityTag::High).is_empty());
    assert_eq!(filter_history(&items, SeverityTag::Critical)[0].id, "a1");
    assert_eq!(filter_history(&items, SeverityTag::All).len(), 3);
}

#[test]
fn empty_result_has_explicit_message() {
    let file = write_history(
        r#"[{"id":"x","timestamp":"2024-12-10T10:00:00Z","severity":"LOW","error":"e","status":"s"}]"#,
    );
    let config = HistoryConfig {
        path: Some(file.path().display().to_string()),
    };
    let items = create_history_source(&config).load().expect("load");

    assert!(filter_history(&items, SeverityTag::Medium).is_empty());
    assert!(empty_state_message(SeverityTag::Medium).starts_with(EMPTY_STATE_MESSAGE));
}

#[test]
fn missing_history_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = HistoryConfig {
        path: Some(dir.path().join("absent.json").display().to_string()),
    };
    let err = create_history_source(&config).load().expect_err("should fail");
    assert!(matches!(err, HistoryError::Io { .. }));
}

#[test]
fn malformed_history_file_is_a_parse_error() {
    let file = write_history("[{\"id\":");
    let config = HistoryConfig {
        path: Some(file.path().display().to_string()),
    };
    let err = create_history_source(&config).load().expect_err("should fail");
    assert!(matches!(err, HistoryError::Parse(_)));
}
