use cloudcfg::{access_log, Configuration, Error};
use std::fs;

const BILLING: &str =
    r#"{"app_name":"billing","environment":"prod","resources":{"db":{},"cache":{}}}"#;

fn is_timestamp(s: &str) -> bool {
    chrono::NaiveDateTime::parse_from_str(s, access_log::TIMESTAMP_FORMAT).is_ok()
}

#[test]
fn append_creates_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config_access.log");
    let config: Configuration = BILLING.parse().unwrap();
    let deployment = config.validate().unwrap();

    let line = access_log::append(&path, &deployment).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, line);

    let line = line.strip_suffix('\n').unwrap();
    assert!(line.ends_with("] Accessed configuration for billing"), "{}", line);
    assert!(line.starts_with('['));
    assert!(is_timestamp(&line[1..20]), "{}", line);
}

#[test]
fn append_keeps_existing_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, "[2020-01-01 00:00:00] Accessed configuration for old\n").unwrap();

    let config: Configuration = BILLING.parse().unwrap();
    let deployment = config.validate().unwrap();
    access_log::append(&path, &deployment).unwrap();
    access_log::append(&path, &deployment).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("for old"));
    assert!(lines[1].ends_with("for billing"));
    assert!(lines[2].ends_with("for billing"));
}

#[test]
fn unwritable_log_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened for appending
    let path = dir.path().to_path_buf();
    let config: Configuration = BILLING.parse().unwrap();
    let deployment = config.validate().unwrap();

    match access_log::append(&path, &deployment) {
        Err(Error::AccessLog { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected AccessLog error, got {:?}", other),
    }
}
