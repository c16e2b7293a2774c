//! End-to-end integration test for the reconcile pipeline
//!
//! Exercises the complete flow: read current content -> reconcile ->
//! atomic write -> verify on disk, across a sequence of configuration
//! rollouts against one file.

use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use props_core::{ApplyOptions, PropertySet, RemoveOptions, apply_with_writer, remove_with_writer};
use props_fs::{AtomicWriter, FixedClock};
use tempfile::TempDir;

const INITIAL_CONTENT: &str = "\
# HTTP server settings
server.port=8080
server.host=localhost

# Feature flags
feature.alpha=true
";

fn setup() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app.properties");
    fs::write(&path, INITIAL_CONTENT).unwrap();
    (temp, path)
}

fn pinned_writer() -> AtomicWriter {
    AtomicWriter::new().with_clock(FixedClock(
        Utc.with_ymd_and_hms(2025, 9, 15, 12, 34, 56).unwrap(),
    ))
}

fn backup_count(dir: &TempDir) -> usize {
    fs::read_dir(dir.path())
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .file_name()
                .to_string_lossy()
                .starts_with("app.properties.")
        })
        .count()
}

#[test]
fn test_configuration_rollout_lifecycle() {
    let (dir, path) = setup();
    let writer = pinned_writer();
    let options = ApplyOptions {
        backup: true,
        ..ApplyOptions::default()
    };

    // Rollout 1: override the port, add a management endpoint.
    let desired = PropertySet::from_pairs([
        ("server.port", "9090"),
        ("management.endpoint", "/actuator"),
    ])
    .unwrap();
    let report = apply_with_writer(&path, &desired, &options, &writer).unwrap();

    assert!(report.changed);
    assert_eq!(report.properties_added, 2);
    assert_eq!(report.properties_commented, 1);

    let after_first = "\
# HTTP server settings
# server.port=8080  # commented by ansible
server.host=localhost

# Feature flags
feature.alpha=true

# BEGIN ANSIBLE MANAGED BLOCK - Application Properties
management.endpoint=/actuator
server.port=9090
# END ANSIBLE MANAGED BLOCK - Application Properties
";
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);

    let backup = report.backup_file.unwrap();
    assert_eq!(backup, dir.path().join("app.properties.20250915_123456"));
    assert_eq!(fs::read_to_string(&backup).unwrap(), INITIAL_CONTENT);

    // Replaying the same rollout is a no-op and takes no new backup.
    let replay = apply_with_writer(&path, &desired, &options, &writer).unwrap();
    assert!(!replay.changed);
    assert_eq!(replay.backup_file, None);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    assert_eq!(backup_count(&dir), 1);

    // Rollout 2: change a value and take over a key that is still an
    // active assignment outside the block.
    let desired = PropertySet::from_pairs([
        ("server.port", "9443"),
        ("management.endpoint", "/actuator"),
        ("feature.alpha", "false"),
    ])
    .unwrap();
    let report = apply_with_writer(&path, &desired, &options, &writer).unwrap();

    assert!(report.changed);
    assert_eq!(report.properties_added, 3);
    assert_eq!(report.properties_commented, 1);

    let after_second = "\
# HTTP server settings
# server.port=8080  # commented by ansible
server.host=localhost

# Feature flags
# feature.alpha=true  # commented by ansible

# BEGIN ANSIBLE MANAGED BLOCK - Application Properties
feature.alpha=false
management.endpoint=/actuator
server.port=9443
# END ANSIBLE MANAGED BLOCK - Application Properties
";
    assert_eq!(fs::read_to_string(&path).unwrap(), after_second);

    // Same pinned clock, so the second backup gets the collision
    // suffix; its content is the pre-rollout state.
    let backup = report.backup_file.unwrap();
    assert_eq!(
        backup,
        dir.path().join("app.properties.20250915_123456_1")
    );
    assert_eq!(fs::read_to_string(&backup).unwrap(), after_first);
    assert_eq!(backup_count(&dir), 2);

    // Teardown: removing the block keeps the audit trail.
    let report = remove_with_writer(
        &path,
        &RemoveOptions::default(),
        &writer,
    )
    .unwrap();
    assert!(report.changed);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\
# HTTP server settings
# server.port=8080  # commented by ansible
server.host=localhost

# Feature flags
# feature.alpha=true  # commented by ansible
"
    );
}

#[test]
fn test_rollout_onto_missing_file_then_steady_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.properties");
    let writer = pinned_writer();
    let options = ApplyOptions::default();

    let desired = PropertySet::from_pairs([("server.port", "9090")]).unwrap();

    let first = apply_with_writer(&path, &desired, &options, &writer).unwrap();
    assert!(first.changed);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\
# BEGIN ANSIBLE MANAGED BLOCK - Application Properties
server.port=9090
# END ANSIBLE MANAGED BLOCK - Application Properties
"
    );

    for _ in 0..3 {
        let replay = apply_with_writer(&path, &desired, &options, &writer).unwrap();
        assert!(!replay.changed);
    }
}
