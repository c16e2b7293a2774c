//! Scenario tests pinning on-disk behavior for edge-case documents.

use std::fs;

use pretty_assertions::assert_eq;
use props_core::{ApplyOptions, Error, PropertySet, RemoveOptions, apply, remove};
use tempfile::TempDir;

fn options(marker: &str) -> ApplyOptions {
    ApplyOptions {
        marker: marker.to_string(),
        ..ApplyOptions::default()
    }
}

#[test]
fn test_reference_document_walkthrough() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.properties");
    fs::write(&path, "server.port=8080\ncustom.setting=value\n").unwrap();

    let desired = PropertySet::from_pairs([
        ("server.port", "9090"),
        ("app.name", "myapp"),
    ])
    .unwrap();

    let report = apply(&path, &desired, &ApplyOptions::default()).unwrap();
    assert!(report.changed);
    assert_eq!(report.properties_added, 2);
    assert_eq!(report.properties_commented, 1);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\
# server.port=8080  # commented by ansible
custom.setting=value

# BEGIN ANSIBLE MANAGED BLOCK - Application Properties
app.name=myapp
server.port=9090
# END ANSIBLE MANAGED BLOCK - Application Properties
"
    );

    let replay = apply(&path, &desired, &ApplyOptions::default()).unwrap();
    assert!(!replay.changed);
    assert_eq!(replay.properties_commented, 0);
}

#[test]
fn test_crlf_document_keeps_unrelated_line_endings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.properties");
    fs::write(&path, "server.port=8080\r\ncustom=1\r\n").unwrap();

    let desired = PropertySet::from_pairs([("server.port", "9090")]).unwrap();
    apply(&path, &desired, &options("MANAGED")).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# server.port=8080  # commented by ansible\r\ncustom=1\r\n\n# BEGIN MANAGED\nserver.port=9090\n# END MANAGED\n"
    );

    let replay = apply(&path, &desired, &options("MANAGED")).unwrap();
    assert!(!replay.changed);
}

#[test]
fn test_corrupt_sentinels_fail_without_touching_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.properties");
    let corrupt = "a=1\n# BEGIN MANAGED\nk=v\n";
    fs::write(&path, corrupt).unwrap();

    let desired = PropertySet::from_pairs([("k", "v2")]).unwrap();
    let err = apply(&path, &desired, &options("MANAGED")).unwrap_err();

    assert!(matches!(
        err,
        Error::Blocks(props_blocks::Error::CorruptBlock { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), corrupt);
    // No temp or backup artifacts either.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_two_markers_share_one_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.properties");

    let platform = PropertySet::from_pairs([("platform.region", "eu-west-1")]).unwrap();
    let app = PropertySet::from_pairs([("app.tier", "gold")]).unwrap();

    apply(&path, &platform, &options("PLATFORM BLOCK")).unwrap();
    apply(&path, &app, &options("APP BLOCK")).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\
# BEGIN PLATFORM BLOCK
platform.region=eu-west-1
# END PLATFORM BLOCK

# BEGIN APP BLOCK
app.tier=gold
# END APP BLOCK
"
    );

    // Replaying the most recent rollout is a no-op; the other tool's
    // block and key are untouched content for this marker.
    let replay = apply(&path, &app, &options("APP BLOCK")).unwrap();
    assert!(!replay.changed);

    // Replaying the earlier marker relocates its block to the end of
    // the file but leaves the other block's lines intact.
    let relocate = apply(&path, &platform, &options("PLATFORM BLOCK")).unwrap();
    assert!(relocate.changed);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\n# BEGIN APP BLOCK\napp.tier=gold\n# END APP BLOCK\n\n\
         # BEGIN PLATFORM BLOCK\nplatform.region=eu-west-1\n# END PLATFORM BLOCK\n"
    );

    // Removing one block keeps the other.
    remove(
        &path,
        &RemoveOptions {
            marker: "PLATFORM BLOCK".to_string(),
            ..RemoveOptions::default()
        },
    )
    .unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\n# BEGIN APP BLOCK\napp.tier=gold\n# END APP BLOCK\n"
    );
}

#[test]
fn test_report_json_contract() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.properties");
    fs::write(&path, "server.port=8080\n").unwrap();

    let desired = PropertySet::from_pairs([("server.port", "9090")]).unwrap();
    let mut opts = options("MANAGED");
    opts.diff = true;

    let report = apply(&path, &desired, &opts).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["changed"], serde_json::json!(true));
    assert_eq!(json["properties_added"], serde_json::json!(1));
    assert_eq!(json["properties_commented"], serde_json::json!(1));
    assert!(json["msg"].is_string());
    assert!(json["diff"].as_str().unwrap().contains("+server.port=9090"));
    // No backup requested, so the key is absent entirely.
    assert!(json.get("backup_file").is_none());
}
