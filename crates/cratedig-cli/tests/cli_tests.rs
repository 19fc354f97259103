//! Integration tests for the extract command

use cratedig_cli::{execute_extract, CliError, Config, Destination};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const COLLECTION: &str = "\
Catalog#,Artist,Title,Label,Format,Rating,Released,release_id,CollectionFolder,Date Added,Media,Sleeve,Notes
BLP 1577,John Coltrane,Blue Train,Blue Note,LP,,1957,100,Jazz,2020-01-01,VG+,VG,[mono]
??,Unknown,Broken row,,LP,,,n/a,Jazz,2020-01-01,,,
";

const RELEASES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<releases>
  <release id="99"><title>Someone else's</title></release>
  <release id="100">
    <title>Blue Train</title>
    <labels><label name="Blue Note" catno="BLP 1577"/></labels>
    <released>1957-09-15</released>
  </release>
</releases>
"#;

fn setup(dir: &Path, collection: &str, releases: &str) -> Config {
    let collection_path = dir.join("collection.csv");
    let releases_path = dir.join("releases.xml");
    fs::write(&collection_path, collection).unwrap();
    fs::write(&releases_path, releases).unwrap();

    let mut config = Config::default();
    config.paths.collection = collection_path;
    config.paths.releases = releases_path;
    config.paths.output = dir.join("collection.json");
    config
}

fn output_file(config: &Config) -> Destination {
    Destination::File(config.paths.output.clone())
}

#[test]
fn test_extract_writes_document() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), COLLECTION, RELEASES);

    let summary = execute_extract(&config, &output_file(&config), false).unwrap();
    assert_eq!(summary.records_scanned, 2);
    assert_eq!(summary.entries_emitted, 1);
    assert!(summary.all_found());

    let written = fs::read_to_string(&config.paths.output).unwrap();
    let document: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        document,
        serde_json::json!({
            "releases": [{
                "id": 100,
                "title": "Blue Train",
                "label": "Blue Note",
                "catno": "BLP 1577",
                "year": "1957",
                "folder": "Jazz",
                "copynote": "mono"
            }]
        })
    );
}

#[test]
fn test_missing_collection_file() {
    let dir = TempDir::new().unwrap();
    let mut config = setup(dir.path(), COLLECTION, RELEASES);
    config.paths.collection = dir.path().join("nope.csv");

    let err = execute_extract(&config, &output_file(&config), false).unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(!config.paths.output.exists());
}

#[test]
fn test_missing_releases_file() {
    let dir = TempDir::new().unwrap();
    let mut config = setup(dir.path(), COLLECTION, RELEASES);
    config.paths.releases = dir.path().join("nope.xml");

    let err = execute_extract(&config, &output_file(&config), false).unwrap_err();
    assert!(matches!(err, CliError::Extract(ref e) if e.is_resource()));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_failed_extraction_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let releases = r#"<releases><release id="100"><title>T</oops></release></releases>"#;
    let config = setup(dir.path(), COLLECTION, releases);

    let err = execute_extract(&config, &output_file(&config), false).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("Error parsing release 100"));
    assert!(!config.paths.output.exists());
}

#[test]
fn test_wrong_root_element() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), COLLECTION, "<labels/>");

    let err = execute_extract(&config, &output_file(&config), false).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(!config.paths.output.exists());
}

#[test]
fn test_compact_output() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path(), COLLECTION, RELEASES);

    execute_extract(&config, &output_file(&config), true).unwrap();

    let written = fs::read_to_string(&config.paths.output).unwrap();
    assert_eq!(written.lines().count(), 1);
}

#[test]
fn test_missing_releases_are_summarized() {
    let dir = TempDir::new().unwrap();
    let collection = format!("{}CL 1,X,Y,Z,LP,,1959,555,Jazz,2020-01-01,,,\n", COLLECTION);
    let config = setup(dir.path(), &collection, RELEASES);

    let summary = execute_extract(&config, &output_file(&config), false).unwrap();
    assert!(!summary.all_found());
    assert_eq!(summary.missing_list(), "555");
}
