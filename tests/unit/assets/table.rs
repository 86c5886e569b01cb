use std::path::PathBuf;

use super::*;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_table");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn well_formed_table_keeps_order() {
    let path = scratch_file(
        "ok.json",
        r#"{"columns":["Name","Score"],"data":[["a","1"],["b","2"],["c","3"]]}"#,
    );
    let table = load_table(&path);
    assert_eq!(table.columns, vec!["Name", "Score"]);
    assert_eq!(table.data.len(), 3);
    assert_eq!(table.data[0], vec!["a", "1"]);
    assert_eq!(table.data[2], vec!["c", "3"]);
}

#[test]
fn missing_file_yields_empty_table() {
    let path = PathBuf::from("target/unit_table/does_not_exist.json");
    let _ = std::fs::remove_file(&path);
    let table = load_table(&path);
    assert_eq!(table, TableData::default());
    assert!(table.columns.is_empty());
    assert!(table.data.is_empty());

    assert!(matches!(
        try_load_table(&path),
        Err(TableLoadError::NotFound { .. })
    ));
}

#[test]
fn malformed_json_yields_empty_table() {
    let path = scratch_file("bad.json", "{\"columns\": [");
    assert!(load_table(&path).is_empty());
    assert!(matches!(
        try_load_table(&path),
        Err(TableLoadError::Parse { .. })
    ));
}

#[test]
fn wrong_shape_counts_as_malformed() {
    let path = scratch_file("shape.json", r#"{"columns": "A,B"}"#);
    assert!(load_table(&path).is_empty());
}

#[test]
fn missing_keys_default_to_empty() {
    let table = TableData::from_json_str(r#"{"columns":["A"]}"#).unwrap();
    assert_eq!(table.columns, vec!["A"]);
    assert!(table.data.is_empty());

    let table = TableData::from_json_str("{}").unwrap();
    assert!(table.is_empty());
}

#[test]
fn loader_and_string_parser_agree() {
    let json = r#"{"data":[["only","data"]]}"#;
    let path = scratch_file("data_only.json", json);
    let loaded = try_load_table(&path).unwrap();
    assert_eq!(loaded, TableData::from_json_str(json).unwrap());
    assert!(loaded.columns.is_empty());
    assert_eq!(loaded.data, vec![vec!["only", "data"]]);
}

#[test]
fn directory_path_is_read_error() {
    let dir = PathBuf::from("target").join("unit_table").join("as_dir.json");
    std::fs::create_dir_all(&dir).unwrap();
    assert!(load_table(&dir).is_empty());
    assert!(try_load_table(&dir).is_err());
}

#[test]
fn error_messages_name_the_path() {
    let err = try_load_table(std::path::Path::new("target/unit_table/nope.json")).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}
