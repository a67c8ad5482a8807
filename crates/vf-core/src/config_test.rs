use super::*;
use tempfile::TempDir;

#[test]
fn test_parse_minimal_config() {
    let config: Config = serde_yaml::from_str("name: oc_parking").unwrap();
    assert_eq!(config.name, "oc_parking");
    assert_eq!(config.data.path, "data/parking.csv");
    assert_eq!(config.data.header_rows, 0);
    assert_eq!(config.data_format(), SourceFormat::Csv);
    assert_eq!(config.search.partial_match_length, 4);

    let root = PathBuf::from("/tmp/project");
    assert_eq!(
        config.data_path_absolute(&root),
        root.join("data/parking.csv")
    );
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
name: oc_parking
data:
  path: sheets/ParkingOC.xlsx
  sheet: Tower A
  header_rows: 1
search:
  partial_match_length: 6
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    config.validate().unwrap();
    assert_eq!(config.data_format(), SourceFormat::Xlsx);
    assert_eq!(config.data.sheet.as_deref(), Some("Tower A"));
    assert_eq!(config.data.header_rows, 1);
    assert_eq!(config.search_options().partial_match_length, 6);
}

#[test]
fn test_explicit_format_overrides_extension() {
    let yaml = r#"
name: p
data:
  path: export.txt
  format: csv
  delimiter: ";"
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    config.validate().unwrap();
    assert_eq!(config.data_format(), SourceFormat::Csv);
    assert_eq!(config.data.delimiter, Some(';'));
}

#[test]
fn test_unknown_field_rejected() {
    let result: Result<Config, _> = serde_yaml::from_str("name: p\nsheet_name: x");
    assert!(result.is_err());
}

#[test]
fn test_validate_empty_name() {
    let config: Config = serde_yaml::from_str("name: ''").unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("[E003]"));
}

#[test]
fn test_validate_sheet_on_csv() {
    let yaml = "name: p\ndata:\n  path: cars.csv\n  sheet: Sheet1\n";
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert!(matches!(
        config.validate(),
        Err(CoreError::ConfigInvalid { .. })
    ));
}

#[test]
fn test_validate_delimiter_on_xlsx() {
    let yaml = "name: p\ndata:\n  path: cars.xlsx\n  delimiter: ','\n";
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert!(matches!(
        config.validate(),
        Err(CoreError::ConfigInvalid { .. })
    ));
}

#[test]
fn test_source_format_from_path() {
    assert_eq!(SourceFormat::from_path(Path::new("a.XLSX")), SourceFormat::Xlsx);
    assert_eq!(SourceFormat::from_path(Path::new("a.xlsm")), SourceFormat::Xlsx);
    assert_eq!(SourceFormat::from_path(Path::new("a.csv")), SourceFormat::Csv);
    assert_eq!(SourceFormat::from_path(Path::new("noext")), SourceFormat::Csv);
}

#[test]
fn test_absolute_data_path_kept() {
    let mut config = Config::default();
    config.data.path = "/srv/parking.csv".to_string();
    assert_eq!(
        config.data_path_absolute(Path::new("/tmp/project")),
        PathBuf::from("/srv/parking.csv")
    );
}

#[test]
fn test_load_from_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("vehicle-finder.yml"),
        "name: tower_b\ndata:\n  header_rows: 1\n",
    )
    .unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "tower_b");
    assert_eq!(config.data.header_rows, 1);
}

#[test]
fn test_load_from_dir_yaml_extension() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("vehicle-finder.yaml"), "name: tower_c").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "tower_c");
}

#[test]
fn test_load_from_dir_missing() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vehicle-finder.yml");
    std::fs::write(&path, "name: [unterminated").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}

#[test]
fn test_default_config_is_valid() {
    Config::default().validate().unwrap();
}
