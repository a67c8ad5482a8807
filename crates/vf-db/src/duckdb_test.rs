use super::*;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> DataSource {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    DataSource::csv(path)
}

fn texts(row: &RawRow) -> Vec<&str> {
    row.cells().iter().map(Cell::as_str).collect()
}

#[tokio::test]
async fn test_in_memory() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert_eq!(db.source_type(), "duckdb");
}

#[tokio::test]
async fn test_read_csv_rows_in_order() {
    let dir = TempDir::new().unwrap();
    let source = write_csv(
        &dir,
        "parking.csv",
        "A101,KA01AB1234,Swift,KA01CD5678,City\nB202,MH12XY0001,Swift,MH12XY0002,Nexon\nC303,TN09ZZ4321,Alto,TN09ZZ9999,Zen\n",
    );

    let db = DuckDbBackend::in_memory().unwrap();
    let rows = db.read_rows(&source).await.unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(
        texts(&rows[0]),
        vec!["A101", "KA01AB1234", "Swift", "KA01CD5678", "City"]
    );
    assert_eq!(rows[1].get(0).as_str(), "B202");
    assert_eq!(rows[2].get(0).as_str(), "C303");
}

#[tokio::test]
async fn test_read_csv_keeps_numeric_cells_as_text() {
    let dir = TempDir::new().unwrap();
    let source = write_csv(&dir, "numeric.csv", "101,0042,Swift\n102,1234,City\n");

    let db = DuckDbBackend::in_memory().unwrap();
    let rows = db.read_rows(&source).await.unwrap();

    assert_eq!(texts(&rows[0]), vec!["101", "0042", "Swift"]);
}

#[tokio::test]
async fn test_read_csv_blank_cells_are_absent() {
    let dir = TempDir::new().unwrap();
    let source = write_csv(
        &dir,
        "ragged.csv",
        "A101,KA01AB1234,Swift,KA01CD5678,City\nB202,MH12XY0001,Swift,,\nC303,TN09ZZ4321,,,\n",
    );

    let db = DuckDbBackend::in_memory().unwrap();
    let rows = db.read_rows(&source).await.unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].get(3), &Cell::Absent);
    assert_eq!(rows[2].get(2), &Cell::Absent);
    assert_eq!(rows[2].get(1).as_str(), "TN09ZZ4321");
}

#[tokio::test]
async fn test_read_csv_short_rows_padded() {
    let dir = TempDir::new().unwrap();
    let source = write_csv(
        &dir,
        "short.csv",
        "A101,KA01AB1234,Swift,KA01CD5678,City\nB202,MH12XY0001,Swift,MH12XY0002,Nexon\nC303,TN09ZZ4321\n",
    );

    let db = DuckDbBackend::in_memory().unwrap();
    let rows = db.read_rows(&source).await.unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].get(1).as_str(), "TN09ZZ4321");
    assert_eq!(rows[2].get(2), &Cell::Absent);
    assert_eq!(rows[2].get(4), &Cell::Absent);
}

#[tokio::test]
async fn test_read_csv_skips_header_rows() {
    let dir = TempDir::new().unwrap();
    let source = write_csv(
        &dir,
        "with_header.csv",
        "Flat,Car 1,Model 1\nA101,KA01AB1234,Swift\nB202,MH12XY0001,City\n",
    )
    .with_header_rows(1);

    let db = DuckDbBackend::in_memory().unwrap();
    let rows = db.read_rows(&source).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get(0).as_str(), "A101");
}

#[tokio::test]
async fn test_read_csv_custom_delimiter() {
    let dir = TempDir::new().unwrap();
    let source = write_csv(
        &dir,
        "semicolon.csv",
        "A101;KA01AB1234;Swift\nB202;MH12XY0001;City\n",
    )
    .with_delimiter(';');

    let db = DuckDbBackend::in_memory().unwrap();
    let rows = db.read_rows(&source).await.unwrap();

    assert_eq!(texts(&rows[1]), vec!["B202", "MH12XY0001", "City"]);
}

#[tokio::test]
async fn test_read_empty_file() {
    let dir = TempDir::new().unwrap();
    let source = write_csv(&dir, "empty.csv", "");

    let db = DuckDbBackend::in_memory().unwrap();
    let rows = db.read_rows(&source).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_read_missing_file() {
    let dir = TempDir::new().unwrap();
    let source = DataSource::csv(dir.path().join("nope.csv"));

    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.read_rows(&source).await.unwrap_err();
    assert!(matches!(err, DbError::FileNotFound(_)));
    assert!(err.to_string().contains("[D002]"));
}

#[tokio::test]
async fn test_read_directory_is_not_a_file() {
    let dir = TempDir::new().unwrap();
    let source = DataSource::csv(dir.path());

    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.read_rows(&source).await.unwrap_err();
    assert!(matches!(err, DbError::FileNotFound(_)));
}

#[tokio::test]
async fn test_rows_feed_relation_builder() {
    let dir = TempDir::new().unwrap();
    let source = write_csv(
        &dir,
        "parking.csv",
        "A101,KA01AB1234,Swift,KA01CD5678,\nB202,MH12XY1234,Swift,,\n",
    );

    let db = DuckDbBackend::in_memory().unwrap();
    let rows = db.read_rows(&source).await.unwrap();
    let relation = vf_core::Relation::build(&rows);

    assert_eq!(relation.len(), 2);
    assert_eq!(relation.vehicle_count(), 3);
    assert_eq!(relation.records()[0].cars[1].model, "");
    assert_eq!(vf_core::search(&relation, "swift").len(), 1);
}

#[test]
fn test_csv_scan_sql() {
    let sql = csv_scan_sql(&DataSource::csv("/tmp/o'neil.csv"));
    assert_eq!(
        sql,
        "SELECT * FROM read_csv('/tmp/o''neil.csv', header = false, all_varchar = true, null_padding = true)"
    );

    let sql = csv_scan_sql(&DataSource::csv("/tmp/a.csv").with_delimiter('|'));
    assert!(sql.ends_with("delim = '|')"));
}

#[test]
fn test_xlsx_scan_sql() {
    let mut source = DataSource::xlsx("/tmp/ParkingOC.xlsx");
    assert_eq!(
        xlsx_scan_sql(&source),
        "SELECT * FROM read_xlsx('/tmp/ParkingOC.xlsx', header = false, all_varchar = true, stop_at_empty = false)"
    );

    source.sheet = Some("Tower A".to_string());
    assert!(xlsx_scan_sql(&source).ends_with("sheet = 'Tower A')"));
}

#[tokio::test]
#[ignore = "needs the DuckDB excel extension"]
async fn test_read_xlsx_keeps_rows_after_blank_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("parking.xlsx");
    let writer = Connection::open_in_memory().unwrap();
    writer
        .execute_batch(&format!(
            "INSTALL excel; LOAD excel; \
             COPY (SELECT * FROM (VALUES ('A101', 'KA01AB1234'), (NULL, NULL), ('B202', 'MH12XY0001')) t(flat, number)) \
             TO {} (FORMAT xlsx, HEADER false)",
            sql_literal(&path.display().to_string())
        ))
        .unwrap();

    let db = DuckDbBackend::in_memory().unwrap();
    let rows = db.read_rows(&DataSource::xlsx(path.clone())).await.unwrap();
    let flats: Vec<&str> = rows.iter().map(|r| r.get(0).as_str()).collect();
    assert!(flats.contains(&"A101"));
    assert!(flats.contains(&"B202"));
}
