//! DuckDB row source implementation
//!
//! Sheets are scanned with DuckDB's `read_csv` and `read_xlsx` table
//! functions. Every column is read as text so cell values reach the relation
//! builder exactly as written; NULLs and empty strings become absent cells.

use crate::error::{DbError, DbResult};
use crate::source::DataSource;
use crate::traits::RowSource;
use async_trait::async_trait;
use duckdb::Connection;
use std::sync::{Mutex, MutexGuard};
use vf_core::{Cell, RawRow, SourceFormat};

/// DuckDB-backed row source
pub struct DuckDbBackend {
    conn: Mutex<Connection>,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }

    /// Read rows synchronously
    fn read_rows_sync(&self, source: &DataSource) -> DbResult<Vec<RawRow>> {
        let path = source.display_path();
        let metadata =
            std::fs::metadata(&source.path).map_err(|_| DbError::FileNotFound(path.clone()))?;
        if !metadata.is_file() {
            return Err(DbError::FileNotFound(path));
        }
        if metadata.len() == 0 {
            log::debug!("Data file {} is empty", path);
            return Ok(Vec::new());
        }

        let conn = self.lock()?;
        let sql = match source.format {
            SourceFormat::Csv => csv_scan_sql(source),
            SourceFormat::Xlsx => {
                load_extension(&conn, "excel")?;
                xlsx_scan_sql(source)
            }
        };

        let read_err = |e: duckdb::Error| DbError::ReadError {
            path: path.clone(),
            message: e.to_string(),
        };

        let mut stmt = conn.prepare(&sql).map_err(read_err)?;
        let rows = stmt
            .query_map([], |row| {
                let width = row.as_ref().column_count();
                (0..width)
                    .map(|idx| row.get::<_, Option<String>>(idx).map(Cell::from))
                    .collect::<Result<Vec<Cell>, _>>()
            })
            .map_err(read_err)?
            .collect::<Result<Vec<Vec<Cell>>, _>>()
            .map_err(read_err)?;

        let total = rows.len();
        let data: Vec<RawRow> = rows
            .into_iter()
            .skip(source.header_rows)
            .map(RawRow::new)
            .collect();

        log::debug!(
            "Read {} rows from {} ({} header rows skipped)",
            data.len(),
            path,
            total - data.len()
        );
        Ok(data)
    }
}

#[async_trait]
impl RowSource for DuckDbBackend {
    async fn read_rows(&self, source: &DataSource) -> DbResult<Vec<RawRow>> {
        self.read_rows_sync(source)
    }

    fn source_type(&self) -> &'static str {
        "duckdb"
    }
}

/// Install (if needed) and load a DuckDB extension
fn load_extension(conn: &Connection, name: &str) -> DbResult<()> {
    conn.execute_batch(&format!("INSTALL {name}; LOAD {name};"))
        .map_err(|e| DbError::ExtensionUnavailable {
            name: name.to_string(),
            message: e.to_string(),
        })
}

/// Quote a string as a SQL literal
fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Build the `read_csv` scan for a csv source
pub(crate) fn csv_scan_sql(source: &DataSource) -> String {
    let mut options = vec![
        "header = false".to_string(),
        "all_varchar = true".to_string(),
        "null_padding = true".to_string(),
    ];
    if let Some(delimiter) = source.delimiter {
        options.push(format!("delim = {}", sql_literal(&delimiter.to_string())));
    }
    format!(
        "SELECT * FROM read_csv({}, {})",
        sql_literal(&source.display_path()),
        options.join(", ")
    )
}

/// Build the `read_xlsx` scan for an xlsx source
pub(crate) fn xlsx_scan_sql(source: &DataSource) -> String {
    let mut options = vec![
        "header = false".to_string(),
        "all_varchar = true".to_string(),
        "stop_at_empty = false".to_string(),
    ];
    if let Some(sheet) = &source.sheet {
        options.push(format!("sheet = {}", sql_literal(sheet)));
    }
    format!(
        "SELECT * FROM read_xlsx({}, {})",
        sql_literal(&source.display_path()),
        options.join(", ")
    )
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
