//! Resolved description of the sheet to read

use std::path::{Path, PathBuf};
use vf_core::{Config, SourceFormat};

/// A sheet location plus the options needed to decode it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    /// Absolute or working-directory-relative file path
    pub path: PathBuf,

    /// File format
    pub format: SourceFormat,

    /// Worksheet name (xlsx only)
    pub sheet: Option<String>,

    /// Leading rows to drop
    pub header_rows: usize,

    /// Field delimiter (csv only)
    pub delimiter: Option<char>,
}

impl DataSource {
    /// A csv source with auto-detected delimiter and no header
    pub fn csv(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: SourceFormat::Csv,
            sheet: None,
            header_rows: 0,
            delimiter: None,
        }
    }

    /// An xlsx source reading the first worksheet with no header
    pub fn xlsx(path: impl Into<PathBuf>) -> Self {
        Self {
            format: SourceFormat::Xlsx,
            ..Self::csv(path)
        }
    }

    /// Resolve the `data` section of a config against the project root
    ///
    /// `path_override` replaces `data.path` (e.g. from `--data`); its format
    /// is re-inferred unless the config names one explicitly.
    pub fn from_config(config: &Config, root: &Path, path_override: Option<&Path>) -> Self {
        let (path, format) = match path_override {
            Some(p) => (
                p.to_path_buf(),
                config.data.format.unwrap_or_else(|| SourceFormat::from_path(p)),
            ),
            None => (config.data_path_absolute(root), config.data_format()),
        };

        Self {
            path,
            format,
            sheet: config.data.sheet.clone(),
            header_rows: config.data.header_rows,
            delimiter: config.data.delimiter,
        }
    }

    /// Drop the configured number of leading rows
    pub fn with_header_rows(mut self, header_rows: usize) -> Self {
        self.header_rows = header_rows;
        self
    }

    /// Set the csv delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Path for messages
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}
