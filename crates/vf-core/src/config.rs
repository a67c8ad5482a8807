//! Configuration types and parsing for vehicle-finder.yml

use crate::error::{CoreError, CoreResult};
use crate::search::{SearchOptions, DEFAULT_PARTIAL_MATCH_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names looked up in a project directory, in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["vehicle-finder.yml", "vehicle-finder.yaml"];

/// Main project configuration from vehicle-finder.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Where the flat/vehicle sheet lives and how to read it
    #[serde(default)]
    pub data: DataConfig,

    /// Lookup tunables
    #[serde(default)]
    pub search: SearchConfig,
}

/// Spreadsheet source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Path to the sheet, relative to the project directory
    #[serde(default = "default_data_path")]
    pub path: String,

    /// File format; inferred from the extension when omitted
    #[serde(default)]
    pub format: Option<SourceFormat>,

    /// Worksheet to read (xlsx only, default: first sheet)
    #[serde(default)]
    pub sheet: Option<String>,

    /// Leading rows (e.g. a header) dropped before building the relation
    #[serde(default)]
    pub header_rows: usize,

    /// Field delimiter (csv only, default: auto-detect)
    #[serde(default)]
    pub delimiter: Option<char>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            format: None,
            sheet: None,
            header_rows: 0,
            delimiter: None,
        }
    }
}

fn default_data_path() -> String {
    "data/parking.csv".to_string()
}

/// Lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Query length that also matches vehicle number suffixes (0 disables)
    #[serde(default = "default_partial_match_length")]
    pub partial_match_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            partial_match_length: default_partial_match_length(),
        }
    }
}

fn default_partial_match_length() -> usize {
    DEFAULT_PARTIAL_MATCH_LENGTH
}

impl SearchConfig {
    /// Options for the query engine
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            partial_match_length: self.partial_match_length,
        }
    }
}

/// Spreadsheet file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Delimited text (default)
    #[default]
    Csv,
    /// Excel workbook
    Xlsx,
}

impl SourceFormat {
    /// Infer the format from a file extension, falling back to csv
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("xlsx") | Some("xlsm") => SourceFormat::Xlsx,
            _ => SourceFormat::Csv,
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "vehicle-finder".to_string(),
            data: DataConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                message: format!("{}: {}", path.display(), e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for vehicle-finder.yml or vehicle-finder.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => Err(CoreError::ConfigNotFound {
                path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
            }),
        }
    }

    /// Path of the config file in `dir`, if one exists
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if self.data.path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "data.path cannot be empty".to_string(),
            });
        }

        match self.data_format() {
            SourceFormat::Csv if self.data.sheet.is_some() => {
                return Err(CoreError::ConfigInvalid {
                    message: "data.sheet is only valid for xlsx sources".to_string(),
                });
            }
            SourceFormat::Xlsx if self.data.delimiter.is_some() => {
                return Err(CoreError::ConfigInvalid {
                    message: "data.delimiter is only valid for csv sources".to_string(),
                });
            }
            _ => {}
        }

        Ok(())
    }

    /// Effective data format (explicit, or inferred from `data.path`)
    pub fn data_format(&self) -> SourceFormat {
        self.data
            .format
            .unwrap_or_else(|| SourceFormat::from_path(Path::new(&self.data.path)))
    }

    /// Data file resolved against the project root
    pub fn data_path_absolute(&self, root: &Path) -> PathBuf {
        let path = Path::new(&self.data.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }

    /// Query engine options from the `search` section
    pub fn search_options(&self) -> SearchOptions {
        self.search.options()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
