//! Spreadsheet cells and raw rows.
//!
//! Sources hand over rows whose cells may be missing entirely (a ragged
//! row) or present but blank. Both collapse to [`Cell::Absent`] so the
//! relation builder never has to reason about null-ish values.

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A non-empty value
    Present(String),
    /// Missing or blank
    #[default]
    Absent,
}

impl Cell {
    /// Build a cell, treating the empty string as absent
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Cell::Absent
        } else {
            Cell::Present(value)
        }
    }

    /// Cell text, or `""` when absent
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Present(value) => value,
            Cell::Absent => "",
        }
    }

    /// Whether the cell holds a value
    pub fn is_present(&self) -> bool {
        matches!(self, Cell::Present(_))
    }

    /// Consume the cell, returning `""` when absent
    pub fn into_string(self) -> String {
        match self {
            Cell::Present(value) => value,
            Cell::Absent => String::new(),
        }
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map(Cell::new).unwrap_or(Cell::Absent)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::new(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::new(value)
    }
}

static ABSENT: Cell = Cell::Absent;

/// One row of a sheet, in column order
///
/// Cell 0 is the flat identifier; cells 1.. alternate vehicle number and
/// vehicle model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(Vec<Cell>);

impl RawRow {
    /// Wrap an ordered list of cells
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// Cell at `index`, or [`Cell::Absent`] past the end of the row
    pub fn get(&self, index: usize) -> &Cell {
        self.0.get(index).unwrap_or(&ABSENT)
    }

    /// Number of cells physically present in the row
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no cells at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the cells
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }
}

impl From<Vec<Cell>> for RawRow {
    fn from(cells: Vec<Cell>) -> Self {
        Self(cells)
    }
}

impl From<Vec<&str>> for RawRow {
    fn from(cells: Vec<&str>) -> Self {
        Self(cells.into_iter().map(Cell::from).collect())
    }
}

impl From<Vec<String>> for RawRow {
    fn from(cells: Vec<String>) -> Self {
        Self(cells.into_iter().map(Cell::from).collect())
    }
}

impl From<Vec<Option<String>>> for RawRow {
    fn from(cells: Vec<Option<String>>) -> Self {
        Self(cells.into_iter().map(Cell::from).collect())
    }
}
