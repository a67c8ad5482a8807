//! Relation builder
//!
//! Converts raw sheet rows into an ordered list of flats, each owning the
//! vehicles listed across its row. Column 0 is the flat; the remaining
//! columns are read as `(number, model)` pairs.

use crate::cell::RawRow;
use crate::vehicle_number::VehicleNumber;
use serde::{Deserialize, Serialize};

/// A vehicle listed against a flat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Registration number as written in the sheet
    pub number: VehicleNumber,

    /// Model name, empty when the sheet leaves it blank
    #[serde(default)]
    pub model: String,
}

impl Vehicle {
    /// Create a vehicle from a number and (possibly empty) model
    pub fn new(number: VehicleNumber, model: impl Into<String>) -> Self {
        Self {
            number,
            model: model.into(),
        }
    }
}

/// One sheet row: a flat and its vehicles in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    /// Flat identifier; empty when the row had no flat cell
    pub flat: String,

    /// Vehicles in column order
    #[serde(default)]
    pub cars: Vec<Vehicle>,
}

impl FlatRecord {
    /// Build a record from one raw row
    pub fn from_row(row: &RawRow) -> Self {
        let flat = row.get(0).as_str().to_string();
        let mut cars = Vec::new();

        let mut i = 1;
        while i < row.len() {
            if let Some(number) = VehicleNumber::try_new(row.get(i).as_str()) {
                // An odd-length row leaves the last model unset.
                cars.push(Vehicle::new(number, row.get(i + 1).as_str()));
            }
            i += 2;
        }

        Self { flat, cars }
    }

    /// Whether the row carried a flat identifier
    pub fn has_flat(&self) -> bool {
        !self.flat.is_empty()
    }
}

/// The full set of flat records for one load
///
/// Built wholesale from a sheet and never mutated afterwards; a reload
/// produces a fresh `Relation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Relation {
    records: Vec<FlatRecord>,
}

impl Relation {
    /// Build a relation with one record per raw row, in row order
    ///
    /// Rows without a flat are kept; they contribute vehicles to number and
    /// model lookups but can never match a flat lookup.
    pub fn build<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a RawRow>,
    {
        let records: Vec<FlatRecord> = rows.into_iter().map(FlatRecord::from_row).collect();
        let relation = Self { records };

        log::debug!(
            "Built relation: {} flats, {} vehicles",
            relation.len(),
            relation.vehicle_count()
        );
        relation
    }

    /// A relation with no records (nothing loaded)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Records in row order
    pub fn iter(&self) -> std::slice::Iter<'_, FlatRecord> {
        self.records.iter()
    }

    /// Borrow the records
    pub fn records(&self) -> &[FlatRecord] {
        &self.records
    }

    /// Every `(flat, vehicle)` pair in row order, then column order
    pub fn vehicles(&self) -> impl Iterator<Item = (&FlatRecord, &Vehicle)> {
        self.records
            .iter()
            .flat_map(|record| record.cars.iter().map(move |car| (record, car)))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of vehicles across all records
    pub fn vehicle_count(&self) -> usize {
        self.records.iter().map(|r| r.cars.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Relation {
    type Item = &'a FlatRecord;
    type IntoIter = std::slice::Iter<'a, FlatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
#[path = "relation_test.rs"]
mod tests;
