//! Query engine
//!
//! A single pure lookup over a [`Relation`]. Every call scans the whole
//! relation; callers re-run it whenever the query text or the relation
//! changes. Results come back grouped by category in a fixed order:
//! at most one flat match, then vehicle number matches in scan order,
//! then at most one aggregated model match.

use crate::relation::{FlatRecord, Relation, Vehicle};
use serde::{Deserialize, Serialize};

/// Query length that enables last-N-characters number matching
pub const DEFAULT_PARTIAL_MATCH_LENGTH: usize = 4;

/// Tunables for [`search_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// A query of exactly this many characters also matches vehicle numbers
    /// ending with it. Zero disables suffix matching.
    pub partial_match_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            partial_match_length: DEFAULT_PARTIAL_MATCH_LENGTH,
        }
    }
}

/// One vehicle inside an aggregated model match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHit {
    pub flat: String,
    pub car: Vehicle,
}

/// A single lookup result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MatchResult {
    /// The query names a flat; carries all of its vehicles
    Flat { flat: String, cars: Vec<Vehicle> },

    /// The query names one vehicle by full number or number suffix
    Car { flat: String, car: Vehicle },

    /// Every vehicle whose model equals the query
    Model { matches: Vec<ModelHit> },
}

impl MatchResult {
    /// Category tag, as used in serialized output
    pub fn kind(&self) -> &'static str {
        match self {
            MatchResult::Flat { .. } => "flat",
            MatchResult::Car { .. } => "car",
            MatchResult::Model { .. } => "model",
        }
    }
}

/// Trim and case-fold a query. `None` means there is no active search.
pub fn normalize_query(query: &str) -> Option<String> {
    let folded = query.trim().to_lowercase();
    if folded.is_empty() {
        None
    } else {
        Some(folded)
    }
}

/// Look up `query` with the default options
pub fn search(relation: &Relation, query: &str) -> Vec<MatchResult> {
    search_with(relation, query, &SearchOptions::default())
}

/// Look up `query` against every flat, vehicle number, and vehicle model
///
/// A blank query returns an empty list without scanning.
pub fn search_with(relation: &Relation, query: &str, options: &SearchOptions) -> Vec<MatchResult> {
    let Some(q) = normalize_query(query) else {
        return Vec::new();
    };

    let mut results = Vec::new();

    if let Some(record) = match_flat(relation, &q) {
        results.push(MatchResult::Flat {
            flat: record.flat.clone(),
            cars: record.cars.clone(),
        });
    }

    let partial = options.partial_match_length > 0
        && q.chars().count() == options.partial_match_length;
    results.extend(
        relation
            .vehicles()
            .filter(|(_, car)| match_number(car, &q, partial))
            .map(|(record, car)| MatchResult::Car {
                flat: record.flat.clone(),
                car: car.clone(),
            }),
    );

    let hits: Vec<ModelHit> = relation
        .vehicles()
        .filter(|(_, car)| car.model.to_lowercase() == q)
        .map(|(record, car)| ModelHit {
            flat: record.flat.clone(),
            car: car.clone(),
        })
        .collect();
    if !hits.is_empty() {
        results.push(MatchResult::Model { matches: hits });
    }

    results
}

/// First flat equal to the folded query; later duplicates are ignored
fn match_flat<'a>(relation: &'a Relation, folded: &str) -> Option<&'a FlatRecord> {
    relation
        .iter()
        .find(|record| record.has_flat() && record.flat.to_lowercase() == folded)
}

/// Exact number match, else suffix match when `partial` is enabled.
/// Each vehicle yields at most one hit.
fn match_number(car: &Vehicle, folded: &str, partial: bool) -> bool {
    car.number.matches_exact(folded) || (partial && car.number.ends_with_folded(folded))
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
