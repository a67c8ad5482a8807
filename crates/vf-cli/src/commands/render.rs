//! Text and JSON rendering of lookup results
//!
//! The query engine reports nothing for a blank query and also nothing for a
//! query that matched nothing. Telling those apart (and telling "no match"
//! from "no data loaded") happens here.

use anyhow::Result;
use vf_core::{normalize_query, MatchResult, Vehicle};

/// Shown when a non-blank query matched nothing
pub(crate) const NO_MATCH: &str = "No matching records found.";

/// Shown when a non-blank query ran against an empty relation
pub(crate) const NO_DATA: &str = "No data loaded.";

/// Render results as human-readable text
///
/// Returns an empty string for a blank query.
pub(crate) fn render_text(results: &[MatchResult], query: &str, relation_empty: bool) -> String {
    if normalize_query(query).is_none() {
        return String::new();
    }

    if results.is_empty() {
        let msg = if relation_empty { NO_DATA } else { NO_MATCH };
        return format!("{}\n", msg);
    }

    let blocks: Vec<String> = results
        .iter()
        .map(|result| render_result(result, query.trim()))
        .collect();
    blocks.join("\n")
}

fn render_result(result: &MatchResult, query: &str) -> String {
    match result {
        MatchResult::Flat { flat, cars } => {
            let mut out = format!("Flat {} owns:\n", flat);
            if cars.is_empty() {
                out.push_str("  (no vehicles)\n");
            }
            for car in cars {
                out.push_str(&format!("  - {}\n", list_item(car)));
            }
            out
        }
        MatchResult::Car { flat, car } => {
            format!("Car {} belongs to Flat {}.\n", describe(car), flat)
        }
        MatchResult::Model { matches } => {
            let mut out = format!("Cars with model \"{}\":\n", query);
            for hit in matches {
                out.push_str(&format!("  - {} - Flat {}\n", hit.car.number, hit.flat));
            }
            out
        }
    }
}

/// `NUMBER (MODEL)`, or just the number when the model is blank
fn describe(car: &Vehicle) -> String {
    if car.model.is_empty() {
        car.number.to_string()
    } else {
        format!("{} ({})", car.number, car.model)
    }
}

/// `NUMBER - MODEL`, or just the number when the model is blank
fn list_item(car: &Vehicle) -> String {
    if car.model.is_empty() {
        car.number.to_string()
    } else {
        format!("{} - {}", car.number, car.model)
    }
}

/// Render results as a pretty JSON array
pub(crate) fn render_json(results: &[MatchResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
