//! List command implementation

use anyhow::Result;
use serde::Serialize;
use vf_core::{FlatRecord, Relation};

use crate::cli::{GlobalArgs, LsArgs, LsOutput};
use crate::context::RuntimeContext;

/// Execute the ls command
pub async fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let relation = ctx.load_relation().await?;

    match args.output {
        LsOutput::Table => print!("{}", format_table(&relation)),
        LsOutput::Json => println!("{}", serde_json::to_string_pretty(&Listing::new(&relation))?),
    }

    Ok(())
}

/// JSON shape for `vf ls -o json`
#[derive(Debug, Serialize)]
struct Listing<'a> {
    flats: usize,
    vehicles: usize,
    records: &'a Relation,
}

impl<'a> Listing<'a> {
    fn new(relation: &'a Relation) -> Self {
        Self {
            flats: relation.len(),
            vehicles: relation.vehicle_count(),
            records: relation,
        }
    }
}

/// Render the relation as an aligned two-column table
fn format_table(relation: &Relation) -> String {
    if relation.is_empty() {
        return "No data loaded.\n".to_string();
    }

    let flat_width = relation
        .iter()
        .map(|r| flat_label(r).len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<flat_width$}  VEHICLES\n",
        "FLAT",
        flat_width = flat_width
    ));
    out.push_str(&format!(
        "{:-<flat_width$}  {}\n",
        "",
        "-".repeat(40),
        flat_width = flat_width
    ));

    for record in relation {
        out.push_str(&format!(
            "{:<flat_width$}  {}\n",
            flat_label(record),
            vehicles_label(record),
            flat_width = flat_width
        ));
    }

    out.push_str(&format!(
        "\n{} flats, {} vehicles\n",
        relation.len(),
        relation.vehicle_count()
    ));
    out
}

fn flat_label(record: &FlatRecord) -> &str {
    if record.has_flat() {
        &record.flat
    } else {
        "-"
    }
}

fn vehicles_label(record: &FlatRecord) -> String {
    if record.cars.is_empty() {
        return "-".to_string();
    }
    record
        .cars
        .iter()
        .map(|car| {
            if car.model.is_empty() {
                car.number.to_string()
            } else {
                format!("{} ({})", car.number, car.model)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
