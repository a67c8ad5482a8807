//! Search command implementation

use anyhow::Result;
use vf_core::search_with;

use crate::cli::{GlobalArgs, SearchArgs, SearchOutput};
use crate::commands::common::{ExitCode, EXIT_NO_MATCH};
use crate::commands::render::{render_json, render_text};
use crate::context::RuntimeContext;

/// Execute the search command
pub async fn execute(args: &SearchArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let relation = ctx.load_relation().await?;

    let results = search_with(&relation, &args.query, &ctx.search_options());
    ctx.verbose(&format!(
        "Query '{}' produced {} results",
        args.query.trim(),
        results.len()
    ));

    match args.output {
        SearchOutput::Text => print!("{}", render_text(&results, &args.query, relation.is_empty())),
        SearchOutput::Json => println!("{}", render_json(&results)?),
    }

    if results.is_empty() && args.fail_on_empty {
        return Err(ExitCode(EXIT_NO_MATCH).into());
    }

    Ok(())
}
