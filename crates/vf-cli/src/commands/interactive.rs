//! Interactive (search-as-you-type) command implementation
//!
//! Each input line is the current value of the query box; every line
//! re-runs the lookup against the loaded relation. Lines starting with `:`
//! are session commands.

use anyhow::{Context, Result};
use std::io::{BufRead, IsTerminal, Write};
use vf_core::{search_with, Relation};

use crate::cli::{GlobalArgs, InteractiveArgs, SearchOutput};
use crate::commands::render::{render_json, render_text};
use crate::context::RuntimeContext;

const PROMPT: &str = "search> ";

/// A line of interactive input
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    /// Rebuild the relation from the source
    Reload,
    /// End the session
    Quit,
    /// Anything else is the live query text
    Query(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":reload" | ":r" => Input::Reload,
            ":quit" | ":q" | ":exit" => Input::Quit,
            _ => Input::Query(line),
        }
    }
}

/// Execute the interactive command
pub async fn execute(args: &InteractiveArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let relation = ctx.load_relation().await?;

    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = std::io::stdout();

    run_session(&ctx, relation, stdin.lock(), &mut stdout, args.output, prompt).await
}

/// Drive one session until `:quit` or end of input
async fn run_session<R, W>(
    ctx: &RuntimeContext,
    mut relation: Relation,
    input: R,
    out: &mut W,
    output: SearchOutput,
    prompt: bool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let options = ctx.search_options();
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;

        match Input::parse(&line) {
            Input::Quit => break,
            Input::Reload => match ctx.load_relation().await {
                Ok(fresh) => {
                    relation = fresh;
                    writeln!(
                        out,
                        "Reloaded {} flats ({} vehicles).",
                        relation.len(),
                        relation.vehicle_count()
                    )?;
                }
                Err(e) => {
                    log::warn!("Reload failed, keeping previous data: {e:#}");
                    writeln!(out, "Reload failed: {e:#}")?;
                }
            },
            Input::Query(query) => {
                let results = search_with(&relation, query, &options);
                match output {
                    SearchOutput::Text => {
                        write!(out, "{}", render_text(&results, query, relation.is_empty()))?
                    }
                    SearchOutput::Json => writeln!(out, "{}", render_json(&results)?)?,
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "interactive_test.rs"]
mod tests;
