//! Runtime context for CLI commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vf_core::{Config, Relation, SearchOptions};
use vf_db::{DataSource, DuckDbBackend, RowSource};

use crate::cli::GlobalArgs;

/// Runtime context containing the resolved config and the row source
pub struct RuntimeContext {
    /// The loaded (or default) configuration
    pub config: Config,

    /// The sheet to read
    pub source: DataSource,

    /// Row source backend
    pub backend: Arc<dyn RowSource>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let root = PathBuf::from(&args.project_dir);
        let data_override = args.data.as_deref().map(Path::new);

        // --config wins; a bare --data run needs no config file at all
        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else if Config::find_in_dir(&root).is_none() && data_override.is_some() {
            Config::default()
        } else {
            Config::load_from_dir(&root).context("Failed to load project configuration")?
        };

        let source = DataSource::from_config(&config, &root, data_override);
        let backend: Arc<dyn RowSource> =
            Arc::new(DuckDbBackend::in_memory().context("Failed to open DuckDB")?);

        let ctx = Self {
            config,
            source,
            backend,
            verbose: args.verbose,
        };
        ctx.verbose(&format!(
            "Project '{}': {} source {}",
            ctx.config.name,
            ctx.source.format,
            ctx.source.display_path()
        ));
        Ok(ctx)
    }

    /// Read the sheet and build a fresh relation from it
    pub async fn load_relation(&self) -> Result<Relation> {
        let rows = self
            .backend
            .read_rows(&self.source)
            .await
            .with_context(|| format!("Failed to load data from {}", self.source.display_path()))?;

        let relation = Relation::build(&rows);
        self.verbose(&format!(
            "Loaded {} flats ({} vehicles) via {}",
            relation.len(),
            relation.vehicle_count(),
            self.backend.source_type()
        ));
        Ok(relation)
    }

    /// Query engine options from config
    pub fn search_options(&self) -> SearchOptions {
        self.config.search_options()
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
