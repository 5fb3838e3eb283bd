//! CLI runner - executes commands

use crate::catalog::Aggregator;
use crate::cli::commands::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::Result;
use crate::query::BrowseQuery;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        debug!("Using upstream {}", config.base_url);
        let aggregator = Aggregator::from_config(&config)?;

        match &self.cli.command {
            Commands::Page { page, types } => {
                let query = BrowseQuery::parse(None, types.as_deref());
                let result = aggregator.get_page(*page, &query.types).await;
                self.print_json(&result)
            }
            Commands::Types => {
                let names = aggregator.list_type_names().await;
                self.print_json(&names)
            }
            Commands::Pokemon { id } => {
                let pokemon = aggregator.pokemon(*id).await;
                self.print_json(&pokemon)
            }
            Commands::Serve { port } => crate::cli::serve(Arc::new(aggregator), *port).await,
        }
    }

    /// Load the config file (if any) and apply command-line overrides
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.cli.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config = config.with_base_url(base_url);
            config.validate()?;
        }

        Ok(config)
    }

    fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let output = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{output}");
        Ok(())
    }
}
