//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod clack;
mod render;

pub use clack::ClackUi;

use crate::app::App;
use crate::config::{ConfigStore, DEFAULT_CONFIG_PATH};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Arguments for an interactive session
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Catalog config file; created with defaults when missing
    pub config_path: PathBuf,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

/// Run the interactive ordering console until the user quits
pub fn run(args: RunArgs) -> Result<()> {
    cliclack::intro("Pizza Order")?;

    let config = ConfigStore::open(&args.config_path).with_context(|| {
        format!("Failed to open config {}", args.config_path.display())
    })?;
    tracing::info!(config = %config.path().display(), "starting session");

    let mut app = App::new(config, ClackUi::new());
    app.run()?;

    cliclack::outro("Enjoy your meal!")?;
    Ok(())
}
