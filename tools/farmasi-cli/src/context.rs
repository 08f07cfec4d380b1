//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use farmasi_core::order::OrderForm;
use farmasi_core::Dashboard;
use farmasi_data::HttpPharmacyApi;
use tracing::debug;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file, then apply command line overrides.
    pub fn load(config_path: Option<&str>, api_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(url) = api_url {
            config.api.base_url = url.to_string();
        }

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }
        debug!(
            base_url = %config.api.base_url,
            timeout_ms = config.api.timeout_ms,
            connect_timeout_ms = config.api.connect_timeout_ms,
            "configuration loaded"
        );

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// HTTP client for the configured backend.
    pub fn api(&self) -> Result<HttpPharmacyApi> {
        HttpPharmacyApi::new(&self.config.api.base_url, self.config.fetch_policy())
            .context("Failed to set up backend client")
    }

    /// A dashboard over the configured backend, not yet loaded.
    pub fn dashboard(&self) -> Result<Dashboard<HttpPharmacyApi>> {
        let form = OrderForm::with_default_quantity(self.config.order.default_quantity);
        Ok(Dashboard::with_form(self.api()?, form))
    }
}
