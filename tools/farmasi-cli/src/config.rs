//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use farmasi_data::{normalize_base_url, FetchPolicy, TimeoutConfig};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["farmasi.toml", ".farmasi.toml", "farmasi.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Backend connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Order form defaults.
    #[serde(default)]
    pub order: OrderConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Request policy for the HTTP client.
    pub fn fetch_policy(&self) -> FetchPolicy {
        let timeout = TimeoutConfig::from_millis(self.api.connect_timeout_ms, self.api.timeout_ms);
        let user_agent = self
            .api
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);
        FetchPolicy::new(timeout).with_user_agent(user_agent)
    }

    /// Check the config, returning `(errors, warnings)`.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if let Err(e) = normalize_base_url(&self.api.base_url) {
            errors.push(format!("api.base_url: {}", e));
        }
        if self.api.timeout_ms == 0 {
            errors.push("api.timeout_ms must be greater than 0".to_string());
        }
        if self.api.connect_timeout_ms == 0 {
            errors.push("api.connect_timeout_ms must be greater than 0".to_string());
        }
        if self.api.connect_timeout_ms > self.api.timeout_ms {
            warnings.push(format!(
                "api.connect_timeout_ms ({}) exceeds api.timeout_ms ({})",
                self.api.connect_timeout_ms, self.api.timeout_ms
            ));
        }
        if self.order.default_quantity == 0 {
            errors.push("order.default_quantity must be at least 1".to_string());
        }

        (errors, warnings)
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL, without the `/products` or `/order` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total time limit per request.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Connection establishment limit.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// `User-Agent` override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_connect_timeout_ms() -> u64 {
    3_000
}

fn default_user_agent() -> String {
    format!("farmasi-cli/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            user_agent: None,
        }
    }
}

/// Order form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Quantity a fresh or reset form starts with.
    #[serde(default = "default_quantity")]
    pub default_quantity: u32,
}

fn default_quantity() -> u32 {
    farmasi_core::order::DEFAULT_QUANTITY
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            default_quantity: default_quantity(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default farmasi.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Farmasi dashboard configuration

[api]
base_url = "{base_url}"
# Total time limit per request, in milliseconds
timeout_ms = {timeout_ms}
connect_timeout_ms = {connect_timeout_ms}

[order]
default_quantity = {default_quantity}
"#,
        base_url = default_base_url(),
        timeout_ms = default_timeout_ms(),
        connect_timeout_ms = default_connect_timeout_ms(),
        default_quantity = default_quantity(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.api.connect_timeout_ms, 3_000);
        assert_eq!(config.order.default_quantity, 1);
        assert_eq!(config.check(), (vec![], vec![]));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[api]
base_url = "https://apotek.example.com/api"
"#,
        )
        .unwrap();
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.order.default_quantity, 1);

        let policy = config.fetch_policy();
        assert_eq!(policy.timeout.total, Duration::from_secs(10));
        assert_eq!(policy.timeout.connect, Duration::from_secs(3));
        assert!(policy.user_agent.unwrap().starts_with("farmasi-cli/"));
    }

    #[test]
    fn test_json_config() {
        let config: CliConfig =
            serde_json::from_str(r#"{"api":{"base_url":"http://10.0.0.2:9000","timeout_ms":500}}"#)
                .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.api.timeout_ms, 500);
    }

    #[test]
    fn test_check_reports_errors_and_warnings() {
        let mut config = CliConfig::default();
        config.api.base_url = "localhost:8080".to_string();
        config.api.timeout_ms = 1_000;
        config.api.connect_timeout_ms = 2_000;
        config.order.default_quantity = 0;

        let (errors, warnings) = config.check();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("api.base_url"));
        assert_eq!(warnings.len(), 1);
    }
}
