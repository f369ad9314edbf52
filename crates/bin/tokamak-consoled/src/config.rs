//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `tokamak-console.toml` in the working directory. Every field has
//! a sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use tokamak_console_adapter_fixtures::FixtureConfig;
use tokamak_console_adapter_http_axum::render::Theme;
use tokamak_console_adapter_tokamak_http::TokamakConfig;
use tokamak_console_app::controller::EmptyPolicy;
use tokamak_console_domain::resource::ResourceKind;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Which fetcher backs the views.
    pub backend: BackendConfig,
    /// Tokamak API settings, used by the `tokamak` backend.
    pub tokamak: TokamakConfig,
    /// Fixture settings, used by the `fixtures` backend.
    pub fixtures: FixtureConfig,
    /// Page theme.
    pub theme: ThemeConfig,
    /// Per-view overrides.
    pub views: ViewsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// How long a page waits for its fetch before rendering the loader.
    pub settle_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Backend selection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub kind: BackendKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// The Tokamak HTTP API.
    #[default]
    Tokamak,
    /// The in-memory demo catalog.
    Fixtures,
}

/// Theme configuration, turned into a renderer [`Theme`].
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `light` or `dark`.
    pub name: String,
    /// Product name in the header.
    pub brand: String,
    /// Loader auto-refresh interval in seconds.
    pub refresh_seconds: u32,
}

/// Overrides for the three list views.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    pub authorities: ViewConfig,
    pub roles: ViewConfig,
    pub scopes: ViewConfig,
}

/// Overrides for one list view.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Replaces the view's built-in empty-state policy.
    pub empty_policy: Option<EmptyPolicy>,
}

impl Config {
    /// Load configuration from `tokamak-console.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("tokamak-console.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("TOKAMAK_CONSOLE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("TOKAMAK_CONSOLE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("TOKAMAK_CONSOLE_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("TOKAMAK_ENDPOINT") {
            self.tokamak.endpoint = val;
        }
        if let Some(val) = var("TOKAMAK_ACCESS_TOKEN") {
            self.tokamak.access_token = Some(val);
        }
        if let Some(val) = var("TOKAMAK_CONSOLE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.backend.kind == BackendKind::Tokamak && self.tokamak.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation(
                "tokamak endpoint must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    #[must_use]
    pub fn settle_timeout(&self) -> Duration {
        Duration::from_millis(self.settle_timeout_ms)
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn to_theme(&self) -> Theme {
        Theme {
            name: self.name.clone(),
            brand: self.brand.clone(),
            refresh_seconds: self.refresh_seconds,
        }
    }
}

impl ViewsConfig {
    /// The empty-state policies set in the file, by view.
    pub fn empty_policy_overrides(&self) -> impl Iterator<Item = (ResourceKind, EmptyPolicy)> {
        [
            (ResourceKind::Authorities, self.authorities.empty_policy),
            (ResourceKind::Roles, self.roles.empty_policy),
            (ResourceKind::Scopes, self.scopes.empty_policy),
        ]
        .into_iter()
        .filter_map(|(kind, policy)| policy.map(|policy| (kind, policy)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            settle_timeout_ms: 1500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tokamak_consoled=info,tokamak_console=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let theme = Theme::default();
        Self {
            name: theme.name,
            brand: theme.brand,
            refresh_seconds: theme.refresh_seconds,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
