//! Fixture backend configuration.

use std::time::Duration;

use serde::Deserialize;

use tokamak_console_domain::resource::ResourceKind;

/// Configuration for the fixture backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Simulated latency of every fetch, in milliseconds.
    pub latency_ms: u64,
    /// Collections whose fetch is always rejected.
    pub fail: Vec<ResourceKind>,
}

impl FixtureConfig {
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_instant_success() {
        let config = FixtureConfig::default();
        assert_eq!(config.latency(), Duration::ZERO);
        assert!(config.fail.is_empty());
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            latency_ms = 750
            fail = ["roles", "scopes"]
        "#;
        let config: FixtureConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.latency(), Duration::from_millis(750));
        assert_eq!(config.fail, vec![ResourceKind::Roles, ResourceKind::Scopes]);
    }

    #[test]
    fn should_reject_unknown_resource_kind() {
        let result = toml::from_str::<FixtureConfig>(r#"fail = ["clients"]"#);
        assert!(result.is_err());
    }
}
