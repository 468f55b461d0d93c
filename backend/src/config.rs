use crate::error::ConfigError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("staging") => Environment::Staging,
            Some("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    fn default_port(self) -> u16 {
        match self {
            Environment::Staging => 3100,
            _ => 3000,
        }
    }
}

/// Settings for the static host, read from the environment (and `.env`).
#[derive(Clone, Debug)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub environment: Environment,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = Environment::parse(lookup("ENVIRONMENT").as_deref());
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => environment.default_port(),
        };
        let dist_dir = lookup("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("frontend/dist"));
        Ok(Self {
            port,
            dist_dir,
            environment,
        })
    }

    pub fn ensure_dist_dir(&self) -> Result<(), ConfigError> {
        if self.dist_dir.is_dir() {
            Ok(())
        } else {
            Err(ConfigError::MissingDistDir(self.dist_dir.clone()))
        }
    }

    pub fn screenshots_dir(&self) -> PathBuf {
        self.dist_dir.join("screenshots")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = HostConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
    }

    #[test]
    fn staging_uses_its_own_port() {
        let config = HostConfig::from_lookup(lookup(&[("ENVIRONMENT", "staging")])).unwrap();
        assert_eq!(config.port, 3100);
    }

    #[test]
    fn explicit_port_wins() {
        let config =
            HostConfig::from_lookup(lookup(&[("ENVIRONMENT", "staging"), ("PORT", "8080")]))
                .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    }

    #[test]
    fn missing_dist_dir_is_reported() {
        let config =
            HostConfig::from_lookup(lookup(&[("DIST_DIR", "/definitely/not/here")])).unwrap();
        assert!(matches!(
            config.ensure_dist_dir(),
            Err(ConfigError::MissingDistDir(_))
        ));
    }
}
