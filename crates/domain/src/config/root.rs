use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::store::StoreConfig;

const MAX_TTL: u32 = 3600;

/// Main configuration structure for MeshDNS.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Zones this resolver is authoritative for, in match order.
    #[serde(default)]
    pub zones: Vec<String>,

    /// TTL for synthesized records and the SOA minimum, range 0-3600.
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Accepted for config-surface compatibility; the handler currently
    /// delegates every unanswered query regardless of this list.
    #[serde(default)]
    pub fallthrough_zones: Vec<String>,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_ttl() -> u32 {
    5
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. meshdns.toml in current directory
    /// 3. /etc/meshdns/config.toml
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("meshdns.toml").exists() {
            Self::from_file("meshdns.toml")?
        } else if std::path::Path::new("/etc/meshdns/config.toml").exists() {
            Self::from_file("/etc/meshdns/config.toml")?
        } else {
            Self::default()
        };

        config.normalize_zones();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Lowercase every zone and give it a trailing dot so suffix matching
    /// works on query names as they arrive.
    pub fn normalize_zones(&mut self) {
        for zone in self.zones.iter_mut().chain(self.fallthrough_zones.iter_mut()) {
            let mut z = zone.trim_end_matches('.').to_ascii_lowercase();
            z.push('.');
            *zone = z;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zones.is_empty() {
            return Err(ConfigError::Validation(
                "at least one zone must be configured".to_string(),
            ));
        }
        if self.ttl > MAX_TTL {
            return Err(ConfigError::Validation(format!(
                "ttl must be in range [0, {MAX_TTL}]: {}",
                self.ttl
            )));
        }
        if self.store.username.is_some() != self.store.password.is_some() {
            return Err(ConfigError::Validation(
                "credentials require both username and password".to_string(),
            ));
        }
        if self.store.endpoints.is_empty() {
            return Err(ConfigError::Validation(
                "at least one store endpoint must be configured".to_string(),
            ));
        }
        Ok(())
    }
}
