use serde::{Deserialize, Serialize};

/// Connection settings for the control-plane key-value store.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub tls: Option<StoreTlsConfig>,

    /// Seconds between directory refresh cycles.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

/// PEM file paths for a TLS connection to the store.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreTlsConfig {
    pub ca_file: String,

    #[serde(default)]
    pub cert_file: Option<String>,

    #[serde(default)]
    pub key_file: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            username: None,
            password: None,
            tls: None,
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

fn default_endpoints() -> Vec<String> {
    vec!["http://localhost:2379".to_string()]
}

fn default_refresh_interval() -> u64 {
    5
}
