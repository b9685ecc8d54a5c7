use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use etcd_client::{Certificate, Client, ConnectOptions, GetOptions, Identity, TlsOptions};
use meshdns_application::ports::ServiceSpecSource;
use meshdns_domain::config::{StoreConfig, StoreTlsConfig};
use meshdns_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Key prefix under which the control plane registers service specs.
pub const SERVICE_SPEC_PREFIX: &str = "/mesh/service-spec/";

const DIAL_TIMEOUT: Duration = Duration::from_secs(5);
const SCAN_TIMEOUT: Duration = Duration::from_secs(5);
const KEEP_ALIVE: Duration = Duration::from_secs(60);

/// etcd-backed [`ServiceSpecSource`].
///
/// The client cell is written once by the first successful [`connect`] and
/// read thereafter; a later silent connection loss is not detected or
/// re-dialed, it surfaces as per-cycle scan errors while the cached snapshot
/// goes stale.
///
/// [`connect`]: ServiceSpecSource::connect
pub struct EtcdSpecSource {
    config: StoreConfig,
    client: ArcSwapOption<Client>,
}

impl EtcdSpecSource {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            client: ArcSwapOption::const_empty(),
        }
    }

    fn connect_options(&self) -> Result<ConnectOptions, DomainError> {
        let mut options = ConnectOptions::new()
            .with_connect_timeout(DIAL_TIMEOUT)
            .with_keep_alive(KEEP_ALIVE, KEEP_ALIVE);
        if let (Some(user), Some(password)) = (&self.config.username, &self.config.password) {
            options = options.with_user(user.clone(), password.clone());
        }
        if let Some(tls) = &self.config.tls {
            options = options.with_tls(tls_options(tls)?);
        }
        Ok(options)
    }
}

#[async_trait]
impl ServiceSpecSource for EtcdSpecSource {
    fn is_connected(&self) -> bool {
        self.client.load().is_some()
    }

    async fn connect(&self) -> Result<(), DomainError> {
        if self.is_connected() {
            return Ok(());
        }
        let options = self.connect_options()?;
        let client = Client::connect(self.config.endpoints.clone(), Some(options))
            .await
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        self.client.store(Some(Arc::new(client)));
        info!(endpoints = ?self.config.endpoints, "Connected to directory store");
        Ok(())
    }

    async fn fetch_specs(&self) -> Result<Vec<String>, DomainError> {
        let Some(client) = self.client.load_full() else {
            return Err(DomainError::StoreUnavailable(
                "store client not connected".to_string(),
            ));
        };
        // etcd-client handles are channel-backed and cheap to clone; the
        // shared cell itself is never handed out mutably.
        let mut kv = (*client).clone();

        let response = tokio::time::timeout(
            SCAN_TIMEOUT,
            kv.get(SERVICE_SPEC_PREFIX, Some(GetOptions::new().with_prefix())),
        )
        .await
        .map_err(|_| DomainError::StoreScan("prefix scan timed out".to_string()))?
        .map_err(|e| DomainError::StoreScan(e.to_string()))?;

        let docs: Vec<String> = response
            .kvs()
            .iter()
            .map(|kv| String::from_utf8_lossy(kv.value()).into_owned())
            .collect();
        debug!(prefix = SERVICE_SPEC_PREFIX, documents = docs.len(), "Scanned service specs");
        Ok(docs)
    }
}

fn tls_options(config: &StoreTlsConfig) -> Result<TlsOptions, DomainError> {
    let read = |path: &str| {
        std::fs::read(path).map_err(|e| {
            DomainError::StoreUnavailable(format!("failed to read TLS file {path}: {e}"))
        })
    };

    let mut options = TlsOptions::new().ca_certificate(Certificate::from_pem(read(&config.ca_file)?));
    if let (Some(cert), Some(key)) = (&config.cert_file, &config.key_file) {
        options = options.identity(Identity::from_pem(read(cert)?, read(key)?));
    }
    Ok(options)
}
