use std::sync::{Arc, Mutex};

use log::{debug, info};

use crate::common::types::{AnyResult, RpcConfig, SolanaRpcClient};
use crate::errors::Error;

/// Memoizes one RPC client per configured endpoint.
///
/// The cache holds at most one live client. A call to [`connection`]
/// returns the cached client as long as the configured endpoint matches
/// the one the client was built for; when the endpoint changes the old
/// client is dropped and a new one is built. Each cache is an independent
/// instance; nothing is shared between caches.
///
/// [`connection`]: ConnectionCache::connection
pub struct ConnectionCache {
    slot: Mutex<Option<CachedConnection>>,
}

struct CachedConnection {
    endpoint: String,
    client: Arc<SolanaRpcClient>,
}

impl ConnectionCache {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Get the RPC client for the endpoint in `config`.
    ///
    /// Builds a client on the first call and whenever the endpoint differs
    /// from the cached one. The endpoint is the only cache key; commitment
    /// is applied at build time and does not trigger a rebuild on its own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the endpoint is empty or not
    /// an http(s) URL with a host. The cached client is left untouched in
    /// that case, so an earlier working endpoint keeps serving.
    pub fn connection(&self, config: &RpcConfig) -> AnyResult<Arc<SolanaRpcClient>> {
        let endpoint = validate_endpoint(&config.endpoint)?;

        let mut slot = self.slot.lock().unwrap();
        if let Some(cached) = slot.as_ref() {
            if cached.endpoint == endpoint {
                return Ok(cached.client.clone());
            }
            debug!(
                "RPC endpoint changed from {} to {}, rebuilding client",
                cached.endpoint, endpoint
            );
        } else {
            debug!("Building RPC client for {}", endpoint);
        }

        let client = Arc::new(SolanaRpcClient::new_with_commitment(
            endpoint.clone(),
            config.commitment,
        ));
        *slot = Some(CachedConnection {
            endpoint,
            client: client.clone(),
        });

        Ok(client)
    }

    /// Drop the cached client. The next call to [`connection`] builds a
    /// fresh one even if the endpoint is unchanged.
    ///
    /// [`connection`]: ConnectionCache::connection
    pub fn reset(&self) {
        let mut slot = self.slot.lock().unwrap();
        if let Some(cached) = slot.take() {
            info!("RPC connection cache cleared for {}", cached.endpoint);
        }
    }

    /// Endpoint of the currently cached client, if any.
    pub fn endpoint(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap()
            .as_ref()
            .map(|cached| cached.endpoint.clone())
    }
}

impl Default for ConnectionCache {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_endpoint(raw: &str) -> Result<String, Error> {
    let endpoint = raw.trim();
    if endpoint.is_empty() {
        return Err(Error::Configuration(
            "RPC endpoint is not configured".to_string(),
        ));
    }
    let rest = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .ok_or_else(|| {
            Error::Configuration(format!(
                "RPC endpoint `{}` must start with http:// or https://",
                endpoint
            ))
        })?;
    let host = rest.split(['/', '?']).next().unwrap_or("");
    if host.is_empty() {
        return Err(Error::Configuration(format!(
            "RPC endpoint `{}` has no host",
            endpoint
        )));
    }
    Ok(endpoint.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_is_cached() {
        let cache = ConnectionCache::new();
        let config = RpcConfig::devnet();
        let first = cache.connection(&config).unwrap();
        let second = cache.connection(&config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_endpoint_change_rebuilds_client() {
        let cache = ConnectionCache::new();
        let first = cache.connection(&RpcConfig::devnet()).unwrap();
        let second = cache.connection(&RpcConfig::mainnet()).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(cache.endpoint(), Some(RpcConfig::mainnet().endpoint));
    }

    #[tokio::test]
    async fn test_reset_forces_rebuild() {
        let cache = ConnectionCache::new();
        let config = RpcConfig::devnet();
        let first = cache.connection(&config).unwrap();
        cache.reset();
        assert_eq!(cache.endpoint(), None);
        let second = cache.connection(&config).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_empty_endpoint_is_configuration_error() {
        let cache = ConnectionCache::new();
        let err = cache.connection(&RpcConfig::new("  ")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_endpoint_is_configuration_error() {
        let cache = ConnectionCache::new();
        for endpoint in ["ws://api.devnet.solana.com", "https://", "devnet.solana.com"] {
            let err = cache.connection(&RpcConfig::new(endpoint)).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<Error>(), Some(Error::Configuration(_))),
                "endpoint `{}` should be rejected",
                endpoint
            );
        }
    }

    #[tokio::test]
    async fn test_rejected_endpoint_leaves_cache_untouched() {
        let cache = ConnectionCache::new();
        let config = RpcConfig::devnet();
        let first = cache.connection(&config).unwrap();
        assert!(cache.connection(&RpcConfig::new("")).is_err());
        let second = cache.connection(&config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
