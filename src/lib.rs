pub mod common;
pub mod constants;
pub mod errors;
pub mod fees;
pub mod utils;

use std::sync::Arc;

use common::{AnyResult, ConnectionCache, DappConfig, SolanaRpcClient};
use fees::FeeCalculator;

pub use errors::Error;

/// Client-side entry point for dApp mini-apps.
///
/// Owns the fee calculator and the RPC connection cache for one
/// configuration. Instances are independent; nothing is shared through
/// globals, and several can be held side by side.
pub struct SolanaDapp {
    pub config: DappConfig,
    pub connections: ConnectionCache,
    pub fees: FeeCalculator,
}

impl SolanaDapp {
    pub fn new(config: DappConfig) -> Self {
        Self::with_connection_cache(config, ConnectionCache::new())
    }

    /// Build a client around an existing connection cache, letting the
    /// caller share one cache between clients with the same endpoint.
    pub fn with_connection_cache(config: DappConfig, connections: ConnectionCache) -> Self {
        let fees = FeeCalculator::new(config.fee_basis_points);
        Self {
            config,
            connections,
            fees,
        }
    }

    /// Get the RPC client for the configured endpoint.
    ///
    /// The client is cached; repeated calls return the same instance until
    /// the endpoint changes or [`reset_connection`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the configured endpoint is
    /// missing or malformed.
    ///
    /// [`reset_connection`]: SolanaDapp::reset_connection
    pub fn get_connection(&self) -> AnyResult<Arc<SolanaRpcClient>> {
        self.connections.connection(&self.config.rpc)
    }

    /// Drop the cached RPC client. The next call to [`get_connection`]
    /// builds a new one.
    ///
    /// [`get_connection`]: SolanaDapp::get_connection
    pub fn reset_connection(&self) {
        self.connections.reset()
    }

    /// Point the client at a different RPC endpoint. The cached client is
    /// replaced on the next call to [`get_connection`].
    ///
    /// [`get_connection`]: SolanaDapp::get_connection
    pub fn set_rpc_endpoint(&mut self, endpoint: impl Into<String>) {
        self.config.rpc.endpoint = endpoint.into();
    }

    /// Get the fee calculator configured for this client.
    pub fn get_fees(&self) -> &FeeCalculator {
        &self.fees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RpcConfig;

    #[tokio::test]
    async fn test_set_rpc_endpoint_invalidates_connection() {
        let mut dapp = SolanaDapp::new(DappConfig::default());
        let first = dapp.get_connection().unwrap();
        dapp.set_rpc_endpoint(constants::rpc::DEVNET_RPC_URL);
        let second = dapp.get_connection().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_reset_connection_forces_rebuild() {
        let dapp = SolanaDapp::new(DappConfig::default());
        let first = dapp.get_connection().unwrap();
        dapp.reset_connection();
        let second = dapp.get_connection().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_fee_calculator_follows_config() {
        let dapp = SolanaDapp::new(DappConfig {
            rpc: RpcConfig::devnet(),
            fee_basis_points: 25,
        });
        assert_eq!(dapp.get_fees().fee_rate_percent(), 0.25);
    }
}
