use serde::{Deserialize, Deserializer};
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};

use crate::constants::fees::DEFAULT_FEE_BASIS_POINTS;
use crate::constants::rpc::{DEVNET_RPC_URL, MAINNET_RPC_URL};

/// Where to reach a Solana RPC node and at which commitment level.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RpcConfig {
    /// HTTP(S) URL of the RPC node.
    pub endpoint: String,
    /// Commitment applied when a client is built for this endpoint.
    /// Config files carry it as a plain level string ("confirmed").
    #[serde(default = "default_commitment", deserialize_with = "commitment_from_level")]
    pub commitment: CommitmentConfig,
}

impl RpcConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            commitment: default_commitment(),
        }
    }

    /// Public mainnet-beta endpoint.
    pub fn mainnet() -> Self {
        Self::new(MAINNET_RPC_URL)
    }

    /// Public devnet endpoint.
    pub fn devnet() -> Self {
        Self::new(DEVNET_RPC_URL)
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }
}

fn default_commitment() -> CommitmentConfig {
    CommitmentConfig::confirmed()
}

fn commitment_from_level<'de, D>(deserializer: D) -> Result<CommitmentConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let commitment = CommitmentLevel::deserialize(deserializer)?;
    Ok(CommitmentConfig { commitment })
}

/// Top-level client configuration.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DappConfig {
    pub rpc: RpcConfig,
    /// Platform fee rate, 1 basis point = 0.01%.
    #[serde(default = "default_fee_basis_points")]
    pub fee_basis_points: u64,
}

impl Default for DappConfig {
    fn default() -> Self {
        Self {
            rpc: RpcConfig::mainnet(),
            fee_basis_points: DEFAULT_FEE_BASIS_POINTS,
        }
    }
}

fn default_fee_basis_points() -> u64 {
    DEFAULT_FEE_BASIS_POINTS
}

pub type SolanaRpcClient = solana_client::nonblocking::rpc_client::RpcClient;

pub type AnyResult<T> = anyhow::Result<T>;
