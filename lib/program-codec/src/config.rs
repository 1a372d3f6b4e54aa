use serde::{Deserialize, Serialize};
use solana_commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use std::{str::FromStr, sync::LazyLock, time::Duration};
use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolanaNet {
    #[serde(rename = "devnet")]
    Devnet,
    #[serde(rename = "testnet")]
    Testnet,
    #[serde(rename = "mainnet-beta")]
    Mainnet,
    #[serde(rename = "localnet")]
    Localnet,
}

/// Unknown Solana network.
#[derive(Debug, ThisError)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for SolanaNet {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "devnet" => Ok(Self::Devnet),
            "testnet" => Ok(Self::Testnet),
            "mainnet-beta" | "mainnet" => Ok(Self::Mainnet),
            "localnet" | "localhost" => Ok(Self::Localnet),
            s => Err(UnknownNetwork(s.to_owned())),
        }
    }
}

fn env_url(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_owned())
}

impl SolanaNet {
    /// RPC url of the cluster, overridable with `SOLANA_{CLUSTER}_URL`.
    pub fn url(&self) -> String {
        static DEVNET: LazyLock<String> =
            LazyLock::new(|| env_url("SOLANA_DEVNET_URL", "https://api.devnet.solana.com"));
        static TESTNET: LazyLock<String> =
            LazyLock::new(|| env_url("SOLANA_TESTNET_URL", "https://api.testnet.solana.com"));
        static MAINNET: LazyLock<String> = LazyLock::new(|| {
            env_url("SOLANA_MAINNET_URL", "https://api.mainnet-beta.solana.com")
        });
        static LOCALNET: LazyLock<String> =
            LazyLock::new(|| env_url("SOLANA_LOCALNET_URL", "http://127.0.0.1:8899"));
        match self {
            SolanaNet::Devnet => DEVNET.clone(),
            SolanaNet::Testnet => TESTNET.clone(),
            SolanaNet::Mainnet => MAINNET.clone(),
            SolanaNet::Localnet => LOCALNET.clone(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SolanaNet::Devnet => "devnet",
            SolanaNet::Testnet => "testnet",
            SolanaNet::Mainnet => "mainnet-beta",
            SolanaNet::Localnet => "localnet",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        let commitment = match value {
            Commitment::Processed => CommitmentLevel::Processed,
            Commitment::Confirmed => CommitmentLevel::Confirmed,
            Commitment::Finalized => CommitmentLevel::Finalized,
        };
        CommitmentConfig { commitment }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub url: String,
    pub cluster: SolanaNet,
    #[serde(default)]
    pub commitment: Commitment,
    #[serde(default = "default_timeout_in_secs")]
    pub timeout_in_secs: u64,
}

fn default_timeout_in_secs() -> u64 {
    30
}

impl ClientConfig {
    pub fn new(cluster: SolanaNet) -> Self {
        Self {
            url: cluster.url(),
            cluster,
            commitment: Commitment::default(),
            timeout_in_secs: default_timeout_in_secs(),
        }
    }

    pub fn build_client(&self) -> RpcClient {
        RpcClient::new_with_timeout_and_commitment(
            self.url.clone(),
            Duration::from_secs(self.timeout_in_secs),
            self.commitment.into(),
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(SolanaNet::Devnet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network() {
        assert_eq!("devnet".parse::<SolanaNet>().unwrap(), SolanaNet::Devnet);
        assert_eq!("mainnet".parse::<SolanaNet>().unwrap(), SolanaNet::Mainnet);
        assert_eq!(SolanaNet::Mainnet.as_str(), "mainnet-beta");
        assert!("moon".parse::<SolanaNet>().is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config: ClientConfig = serde_json::from_value(serde_json::json!({
            "url": "http://127.0.0.1:8899",
            "cluster": "localnet",
        }))
        .unwrap();
        assert_eq!(config.commitment, Commitment::Confirmed);
        assert_eq!(config.timeout_in_secs, 30);
        assert_eq!(config.cluster, SolanaNet::Localnet);
    }

    #[test]
    fn test_commitment() {
        let config: CommitmentConfig = Commitment::Finalized.into();
        assert_eq!(config.commitment, CommitmentLevel::Finalized);
    }
}
