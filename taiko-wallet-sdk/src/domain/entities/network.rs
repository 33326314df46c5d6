//! Network entity for the wallet SDK
//!
//! The two supported Taiko networks, their fixed parameters, and the
//! registry that resolves RPC endpoints from the environment.

use crate::shared::constants::*;
use crate::shared::error::WalletError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaikoNetwork {
    /// Production network
    #[default]
    Alephia,
    /// Test network
    Hekla,
}

impl TaikoNetwork {
    pub const ALL: [TaikoNetwork; 2] = [TaikoNetwork::Alephia, TaikoNetwork::Hekla];

    pub fn chain_id(&self) -> u64 {
        match self {
            TaikoNetwork::Alephia => ALEPHIA_CHAIN_ID,
            TaikoNetwork::Hekla => HEKLA_CHAIN_ID,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaikoNetwork::Alephia => ALEPHIA_NAME,
            TaikoNetwork::Hekla => HEKLA_NAME,
        }
    }

    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            TaikoNetwork::Alephia => ALEPHIA_DEFAULT_RPC_URL,
            TaikoNetwork::Hekla => HEKLA_DEFAULT_RPC_URL,
        }
    }

    /// Environment variable that overrides the default RPC URL
    pub fn rpc_env_var(&self) -> &'static str {
        match self {
            TaikoNetwork::Alephia => MAINNET_RPC_ENV,
            TaikoNetwork::Hekla => TESTNET_RPC_ENV,
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, TaikoNetwork::Hekla)
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            TaikoNetwork::Alephia => "ALEPHIA",
            TaikoNetwork::Hekla => "HEKLA",
        }
    }
}

impl fmt::Display for TaikoNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for TaikoNetwork {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALEPHIA" => Ok(TaikoNetwork::Alephia),
            "HEKLA" => Ok(TaikoNetwork::Hekla),
            other => Err(WalletError::config(format!("Unknown network identifier: {}", other))),
        }
    }
}

/// Immutable configuration of one network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub rpc_url: String,
    pub name: String,
    pub is_testnet: bool,
}

impl NetworkConfig {
    fn resolve(network: TaikoNetwork, rpc_override: Option<String>) -> Self {
        let rpc_url = rpc_override
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| network.default_rpc_url().to_string());

        Self {
            chain_id: network.chain_id(),
            rpc_url,
            name: network.name().to_string(),
            is_testnet: network.is_testnet(),
        }
    }
}

/// The network table: exactly one config per supported network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    alephia: NetworkConfig,
    hekla: NetworkConfig,
}

impl NetworkRegistry {
    /// Build the table from the process environment, loading `.env` if present
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the table from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |network: TaikoNetwork| {
            NetworkConfig::resolve(network, lookup(network.rpc_env_var()))
        };

        Self {
            alephia: resolve(TaikoNetwork::Alephia),
            hekla: resolve(TaikoNetwork::Hekla),
        }
    }

    /// Build the table with the compiled-in defaults only
    pub fn defaults() -> Self {
        Self::from_lookup(|_| None)
    }

    pub fn get(&self, network: TaikoNetwork) -> &NetworkConfig {
        match network {
            TaikoNetwork::Alephia => &self.alephia,
            TaikoNetwork::Hekla => &self.hekla,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaikoNetwork, &NetworkConfig)> {
        TaikoNetwork::ALL.into_iter().map(move |network| (network, self.get(network)))
    }
}

lazy_static! {
    /// Process-wide network table, resolved from the environment on first use
    pub static ref TAIKO_NETWORKS: NetworkRegistry = NetworkRegistry::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_network_table() {
        let registry = NetworkRegistry::defaults();

        let alephia = registry.get(TaikoNetwork::Alephia);
        assert_eq!(alephia.chain_id, 167000);
        assert_eq!(alephia.rpc_url, "https://rpc.taiko.xyz");
        assert_eq!(alephia.name, "Taiko Alephia");
        assert!(!alephia.is_testnet);

        let hekla = registry.get(TaikoNetwork::Hekla);
        assert_eq!(hekla.chain_id, 167009);
        assert_eq!(hekla.rpc_url, "https://rpc.hekla.taiko.xyz");
        assert_eq!(hekla.name, "Taiko Hekla");
        assert!(hekla.is_testnet);
    }

    #[test]
    fn test_rpc_override() {
        let registry = NetworkRegistry::from_lookup(|key| {
            (key == "TAIKO_TESTNET_RPC").then(|| "http://localhost:8545".to_string())
        });

        assert_eq!(registry.get(TaikoNetwork::Hekla).rpc_url, "http://localhost:8545");
        assert_eq!(registry.get(TaikoNetwork::Hekla).chain_id, 167009);
        assert_eq!(registry.get(TaikoNetwork::Alephia).rpc_url, "https://rpc.taiko.xyz");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let registry = NetworkRegistry::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(registry.get(TaikoNetwork::Alephia).rpc_url, "https://rpc.taiko.xyz");
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("HEKLA".parse::<TaikoNetwork>().unwrap(), TaikoNetwork::Hekla);
        assert_eq!("alephia".parse::<TaikoNetwork>().unwrap(), TaikoNetwork::Alephia);

        let err = "GOERLI".parse::<TaikoNetwork>().unwrap_err();
        assert!(matches!(err, WalletError::Config(_)));
    }

    #[test]
    fn test_registry_iter_covers_both_networks() {
        let registry = NetworkRegistry::defaults();
        let ids: Vec<u64> = registry.iter().map(|(_, config)| config.chain_id).collect();
        assert_eq!(ids, vec![167000, 167009]);
    }
}
