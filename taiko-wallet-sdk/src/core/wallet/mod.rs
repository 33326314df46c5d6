//! Taiko wallet facade
//!
//! Binds one network's RPC endpoint to a shield protection capability and
//! gates signing and sending on the shield being enabled.

use crate::core::rpc::RpcClient;
use crate::domain::{
    AppMetadata, ClientConfig, NetworkConfig, NetworkRegistry, ShieldProtection, TaikoNetwork,
    ECOSYSTEM_CONFIG, TAIKO_NETWORKS,
};
use crate::shared::constants::{DEFAULT_NETWORK_ENV, ENABLE_SHIELD_ENV};
use crate::shared::error::WalletError;
use crate::shared::types::{Balance, ChainId, SignatureHex, TransactionHash};
use crate::shared::utils::validate_address;
use ethers::providers::{Http, JsonRpcClient};
use ethers::types::transaction::eip2718::TypedTransaction;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Construction options for [`TaikoWallet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    pub network: TaikoNetwork,
    pub app_metadata: Option<AppMetadata>,
    pub enable_protection: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            network: TaikoNetwork::Alephia,
            app_metadata: None,
            enable_protection: true,
        }
    }
}

impl WalletConfig {
    pub fn for_network(network: TaikoNetwork) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// Read the default network and shield flag from the environment
    pub fn from_env() -> Result<Self, WalletError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, WalletError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = match lookup(DEFAULT_NETWORK_ENV) {
            Some(value) => value.parse()?,
            None => TaikoNetwork::default(),
        };

        let enable_protection = match lookup(ENABLE_SHIELD_ENV) {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => {
                    return Err(WalletError::config(format!(
                        "{} must be true or false, got '{}'",
                        ENABLE_SHIELD_ENV, other
                    )))
                }
            },
            None => true,
        };

        Ok(Self {
            network,
            app_metadata: None,
            enable_protection,
        })
    }
}

/// Wallet facade for one Taiko network.
///
/// Cloning is cheap and clones share the RPC client and the protection flag,
/// so a clone can be handed to a task or callback.
pub struct TaikoWallet<P = Http> {
    network: TaikoNetwork,
    network_config: NetworkConfig,
    client_config: ClientConfig,
    protection_enabled: Arc<AtomicBool>,
    shield: Arc<dyn ShieldProtection>,
    rpc: Arc<RpcClient<P>>,
}

impl<P> Clone for TaikoWallet<P> {
    fn clone(&self) -> Self {
        Self {
            network: self.network,
            network_config: self.network_config.clone(),
            client_config: self.client_config.clone(),
            protection_enabled: Arc::clone(&self.protection_enabled),
            shield: Arc::clone(&self.shield),
            rpc: Arc::clone(&self.rpc),
        }
    }
}

impl TaikoWallet<Http> {
    /// Create a wallet using the process-wide network table
    pub async fn new(config: WalletConfig, shield: Arc<dyn ShieldProtection>) -> Result<Self, WalletError> {
        Self::with_registry(config, &TAIKO_NETWORKS, shield).await
    }

    /// Create a wallet resolving its endpoint from the given network table
    pub async fn with_registry(
        config: WalletConfig,
        registry: &NetworkRegistry,
        shield: Arc<dyn ShieldProtection>,
    ) -> Result<Self, WalletError> {
        let network_config = registry.get(config.network).clone();
        let rpc = RpcClient::connect(&network_config.rpc_url)?;
        let client_config = ClientConfig::new(ECOSYSTEM_CONFIG.clone(), config.app_metadata.clone());

        Self::assemble(config, network_config, client_config, rpc, shield).await
    }
}

impl<P: JsonRpcClient> TaikoWallet<P> {
    async fn assemble(
        config: WalletConfig,
        network_config: NetworkConfig,
        client_config: ClientConfig,
        rpc: RpcClient<P>,
        shield: Arc<dyn ShieldProtection>,
    ) -> Result<Self, WalletError> {
        log::info!("{}", startup_summary(&network_config));
        log::debug!("RPC endpoint: {}", rpc.url());

        let wallet = Self {
            network: config.network,
            network_config,
            client_config,
            protection_enabled: Arc::new(AtomicBool::new(false)),
            shield,
            rpc: Arc::new(rpc),
        };

        if config.enable_protection {
            wallet.enable_protection().await?;
        }

        Ok(wallet)
    }

    pub fn get_network(&self) -> TaikoNetwork {
        self.network
    }

    pub fn get_network_config(&self) -> &NetworkConfig {
        &self.network_config
    }

    /// Configuration to hand to the embedded wallet client
    pub fn client_config(&self) -> &ClientConfig {
        &self.client_config
    }

    /// Balance of `address` in wei, as a base-10 string
    pub async fn get_balance(&self, address: &str) -> Result<Balance, WalletError> {
        let address = validate_address(address)?;
        let balance = self.rpc.get_balance(address).await?;
        Ok(balance.to_string())
    }

    pub async fn get_chain_id(&self) -> Result<ChainId, WalletError> {
        self.rpc.get_chain_id().await
    }

    pub async fn enable_protection(&self) -> Result<(), WalletError> {
        if self.is_protection_enabled() {
            return Ok(());
        }

        self.shield.enable().await?;
        self.protection_enabled.store(true, Ordering::SeqCst);
        log::info!("Shield protection enabled on {}", self.network);
        Ok(())
    }

    pub async fn disable_protection(&self) -> Result<(), WalletError> {
        if !self.is_protection_enabled() {
            return Ok(());
        }

        self.shield.disable().await?;
        self.protection_enabled.store(false, Ordering::SeqCst);
        log::info!("Shield protection disabled on {}", self.network);
        Ok(())
    }

    pub fn is_protection_enabled(&self) -> bool {
        self.protection_enabled.load(Ordering::SeqCst)
    }

    /// Send a transaction through the node signer. Requires protection.
    pub async fn send_transaction<T>(&self, transaction: T) -> Result<TransactionHash, WalletError>
    where
        T: Into<TypedTransaction> + Send + Sync,
    {
        self.require_protection("send transactions")?;

        let signer = self.rpc.get_signer().await?;
        let tx_hash = signer.send_transaction(transaction).await?;
        log::info!("Transaction {} submitted on {}", tx_hash, self.network);
        Ok(tx_hash)
    }

    /// Sign a message through the node signer. Requires protection.
    pub async fn sign_message(&self, message: &str) -> Result<SignatureHex, WalletError> {
        self.require_protection("sign messages")?;

        let signer = self.rpc.get_signer().await?;
        signer.sign_message(message).await
    }

    fn require_protection(&self, operation: &str) -> Result<(), WalletError> {
        if self.is_protection_enabled() {
            return Ok(());
        }
        log::warn!("Refusing to {} with shield protection disabled", operation);
        Err(WalletError::precondition(format!(
            "Shield protection must be enabled to {}",
            operation
        )))
    }
}

/// Startup log line. Never includes the endpoint URL.
fn startup_summary(network_config: &NetworkConfig) -> String {
    format!(
        "Initializing Taiko wallet on {} (chain {})",
        network_config.name, network_config.chain_id
    )
}
