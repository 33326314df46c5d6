//! Taiko Wallet SDK
//!
//! Convenience facade over a JSON-RPC provider and an embedded wallet's
//! shield protection, preconfigured for the Taiko Alephia and Hekla networks.
//!
//! ## Architecture
//!
//! - **Core**: RPC client and the `TaikoWallet` facade
//! - **Domain**: Networks, client configuration, the `ShieldProtection` capability
//! - **Shared**: Error type, constants, and utilities
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use taiko_wallet_sdk::{TaikoNetwork, TaikoWallet, WalletConfig};
//!
//! // `shield` is the embedded wallet client's ShieldProtection implementation
//! let wallet = TaikoWallet::new(WalletConfig::for_network(TaikoNetwork::Hekla), Arc::new(shield)).await?;
//!
//! println!("Connected to {}", wallet.get_network_config().name);
//! let balance = wallet.get_balance("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").await?;
//! let signature = wallet.sign_message("Hello Taiko!").await?;
//!
//! wallet.disable_protection().await?;
//! ```

pub mod core;
pub mod domain;
pub mod shared;

// Re-export main types and traits
pub use crate::core::rpc::{RpcClient, RpcSigner};
pub use crate::core::wallet::{TaikoWallet, WalletConfig};

// Re-export domain entities
pub use crate::domain::{
    AppMetadata, Appearance, ClientConfig, EcosystemConfig, NetworkConfig, NetworkRegistry,
    ShieldProtection, TaikoNetwork, WindowStrategy, ECOSYSTEM_CONFIG, TAIKO_NETWORKS,
};

// Re-export shared types
pub use shared::error::WalletError;
pub use shared::types::{Balance, ChainId, SignatureHex, TransactionHash};
pub use shared::utils::{format_ether, is_address, parse_ether, parse_wei, validate_address};

/// Initialize logging from `RUST_LOG`. Safe to call more than once.
pub fn init() {
    if env_logger::try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
