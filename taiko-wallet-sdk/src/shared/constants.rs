//! Constants for the wallet SDK
//!
//! Network presets, environment variable names and the defaults passed
//! through to the embedded wallet client.

// Taiko Alephia (mainnet)
pub const ALEPHIA_CHAIN_ID: u64 = 167000;
pub const ALEPHIA_NAME: &str = "Taiko Alephia";
pub const ALEPHIA_DEFAULT_RPC_URL: &str = "https://rpc.taiko.xyz";

// Taiko Hekla (testnet)
pub const HEKLA_CHAIN_ID: u64 = 167009;
pub const HEKLA_NAME: &str = "Taiko Hekla";
pub const HEKLA_DEFAULT_RPC_URL: &str = "https://rpc.hekla.taiko.xyz";

// RPC endpoint overrides
pub const MAINNET_RPC_ENV: &str = "TAIKO_MAINNET_RPC";
pub const TESTNET_RPC_ENV: &str = "TAIKO_TESTNET_RPC";

// Facade defaults
pub const DEFAULT_NETWORK_ENV: &str = "TAIKO_WALLET_NETWORK";
pub const ENABLE_SHIELD_ENV: &str = "TAIKO_WALLET_ENABLE_SHIELD";

// Embedded wallet client
pub const WALLET_DOMAIN_ENV: &str = "WALLET_DOMAIN";
pub const WALLET_ECOSYSTEM_ID_ENV: &str = "WALLET_ECOSYSTEM_ID";
pub const DEFAULT_WALLET_DOMAIN: &str = "https://wallet.taiko.xyz";
pub const DEFAULT_ECOSYSTEM_ID: &str = "taiko-ecosystem";

// Appearance of the hosted wallet window
pub const APPEARANCE_LOGO: &str = "https://taiko.xyz/logo.png";
pub const APPEARANCE_NAME: &str = "Taiko Wallet";
pub const APPEARANCE_REVERSE_DNS: &str = "xyz.taiko.wallet";

// Validation constants
pub const ADDRESS_HEX_LENGTH: usize = 40; // without 0x prefix
