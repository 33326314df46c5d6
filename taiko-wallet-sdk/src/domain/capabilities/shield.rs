//! Shield protection capability
//!
//! The embedded wallet client owns the actual protection mechanism. The SDK
//! only needs to switch it on and off, so it depends on this trait and the
//! caller injects the implementation.

use crate::shared::error::WalletError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Enable/disable access to the wallet client's shield
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ShieldProtection: Send + Sync {
    /// Turn protection on. Completes once the client confirms.
    async fn enable(&self) -> Result<(), WalletError>;

    /// Turn protection off. Completes once the client confirms.
    async fn disable(&self) -> Result<(), WalletError>;
}
