//! JSON-RPC access to a Taiko node
//!
//! Thin layer over an ethers `Provider`. One `RpcClient` is bound to one
//! endpoint for its whole lifetime.

use crate::shared::error::WalletError;
use crate::shared::types::{SignatureHex, TransactionHash};
use ethers::providers::{Http, JsonRpcClient, Middleware, Provider};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, Signature, U256};
use ethers::utils::hex;

/// RPC client bound to a single endpoint
#[derive(Debug)]
pub struct RpcClient<P = Http> {
    provider: Provider<P>,
    url: String,
}

impl RpcClient<Http> {
    /// Create an HTTP client for the given endpoint. No request is made.
    pub fn connect(url: &str) -> Result<Self, WalletError> {
        let provider = Provider::<Http>::try_from(url)
            .map_err(|e| WalletError::config(format!("Invalid RPC URL '{}': {}", url, e)))?;

        Ok(Self {
            provider,
            url: url.to_string(),
        })
    }
}

impl<P: JsonRpcClient> RpcClient<P> {
    /// Wrap an existing provider; `url` is recorded for reporting only
    pub fn from_provider(provider: Provider<P>, url: impl Into<String>) -> Self {
        Self {
            provider,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn get_balance(&self, address: Address) -> Result<U256, WalletError> {
        log::debug!("eth_getBalance {:?} via {}", address, self.url);
        let balance = self.provider.get_balance(address, None).await?;
        Ok(balance)
    }

    pub async fn get_chain_id(&self) -> Result<u64, WalletError> {
        log::debug!("eth_chainId via {}", self.url);
        let chain_id = self.provider.get_chainid().await?;
        u64::try_from(chain_id)
            .map_err(|_| WalletError::network(format!("Chain ID out of range: {}", chain_id)))
    }

    /// Obtain the node-managed signer (first unlocked account)
    pub async fn get_signer(&self) -> Result<RpcSigner<'_, P>, WalletError> {
        log::debug!("eth_accounts via {}", self.url);
        let accounts = self.provider.get_accounts().await?;
        let address = accounts
            .first()
            .copied()
            .ok_or_else(|| WalletError::signing("No account available on the RPC node"))?;

        Ok(RpcSigner {
            provider: &self.provider,
            address,
        })
    }
}

/// Signer backed by an account the RPC node manages
#[derive(Debug)]
pub struct RpcSigner<'a, P> {
    provider: &'a Provider<P>,
    address: Address,
}

impl<'a, P: JsonRpcClient> RpcSigner<'a, P> {
    pub fn address(&self) -> Address {
        self.address
    }

    /// Submit a transaction through `eth_sendTransaction` and return its hash
    pub async fn send_transaction<T>(&self, transaction: T) -> Result<TransactionHash, WalletError>
    where
        T: Into<TypedTransaction> + Send + Sync,
    {
        let mut tx: TypedTransaction = transaction.into();
        if tx.from().is_none() {
            tx.set_from(self.address);
        }

        let pending = self
            .provider
            .send_transaction(tx, None)
            .await
            .map_err(|e| WalletError::signing(format!("Failed to send transaction: {}", e)))?;

        Ok(format!("{:?}", pending.tx_hash()))
    }

    /// Sign an arbitrary message through `personal_sign`
    pub async fn sign_message(&self, message: &str) -> Result<SignatureHex, WalletError> {
        let params = [
            format!("0x{}", hex::encode(message.as_bytes())),
            format!("{:?}", self.address),
        ];
        let raw: String = self
            .provider
            .request("personal_sign", params)
            .await
            .map_err(|e| WalletError::signing(format!("Failed to sign message: {}", e)))?;

        let bytes = hex::decode(raw.strip_prefix("0x").unwrap_or(&raw))
            .map_err(|e| WalletError::signing(format!("Malformed signature from node: {}", e)))?;
        let signature = Signature::try_from(bytes.as_slice())
            .map_err(|e| WalletError::signing(format!("Malformed signature from node: {}", e)))?;

        Ok(format!("0x{}", signature))
    }
}
