// Basic types for wallet operations
pub type TransactionHash = String;
pub type Balance = String;
pub type SignatureHex = String;
pub type ChainId = u64;

pub use ethers::types::transaction::eip2718::TypedTransaction;
pub use ethers::types::{Address, TransactionRequest, U256};
