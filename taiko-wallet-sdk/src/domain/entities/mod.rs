//! Domain entities and value objects
//!
//! Networks and the configuration passed through to the wallet client.

pub mod client_config;
pub mod network;

// Re-export entities
pub use client_config::*;
pub use network::*;
