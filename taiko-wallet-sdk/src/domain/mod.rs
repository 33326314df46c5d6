//! Domain layer - entities and collaborator capabilities
//!
//! This module contains the value objects the SDK is configured with and the
//! traits through which it reaches the embedded wallet client.

pub mod capabilities;
pub mod entities;

// Re-export domain components
pub use capabilities::*;
pub use entities::*;
