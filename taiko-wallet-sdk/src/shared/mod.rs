//! Shared types, utilities, and constants
//!
//! This module contains the error type, constants and helpers used
//! throughout the SDK.

pub mod constants;
pub mod error;
pub mod types;
pub mod utils;

// Re-export shared components
pub use constants::*;
pub use error::*;
pub use types::*;
pub use utils::*;
