//! Core SDK functionality
//!
//! This module contains the RPC layer and the wallet facade built on it.

pub mod rpc;
pub mod wallet;
