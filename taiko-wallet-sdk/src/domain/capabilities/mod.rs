//! Capabilities supplied by external collaborators

pub mod shield;

pub use shield::*;
