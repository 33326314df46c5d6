//! Configuration handed to the embedded wallet client
//!
//! These values are not interpreted by the SDK. They serialize to the
//! camelCase shape the hosted wallet expects.

use crate::shared::constants::*;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// How the hosted wallet window is opened
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowStrategy {
    #[default]
    Iframe,
    Popup,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemConfig {
    pub ecosystem_wallet_domain: String,
    pub window_strategy: WindowStrategy,
    pub ecosystem_id: String,
}

impl EcosystemConfig {
    /// Resolve from the process environment, loading `.env` if present
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            ecosystem_wallet_domain: value_or(WALLET_DOMAIN_ENV, DEFAULT_WALLET_DOMAIN),
            window_strategy: WindowStrategy::Iframe,
            ecosystem_id: value_or(WALLET_ECOSYSTEM_ID_ENV, DEFAULT_ECOSYSTEM_ID),
        }
    }
}

lazy_static! {
    /// Process-wide wallet client settings, resolved from the environment on first use
    pub static ref ECOSYSTEM_CONFIG: EcosystemConfig = EcosystemConfig::from_env();
}

/// Branding shown in the hosted wallet window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub logo: String,
    pub name: String,
    pub reverse_domain_name_system: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            logo: APPEARANCE_LOGO.to_string(),
            name: APPEARANCE_NAME.to_string(),
            reverse_domain_name_system: APPEARANCE_REVERSE_DNS.to_string(),
        }
    }
}

/// Metadata describing the dApp integrating the wallet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub base_config: EcosystemConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_metadata: Option<AppMetadata>,
    pub appearance: Appearance,
}

impl ClientConfig {
    pub fn new(base_config: EcosystemConfig, app_metadata: Option<AppMetadata>) -> Self {
        Self {
            base_config,
            app_metadata,
            appearance: Appearance::default(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Every field is a string, enum or option; serialization cannot fail
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
