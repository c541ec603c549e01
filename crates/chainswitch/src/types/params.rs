use serde::{Deserialize, Serialize};

use super::chain::ChainIdHex;
use crate::error::ConfigError;

/// Native currency descriptor of an add-chain payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,

    pub symbol: String,

    pub decimals: u8,
}

/// Parameters a wallet needs to register a network
/// (EIP-3085 `wallet_addEthereumChain`).
///
/// The JSON form is the camelCase payload passed to the provider verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainParameters {
    #[serde(rename = "chainId")]
    pub chain_id: ChainIdHex,

    #[serde(rename = "chainName")]
    pub chain_name: String,

    #[serde(rename = "nativeCurrency")]
    pub native_currency: NativeCurrency,

    #[serde(rename = "rpcUrls")]
    pub rpc_urls: Vec<String>,

    #[serde(rename = "blockExplorerUrls")]
    pub block_explorer_urls: Vec<String>,
}

impl ChainParameters {
    /// Parse parameters from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize parameters to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Completeness check. Must pass before any add-chain request is issued.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chain_id.to_u64()?;

        if self.chain_name.is_empty() {
            return Err(ConfigError::MissingField("chainName"));
        }
        if self.native_currency.name.is_empty() {
            return Err(ConfigError::MissingField("nativeCurrency.name"));
        }
        if self.native_currency.symbol.is_empty() {
            return Err(ConfigError::MissingField("nativeCurrency.symbol"));
        }
        if self.rpc_urls.is_empty() || self.rpc_urls.iter().any(|url| url.is_empty()) {
            return Err(ConfigError::MissingField("rpcUrls"));
        }
        if self.block_explorer_urls.is_empty()
            || self.block_explorer_urls.iter().any(|url| url.is_empty())
        {
            return Err(ConfigError::MissingField("blockExplorerUrls"));
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
