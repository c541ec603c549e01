use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::chain::Chain;

/// Errors in the static chain configuration tables.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("unknown chain identifier: {0}")]
    UnknownChain(String),

    #[error("invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Structured error returned by the wallet provider, per EIP-1193.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("provider error {code}: {message}")]
pub struct ProviderRpcError {
    pub code: i64,
    pub message: String,
}

impl ProviderRpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ProviderErrorKind {
        ProviderErrorKind::from_code(self.code)
    }
}

/// Closed taxonomy over the EIP-1193 provider error codes.
///
/// <https://eips.ethereum.org/EIPS/eip-1193#provider-errors>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    /// 4902 — the chain must be registered before it can be switched to.
    ChainNotAdded,
    /// 4001
    UserRejected,
    /// 4100
    Unauthorized,
    /// 4200
    UnsupportedMethod,
    /// 4900
    Disconnected,
    /// 4901
    ChainDisconnected,
    /// Any code outside the taxonomy.
    Unknown,
}

impl ProviderErrorKind {
    /// Total mapping; unrecognized codes land on [`ProviderErrorKind::Unknown`].
    pub fn from_code(code: i64) -> Self {
        match code {
            4902 => ProviderErrorKind::ChainNotAdded,
            4001 => ProviderErrorKind::UserRejected,
            4100 => ProviderErrorKind::Unauthorized,
            4200 => ProviderErrorKind::UnsupportedMethod,
            4900 => ProviderErrorKind::Disconnected,
            4901 => ProviderErrorKind::ChainDisconnected,
            _ => ProviderErrorKind::Unknown,
        }
    }

    /// Fixed human-readable message for each kind.
    pub fn message(self) -> &'static str {
        match self {
            ProviderErrorKind::ChainNotAdded => "network not added to wallet, adding network...",
            ProviderErrorKind::UserRejected => "user rejected the network switch request",
            ProviderErrorKind::Unauthorized => "not authorized to perform this action",
            ProviderErrorKind::UnsupportedMethod => "method not supported by wallet",
            ProviderErrorKind::Disconnected => "wallet is disconnected",
            ProviderErrorKind::ChainDisconnected => "network is disconnected",
            ProviderErrorKind::Unknown => "an unknown provider error occurred",
        }
    }
}

/// Failures surfaced through `SwitchResult::error`.
///
/// Every variant is recovered locally into the result object; none
/// propagate as panics or process failures.
#[derive(Debug, Clone, Error)]
pub enum SwitchError {
    #[error("web3 provider not available; connect a wallet first")]
    ProviderUnavailable,

    #[error("chain {0} is not supported")]
    UnsupportedChain(Chain),

    #[error("unable to determine current network")]
    UnknownCurrentNetwork,

    #[error("invalid chain parameters for {0}")]
    InvalidChainParameters(Chain),

    #[error("failed to add {chain} network: {message}")]
    AddChainFailed { chain: Chain, message: String },

    #[error("{}", .0.message())]
    Rejected(ProviderErrorKind),
}
