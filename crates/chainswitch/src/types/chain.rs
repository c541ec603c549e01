use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Symbolic identifier for a supported network.
///
/// Serialized by its short uppercase symbol, which is also the
/// `Display`/`FromStr` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "AVAX")]
    Avax,
    #[serde(rename = "ARB")]
    Arb,
}

impl Chain {
    /// All supported identifiers.
    pub const ALL: &'static [Chain] = &[Chain::Eth, Chain::Avax, Chain::Arb];

    pub fn symbol(self) -> &'static str {
        match self {
            Chain::Eth => "ETH",
            Chain::Avax => "AVAX",
            Chain::Arb => "ARB",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Chain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .iter()
            .copied()
            .find(|chain| chain.symbol().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownChain(s.to_string()))
    }
}

/// `0x`-prefixed lowercase hex encoding of a numeric chain id — the wire
/// form of both provider calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainIdHex(pub String);

impl ChainIdHex {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back to the numeric chain id.
    pub fn to_u64(&self) -> Result<u64, ConfigError> {
        let digits = self
            .0
            .strip_prefix("0x")
            .or_else(|| self.0.strip_prefix("0X"))
            .ok_or_else(|| ConfigError::InvalidChainId(self.0.clone()))?;
        u64::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidChainId(self.0.clone()))
    }
}

impl From<u64> for ChainIdHex {
    fn from(id: u64) -> Self {
        Self(format!("{id:#x}"))
    }
}

impl fmt::Display for ChainIdHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for chain in Chain::ALL {
            assert_eq!(chain.symbol().parse::<Chain>().unwrap(), *chain);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("avax".parse::<Chain>().unwrap(), Chain::Avax);
        assert!("DOGE".parse::<Chain>().is_err());
    }

    #[test]
    fn test_hex_encoding() {
        let hex = ChainIdHex::from(43113);
        assert_eq!(hex.as_str(), "0xa869");
        assert_eq!(hex.to_u64().unwrap(), 43113);
    }

    #[test]
    fn test_hex_rejects_bare_digits() {
        assert!(ChainIdHex("a869".to_string()).to_u64().is_err());
        assert!(ChainIdHex("0xzz".to_string()).to_u64().is_err());
    }

    #[test]
    fn test_serde_symbol_form() {
        let json = serde_json::to_string(&Chain::Arb).unwrap();
        assert_eq!(json, "\"ARB\"");
        let back: Chain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Chain::Arb);
    }
}
