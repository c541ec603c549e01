use std::collections::HashMap;

use crate::types::chain::{Chain, ChainIdHex};
use crate::types::params::{ChainParameters, NativeCurrency};

/// Static chain configuration: the identifier → numeric id table and the
/// hex id → add-chain parameter table.
///
/// [`ChainRegistry::builtin`] covers the supported set; callers may build
/// their own with [`ChainRegistry::empty`] and the insert methods.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chain_ids: HashMap<Chain, u64>,
    parameters: HashMap<ChainIdHex, ChainParameters>,
}

impl ChainRegistry {
    pub fn empty() -> Self {
        Self {
            chain_ids: HashMap::new(),
            parameters: HashMap::new(),
        }
    }

    /// Registry covering every built-in supported chain.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (chain, id, name, currency_name, symbol, rpc, explorer) in [
            (
                Chain::Eth,
                11155111u64,
                "Ethereum Sepolia",
                "Sepolia Ether",
                "ETH",
                "https://rpc.sepolia.org",
                "https://sepolia.etherscan.io",
            ),
            (
                Chain::Avax,
                43113,
                "Avalanche Fuji",
                "Avalanche",
                "AVAX",
                "https://api.avax-test.network/ext/bc/C/rpc",
                "https://testnet.snowtrace.io",
            ),
            (
                Chain::Arb,
                421614,
                "Arbitrum Sepolia",
                "Ether",
                "ETH",
                "https://sepolia-rollup.arbitrum.io/rpc",
                "https://sepolia.arbiscan.io",
            ),
        ] {
            registry.insert_chain_id(chain, id);
            registry.insert_parameters(ChainParameters {
                chain_id: ChainIdHex::from(id),
                chain_name: name.to_string(),
                native_currency: NativeCurrency {
                    name: currency_name.to_string(),
                    symbol: symbol.to_string(),
                    decimals: 18,
                },
                rpc_urls: vec![rpc.to_string()],
                block_explorer_urls: vec![explorer.to_string()],
            });
        }
        registry
    }

    /// Map an identifier to its numeric chain id.
    pub fn insert_chain_id(&mut self, chain: Chain, id: u64) {
        self.chain_ids.insert(chain, id);
    }

    /// Register add-chain parameters, keyed by their own hex chain id.
    pub fn insert_parameters(&mut self, params: ChainParameters) {
        self.parameters.insert(params.chain_id.clone(), params);
    }

    pub fn chain_id(&self, chain: Chain) -> Option<u64> {
        self.chain_ids.get(&chain).copied()
    }

    pub fn hex_chain_id(&self, chain: Chain) -> Option<ChainIdHex> {
        self.chain_id(chain).map(ChainIdHex::from)
    }

    pub fn parameters(&self, chain_id: &ChainIdHex) -> Option<&ChainParameters> {
        self.parameters.get(chain_id)
    }

    /// Identifiers present in the id table.
    pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
        self.chain_ids.keys().copied()
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_mapping_is_total_and_injective() {
        let registry = ChainRegistry::builtin();
        let mut seen = HashSet::new();
        for chain in Chain::ALL {
            let id = registry.chain_id(*chain).expect("built-in chain has an id");
            assert!(seen.insert(id), "chain id {id} assigned twice");
        }
    }

    #[test]
    fn test_builtin_parameters_cover_every_chain_and_validate() {
        let registry = ChainRegistry::builtin();
        for chain in Chain::ALL {
            let hex = registry.hex_chain_id(*chain).unwrap();
            let params = registry.parameters(&hex).expect("parameters present");
            params.validate().expect("built-in parameters are complete");
            assert_eq!(params.chain_id, hex);
        }
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = ChainRegistry::empty();
        assert_eq!(registry.chain_id(Chain::Eth), None);
        assert!(registry.parameters(&ChainIdHex::from(1)).is_none());
        assert_eq!(registry.chains().count(), 0);
    }

    #[test]
    fn test_known_numeric_ids() {
        let registry = ChainRegistry::builtin();
        assert_eq!(registry.chain_id(Chain::Eth), Some(11155111));
        assert_eq!(registry.chain_id(Chain::Avax), Some(43113));
        assert_eq!(registry.chain_id(Chain::Arb), Some(421614));
    }
}
