use std::sync::Arc;

use crate::provider::WalletProvider;

/// Read-only view of the external wallet connection.
///
/// Owned and mutated by the wallet-connection collaborator; this crate
/// only reads it, always through this interface rather than a global.
pub trait WalletConnection {
    /// Numeric chain id the wallet is currently on, or `None` when
    /// disconnected.
    fn chain_id(&self) -> Option<u64>;

    /// The provider request capability, if one is available.
    fn provider(&self) -> Option<&dyn WalletProvider>;
}

/// Static in-memory connection state for tests and embedding hosts.
#[derive(Default)]
pub struct StaticConnection {
    chain_id: Option<u64>,
    provider: Option<Arc<dyn WalletProvider>>,
}

impl StaticConnection {
    /// A connection with no provider and no chain id.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// A connection with a provider on the given chain.
    pub fn connected(chain_id: u64, provider: Arc<dyn WalletProvider>) -> Self {
        Self {
            chain_id: Some(chain_id),
            provider: Some(provider),
        }
    }

    /// A provider whose active chain is unknown (wallet locked or still
    /// initializing).
    pub fn without_chain_id(provider: Arc<dyn WalletProvider>) -> Self {
        Self {
            chain_id: None,
            provider: Some(provider),
        }
    }

    pub fn set_chain_id(&mut self, chain_id: Option<u64>) {
        self.chain_id = chain_id;
    }
}

impl WalletConnection for StaticConnection {
    fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    fn provider(&self) -> Option<&dyn WalletProvider> {
        self.provider.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ScriptedProvider;

    #[test]
    fn test_disconnected_exposes_nothing() {
        let connection = StaticConnection::disconnected();
        assert_eq!(connection.chain_id(), None);
        assert!(connection.provider().is_none());
    }

    #[test]
    fn test_connected_exposes_both() {
        let connection = StaticConnection::connected(1, Arc::new(ScriptedProvider::new()));
        assert_eq!(connection.chain_id(), Some(1));
        assert!(connection.provider().is_some());
    }
}
