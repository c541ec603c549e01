pub mod alert;
pub mod connection;
pub mod error;
pub mod provider;
pub mod registry;
pub mod switcher;
pub mod types;

// Re-exports for convenience
pub use alert::{AlertState, NetworkAlert, ERROR_NOTICE_TTL, MISMATCH_BANNER};
pub use connection::{StaticConnection, WalletConnection};
pub use error::{ConfigError, ProviderErrorKind, ProviderRpcError, SwitchError};
pub use provider::{RecordedCall, ScriptedProvider, WalletProvider};
pub use registry::ChainRegistry;
pub use switcher::NetworkSwitcher;
pub use types::chain::{Chain, ChainIdHex};
pub use types::params::{ChainParameters, NativeCurrency};
pub use types::result::SwitchResult;

/// Run a single switch attempt against `registry`.
///
/// This is the one-shot entry point: it drives the same flow as
/// [`NetworkSwitcher::switch_network`] without keeping observable state
/// around. Hosts that render loading indicators should hold a
/// [`NetworkSwitcher`] (or a [`NetworkAlert`]) instead.
pub async fn switch_network(
    connection: &dyn WalletConnection,
    registry: &ChainRegistry,
    target: Chain,
) -> SwitchResult {
    NetworkSwitcher::new(registry.clone())
        .switch_network(connection, target)
        .await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::provider::{ADD_CHAIN_METHOD, SWITCH_CHAIN_METHOD};

    const SEPOLIA: u64 = 11155111;
    const FUJI: u64 = 43113;

    #[tokio::test]
    async fn test_one_shot_switch() {
        let provider = Arc::new(ScriptedProvider::new());
        let connection = StaticConnection::connected(SEPOLIA, provider.clone());

        let result = switch_network(&connection, &ChainRegistry::builtin(), Chain::Avax).await;
        assert!(result.success);
        assert_eq!(provider.call_methods(), vec![SWITCH_CHAIN_METHOD]);
    }

    #[tokio::test]
    async fn test_one_shot_noop_when_already_on_target() {
        let provider = Arc::new(ScriptedProvider::new());
        let connection = StaticConnection::connected(FUJI, provider.clone());

        let result = switch_network(&connection, &ChainRegistry::builtin(), Chain::Avax).await;
        assert!(result.success);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_full_alert_pipeline_with_add_fallback() {
        let provider = Arc::new(ScriptedProvider::new());
        provider.script_switch(Err(ProviderRpcError::new(4902, "Unrecognized chain ID")));
        let connection = StaticConnection::connected(SEPOLIA, provider.clone());

        let mut alert =
            NetworkAlert::new(Chain::Arb, NetworkSwitcher::new(ChainRegistry::builtin()))
                .with_class_name("network-alert");
        assert_eq!(alert.class_name(), Some("network-alert"));
        assert_eq!(alert.banner_text(), MISMATCH_BANNER);
        assert_eq!(
            alert.state(&connection),
            AlertState::Visible { switching: false }
        );

        let result = alert.trigger_switch(&connection).await;
        assert!(result.success);
        assert!(alert.error_notice().is_none());
        assert_eq!(
            provider.call_methods(),
            vec![SWITCH_CHAIN_METHOD, ADD_CHAIN_METHOD]
        );

        // wallet lands on Arbitrum Sepolia; banner hides
        let connection = StaticConnection::connected(421614, provider);
        assert_eq!(alert.state(&connection), AlertState::Hidden);
    }

    #[tokio::test]
    async fn test_observers_see_terminal_state() {
        let switcher = NetworkSwitcher::new(ChainRegistry::builtin());
        let mut rx = switcher.subscribe();

        let provider = Arc::new(ScriptedProvider::new());
        let connection = StaticConnection::connected(SEPOLIA, provider);
        switcher.switch_network(&connection, Chain::Eth).await;

        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen, SwitchResult::ok());
    }
}
