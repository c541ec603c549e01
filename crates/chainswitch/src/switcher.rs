use tokio::sync::watch;
use tracing::{debug, warn};

use crate::connection::WalletConnection;
use crate::error::{ProviderErrorKind, SwitchError};
use crate::provider::WalletProvider;
use crate::registry::ChainRegistry;
use crate::types::chain::{Chain, ChainIdHex};
use crate::types::result::SwitchResult;

/// Drives the wallet toward a target chain.
///
/// Holds the shared [`SwitchResult`] state: observers obtained through
/// [`NetworkSwitcher::subscribe`] see the loading transition immediately on
/// invocation and the terminal result on resolution. Every failure is
/// recovered into the result; nothing propagates.
pub struct NetworkSwitcher {
    registry: ChainRegistry,
    state: watch::Sender<SwitchResult>,
}

impl NetworkSwitcher {
    pub fn new(registry: ChainRegistry) -> Self {
        let (state, _) = watch::channel(SwitchResult::idle());
        Self { registry, state }
    }

    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Current snapshot of the shared state.
    pub fn result(&self) -> SwitchResult {
        self.state.borrow().clone()
    }

    /// Observe state transitions across attempts.
    pub fn subscribe(&self) -> watch::Receiver<SwitchResult> {
        self.state.subscribe()
    }

    /// Switch the wallet to `target`, registering the chain with the
    /// wallet first if it is unknown there.
    ///
    /// Checks, in order of precedence: provider availability, target
    /// support, a known current chain, and the already-on-target no-op.
    /// Only then is the switch request issued. A fresh call is a fresh
    /// attempt; no retries happen internally.
    pub async fn switch_network(
        &self,
        connection: &dyn WalletConnection,
        target: Chain,
    ) -> SwitchResult {
        self.state.send_replace(SwitchResult::pending());
        let result = self.attempt(connection, target).await;
        self.state.send_replace(result.clone());
        result
    }

    async fn attempt(&self, connection: &dyn WalletConnection, target: Chain) -> SwitchResult {
        let Some(provider) = connection.provider() else {
            warn!(chain = %target, "switch requested without a provider");
            return SwitchResult::failed(SwitchError::ProviderUnavailable);
        };
        let Some(target_id) = self.registry.chain_id(target) else {
            warn!(chain = %target, "switch requested for unsupported chain");
            return SwitchResult::failed(SwitchError::UnsupportedChain(target));
        };
        let Some(current_id) = connection.chain_id() else {
            return SwitchResult::failed(SwitchError::UnknownCurrentNetwork);
        };
        if current_id == target_id {
            debug!(chain = %target, chain_id = target_id, "wallet already on target chain");
            return SwitchResult::ok();
        }

        let hex_id = ChainIdHex::from(target_id);
        debug!(chain = %target, chain_id = %hex_id, current_id, "requesting chain switch");
        match provider.switch_chain(&hex_id).await {
            Ok(()) => SwitchResult::ok(),
            Err(err) if err.kind() == ProviderErrorKind::ChainNotAdded => {
                debug!(chain = %target, "chain unknown to wallet, falling back to add");
                self.add_chain(provider, target, &hex_id).await
            }
            Err(err) => {
                warn!(chain = %target, code = err.code, "chain switch rejected");
                SwitchResult::failed(SwitchError::Rejected(err.kind()))
            }
        }
    }

    async fn add_chain(
        &self,
        provider: &dyn WalletProvider,
        target: Chain,
        hex_id: &ChainIdHex,
    ) -> SwitchResult {
        let params = match self.registry.parameters(hex_id) {
            Some(params) if params.is_valid() => params,
            _ => {
                warn!(chain = %target, "add-chain parameters missing or incomplete");
                return SwitchResult::failed(SwitchError::InvalidChainParameters(target));
            }
        };

        match provider.add_chain(params).await {
            Ok(()) => SwitchResult::ok(),
            Err(err) => {
                warn!(chain = %target, code = err.code, "add chain rejected");
                SwitchResult::failed(SwitchError::AddChainFailed {
                    chain: target,
                    message: err.message,
                })
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn force_result(&self, result: SwitchResult) {
        self.state.send_replace(result);
    }
}
