use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ProviderRpcError;
use crate::types::chain::ChainIdHex;
use crate::types::params::ChainParameters;

/// RPC method name of the switch call (EIP-3326).
pub const SWITCH_CHAIN_METHOD: &str = "wallet_switchEthereumChain";
/// RPC method name of the add call (EIP-3085).
pub const ADD_CHAIN_METHOD: &str = "wallet_addEthereumChain";

/// Request capability of a browser wallet, reduced to the two logical
/// calls this feature needs.
///
/// Both calls suspend until the wallet responds or rejects; a rejection
/// carries the provider's structured error.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet to make `chain_id` its active chain.
    async fn switch_chain(&self, chain_id: &ChainIdHex) -> Result<(), ProviderRpcError>;

    /// Ask the wallet to register a new network. Switching to it is
    /// implied on success. Callers must validate `params` first.
    async fn add_chain(&self, params: &ChainParameters) -> Result<(), ProviderRpcError>;
}

/// One provider call as issued, in order: method name plus JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub params: Value,
}

/// Scripted in-memory provider for testing.
///
/// Outcomes are queued per method and consumed in order; an empty queue
/// answers success. Every issued call is recorded.
#[derive(Default)]
pub struct ScriptedProvider {
    inner: Mutex<Script>,
}

#[derive(Default)]
struct Script {
    switch_outcomes: VecDeque<Result<(), ProviderRpcError>>,
    add_outcomes: VecDeque<Result<(), ProviderRpcError>>,
    calls: Vec<RecordedCall>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next switch call.
    pub fn script_switch(&self, outcome: Result<(), ProviderRpcError>) {
        if let Ok(mut script) = self.inner.lock() {
            script.switch_outcomes.push_back(outcome);
        }
    }

    /// Queue the outcome of the next add call.
    pub fn script_add(&self, outcome: Result<(), ProviderRpcError>) {
        if let Ok(mut script) = self.inner.lock() {
            script.add_outcomes.push_back(outcome);
        }
    }

    /// Every call issued so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner
            .lock()
            .map(|script| script.calls.clone())
            .unwrap_or_default()
    }

    /// Method names of the issued calls, in order.
    pub fn call_methods(&self) -> Vec<&'static str> {
        self.calls().iter().map(|call| call.method).collect()
    }

    fn record_and_answer(
        &self,
        method: &'static str,
        params: Value,
        pick: impl FnOnce(&mut Script) -> Option<Result<(), ProviderRpcError>>,
    ) -> Result<(), ProviderRpcError> {
        let mut script = self
            .inner
            .lock()
            .map_err(|e| ProviderRpcError::new(-32603, format!("script lock poisoned: {e}")))?;
        script.calls.push(RecordedCall { method, params });
        pick(&mut script).unwrap_or(Ok(()))
    }
}

#[async_trait]
impl WalletProvider for ScriptedProvider {
    async fn switch_chain(&self, chain_id: &ChainIdHex) -> Result<(), ProviderRpcError> {
        self.record_and_answer(
            SWITCH_CHAIN_METHOD,
            json!([{ "chainId": chain_id.as_str() }]),
            |script| script.switch_outcomes.pop_front(),
        )
    }

    async fn add_chain(&self, params: &ChainParameters) -> Result<(), ProviderRpcError> {
        let payload = serde_json::to_value(params)
            .map_err(|e| ProviderRpcError::new(-32603, format!("payload encoding: {e}")))?;
        self.record_and_answer(ADD_CHAIN_METHOD, json!([payload]), |script| {
            script.add_outcomes.pop_front()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_outcomes_consumed_in_order() {
        let provider = ScriptedProvider::new();
        provider.script_switch(Err(ProviderRpcError::new(4001, "rejected")));
        provider.script_switch(Ok(()));

        let hex = ChainIdHex::from(1);
        assert_eq!(provider.switch_chain(&hex).await.unwrap_err().code, 4001);
        assert!(provider.switch_chain(&hex).await.is_ok());
        // exhausted script answers success
        assert!(provider.switch_chain(&hex).await.is_ok());
    }

    #[tokio::test]
    async fn test_calls_record_wire_payloads() {
        let provider = ScriptedProvider::new();
        let hex = ChainIdHex::from(43113);
        provider.switch_chain(&hex).await.unwrap();

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, SWITCH_CHAIN_METHOD);
        assert_eq!(calls[0].params, json!([{ "chainId": "0xa869" }]));
    }
}
