use std::time::{Duration, Instant};

use tracing::debug;

use crate::connection::WalletConnection;
use crate::switcher::NetworkSwitcher;
use crate::types::chain::Chain;
use crate::types::result::SwitchResult;

/// Warning copy shown while the wallet is on the wrong network.
pub const MISMATCH_BANNER: &str = "Source chain and selected network in wallet must be the same";

/// How long an error notice stays up before auto-dismissing.
pub const ERROR_NOTICE_TTL: Duration = Duration::from_secs(6);

/// Visibility of the alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    Hidden,
    Visible { switching: bool },
}

/// Transient error notification with a fixed auto-hide window.
#[derive(Debug, Clone)]
struct ErrorNotice {
    message: String,
    raised_at: Instant,
}

impl ErrorNotice {
    fn is_live(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) < ERROR_NOTICE_TTL
    }
}

/// Observable alert over one target chain.
///
/// UI-technology-free rendering of the network mismatch warning: a host
/// reads [`NetworkAlert::state`] to decide what to draw, wires its action
/// control to [`NetworkAlert::trigger_switch`], and shows
/// [`NetworkAlert::error_notice`] while it is live. Per-instance state;
/// nothing is shared across alerts.
pub struct NetworkAlert {
    chain: Chain,
    switcher: NetworkSwitcher,
    notice: Option<ErrorNotice>,
    class_name: Option<String>,
}

impl NetworkAlert {
    pub fn new(chain: Chain, switcher: NetworkSwitcher) -> Self {
        Self {
            chain,
            switcher,
            notice: None,
            class_name: None,
        }
    }

    /// Opaque styling hook carried through to the host.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn switcher(&self) -> &NetworkSwitcher {
        &self.switcher
    }

    /// Banner visibility for the current wallet state.
    ///
    /// Hidden while the wallet reports no chain at all, and while it is
    /// already on the target chain.
    pub fn state(&self, connection: &dyn WalletConnection) -> AlertState {
        let Some(current_id) = connection.chain_id() else {
            return AlertState::Hidden;
        };
        match self.switcher.registry().chain_id(self.chain) {
            Some(target_id) if target_id == current_id => AlertState::Hidden,
            _ => AlertState::Visible {
                switching: self.switcher.result().is_loading,
            },
        }
    }

    pub fn banner_text(&self) -> &'static str {
        MISMATCH_BANNER
    }

    /// The single triggerable action.
    ///
    /// A no-op returning the pending snapshot while a switch is already
    /// in flight, so a host cannot start overlapping attempts through the
    /// same alert. A terminal result carrying an error raises the notice.
    pub async fn trigger_switch(&mut self, connection: &dyn WalletConnection) -> SwitchResult {
        let snapshot = self.switcher.result();
        if snapshot.is_loading {
            debug!(chain = %self.chain, "switch already in flight, ignoring trigger");
            return snapshot;
        }

        let result = self.switcher.switch_network(connection, self.chain).await;
        if let Some(message) = &result.error {
            self.notice = Some(ErrorNotice {
                message: message.clone(),
                raised_at: Instant::now(),
            });
        }
        result
    }

    /// Text of the error notice, or `None` once dismissed or expired.
    pub fn error_notice(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|notice| notice.is_live(Instant::now()))
            .map(|notice| notice.message.as_str())
    }

    /// Dismiss the notice before its auto-hide deadline.
    pub fn dismiss_error(&mut self) {
        self.notice = None;
    }
}
