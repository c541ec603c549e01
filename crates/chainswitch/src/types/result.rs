use std::fmt;

/// Outcome of a network switch attempt.
///
/// Recreated on every invocation and superseded by the next; a terminal
/// result always has `is_loading == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchResult {
    pub success: bool,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl SwitchResult {
    /// State before any attempt has been made.
    pub fn idle() -> Self {
        Self {
            success: false,
            error: None,
            is_loading: false,
        }
    }

    /// State between request issuance and resolution.
    pub fn pending() -> Self {
        Self {
            success: false,
            error: None,
            is_loading: true,
        }
    }

    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
            is_loading: false,
        }
    }

    pub fn failed(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            is_loading: false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading
    }
}

impl Default for SwitchResult {
    fn default() -> Self {
        Self::idle()
    }
}
