//! Operator trigger actions.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An operator-invokable state transition exposed by the UI.
///
/// The set is closed: these are the only transitions the dashboard can offer.
/// Which of them are currently legal for an order is decided by the status
/// engine; the actual transition is performed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerAction {
    Approve,
    Cancel,
    Capture,
    Refund,
    Archive,
    Unarchive,
    Return,
    StartEditing,
    StopEditing,
}

impl TriggerAction {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Approve,
        Self::Cancel,
        Self::Capture,
        Self::Refund,
        Self::Archive,
        Self::Unarchive,
        Self::Return,
        Self::StartEditing,
        Self::StopEditing,
    ];

    /// Wire form of the action identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Cancel => "cancel",
            Self::Capture => "capture",
            Self::Refund => "refund",
            Self::Archive => "archive",
            Self::Unarchive => "unarchive",
            Self::Return => "return",
            Self::StartEditing => "start_editing",
            Self::StopEditing => "stop_editing",
        }
    }
}

impl fmt::Display for TriggerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
