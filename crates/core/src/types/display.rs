//! Display-status value types.
//!
//! A [`DisplayStatus`] is derived fresh from the current order snapshot on
//! every render. It is never cached, never mutated and never persisted.

use serde::{Deserialize, Serialize};

/// Canonical, user-facing classification of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalStatus {
    Placed,
    Approved,
    InProgress,
    Fulfilled,
    Cancelled,
    Editing,
    Pending,
    Error,
    /// Status combination this build has no mapping for.
    Unhandled,
}

/// Icon the presentation layer should render for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconHint {
    ArrowDown,
    ArrowClockwise,
    Check,
    CreditCard,
    Pencil,
    ShoppingBag,
    Warning,
    X,
}

/// Background color the presentation layer should use for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorHint {
    Green,
    Gray,
    Orange,
    Red,
    White,
}

/// Human-facing rendition of an order's status triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayStatus {
    /// Canonical classification.
    pub status: CanonicalStatus,
    /// Label to render next to the icon.
    pub label: String,
    /// Icon to render.
    pub icon: IconHint,
    /// Badge background color.
    pub color: ColorHint,
    /// Pending task shown as a hint on list items, when the order is
    /// waiting on the operator.
    pub task: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let display = DisplayStatus {
            status: CanonicalStatus::Placed,
            label: "Placed".to_owned(),
            icon: IconHint::ArrowDown,
            color: ColorHint::Orange,
            task: Some("Awaiting approval".to_owned()),
        };

        let json = serde_json::to_string(&display).unwrap();
        let parsed: DisplayStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, display);
    }

    #[test]
    fn test_hint_wire_names() {
        let json = serde_json::to_string(&IconHint::ArrowClockwise).unwrap();
        assert_eq!(json, "\"arrow_clockwise\"");

        let json = serde_json::to_string(&CanonicalStatus::Unhandled).unwrap();
        assert_eq!(json, "\"unhandled\"");
    }
}
