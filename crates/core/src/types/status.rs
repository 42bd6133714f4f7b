//! Order status enums and the combined status triple.
//!
//! The three status fields are independent enumerations read from an order
//! record. Each carries an `Unknown` catchall variant so that deserializing
//! an order snapshot is total: a status value introduced by a newer backend
//! lands on `Unknown` and flows through the engines as an unhandled
//! combination instead of failing the whole record.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a status field from its wire form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized {field} status: {value}")]
pub struct ParseStatusError {
    /// Which status field was being parsed.
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseStatusError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_owned(),
        }
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Placed,
    Approved,
    Cancelled,
    Draft,
    Pending,
    Editing,
    /// Any value this build does not recognize.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Every known variant, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Placed,
        Self::Approved,
        Self::Cancelled,
        Self::Draft,
        Self::Pending,
        Self::Editing,
        Self::Unknown,
    ];

    /// Wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Approved => "approved",
            Self::Cancelled => "cancelled",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Editing => "editing",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(Self::Placed),
            "approved" => Ok(Self::Approved),
            "cancelled" => Ok(Self::Cancelled),
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "editing" => Ok(Self::Editing),
            _ => Err(ParseStatusError::new("order", s)),
        }
    }
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Authorized,
    Paid,
    Unpaid,
    Free,
    Voided,
    Refunded,
    PartiallyRefunded,
    PartiallyAuthorized,
    PartiallyPaid,
    PartiallyVoided,
    /// Any value this build does not recognize.
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    /// Every known variant, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Authorized,
        Self::Paid,
        Self::Unpaid,
        Self::Free,
        Self::Voided,
        Self::Refunded,
        Self::PartiallyRefunded,
        Self::PartiallyAuthorized,
        Self::PartiallyPaid,
        Self::PartiallyVoided,
        Self::Unknown,
    ];

    /// Wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Free => "free",
            Self::Voided => "voided",
            Self::Refunded => "refunded",
            Self::PartiallyRefunded => "partially_refunded",
            Self::PartiallyAuthorized => "partially_authorized",
            Self::PartiallyPaid => "partially_paid",
            Self::PartiallyVoided => "partially_voided",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authorized" => Ok(Self::Authorized),
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            "free" => Ok(Self::Free),
            "voided" => Ok(Self::Voided),
            "refunded" => Ok(Self::Refunded),
            "partially_refunded" => Ok(Self::PartiallyRefunded),
            "partially_authorized" => Ok(Self::PartiallyAuthorized),
            "partially_paid" => Ok(Self::PartiallyPaid),
            "partially_voided" => Ok(Self::PartiallyVoided),
            _ => Err(ParseStatusError::new("payment", s)),
        }
    }
}

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    Unfulfilled,
    InProgress,
    Fulfilled,
    NotRequired,
    /// Any value this build does not recognize.
    #[serde(other)]
    Unknown,
}

impl FulfillmentStatus {
    /// Every known variant, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Unfulfilled,
        Self::InProgress,
        Self::Fulfilled,
        Self::NotRequired,
        Self::Unknown,
    ];

    /// Wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unfulfilled => "unfulfilled",
            Self::InProgress => "in_progress",
            Self::Fulfilled => "fulfilled",
            Self::NotRequired => "not_required",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FulfillmentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unfulfilled" => Ok(Self::Unfulfilled),
            "in_progress" => Ok(Self::InProgress),
            "fulfilled" => Ok(Self::Fulfilled),
            "not_required" => Ok(Self::NotRequired),
            _ => Err(ParseStatusError::new("fulfillment", s)),
        }
    }
}

/// The combination of order, payment and fulfillment status.
///
/// Used purely as a lookup key by the status engine. It is built fresh from
/// the current order snapshot and never persisted.
///
/// The `Display` form is `status:payment:fulfillment`, which is also the raw
/// key embedded in the "not handled" fallback label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusTriple {
    pub status: OrderStatus,
    pub payment: PaymentStatus,
    pub fulfillment: FulfillmentStatus,
}

impl StatusTriple {
    /// Build a triple from the three raw status fields.
    #[must_use]
    pub const fn new(
        status: OrderStatus,
        payment: PaymentStatus,
        fulfillment: FulfillmentStatus,
    ) -> Self {
        Self {
            status,
            payment,
            fulfillment,
        }
    }
}

impl fmt::Display for StatusTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.status, self.payment, self.fulfillment)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_roundtrip() {
        for status in OrderStatus::ALL {
            if status == OrderStatus::Unknown {
                continue;
            }
            let parsed: OrderStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_order_status_rejects_unrecognized() {
        let err = "not-a-status".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.field, "order");
        assert_eq!(err.value, "not-a-status");
    }

    #[test]
    fn test_payment_status_wire_roundtrip() {
        for status in PaymentStatus::ALL {
            if status == PaymentStatus::Unknown {
                continue;
            }
            let parsed: PaymentStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_fulfillment_status_wire_roundtrip() {
        for status in FulfillmentStatus::ALL {
            if status == FulfillmentStatus::Unknown {
                continue;
            }
            let parsed: FulfillmentStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_serde_unknown_is_total() {
        let status: OrderStatus = serde_json::from_str("\"some_future_status\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);

        let payment: PaymentStatus = serde_json::from_str("\"some_future_status\"").unwrap();
        assert_eq!(payment, PaymentStatus::Unknown);

        let fulfillment: FulfillmentStatus =
            serde_json::from_str("\"some_future_status\"").unwrap();
        assert_eq!(fulfillment, FulfillmentStatus::Unknown);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&PaymentStatus::PartiallyRefunded).unwrap();
        assert_eq!(json, "\"partially_refunded\"");

        let json = serde_json::to_string(&FulfillmentStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_triple_display() {
        let triple = StatusTriple::new(
            OrderStatus::Placed,
            PaymentStatus::Authorized,
            FulfillmentStatus::Unfulfilled,
        );
        assert_eq!(triple.to_string(), "placed:authorized:unfulfilled");
    }
}
