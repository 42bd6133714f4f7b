//! The filter representation adapter.
//!
//! A filter selection can be expressed in three shapes:
//!
//! - App form state ([`FilterFormValues`])
//! - URL query string (`String`)
//! - Backend query object ([`SdkFilter`])
//!
//! The [`adapters`] submodule converts losslessly between them, with
//! validity filtering and default enforcement baked into every path so that
//! no caller can construct an invalid backend query. All conversions take
//! their input explicitly (the query string is a parameter, never read from
//! ambient state) and return fresh values; nothing is mutated in place.

use chrono::{DateTime, Utc};
use core::fmt;
use order_desk_core::{FulfillmentStatus, OrderStatus, PaymentStatus};
use serde::{Deserialize, Serialize};

mod adapters;
mod presets;
mod time;

pub use adapters::{
    active_filter_group_count, compute_filter_label, from_form_values_to_metrics_api,
    from_form_values_to_sdk, from_form_values_to_sdk_at, from_form_values_to_url_query,
    from_url_query_to_form_values, from_url_query_to_sdk, from_url_query_to_sdk_at,
    from_url_query_to_url_query,
};
pub use presets::ListPreset;
pub use time::{TimeRangeFilter, sdk_filter_time, time_range_custom_label};

/// Order statuses an operator can filter by. Draft, pending and editing
/// orders are never listed through an explicit status filter; see
/// [`default_status_in`].
pub const FILTRABLE_STATUS: [OrderStatus; 3] = [
    OrderStatus::Placed,
    OrderStatus::Approved,
    OrderStatus::Cancelled,
];

/// Payment statuses an operator can filter by.
pub const FILTRABLE_PAYMENT_STATUS: [PaymentStatus; 6] = [
    PaymentStatus::Authorized,
    PaymentStatus::Paid,
    PaymentStatus::Voided,
    PaymentStatus::Refunded,
    PaymentStatus::Free,
    PaymentStatus::Unpaid,
];

/// Fulfillment statuses an operator can filter by.
pub const FILTRABLE_FULFILLMENT_STATUS: [FulfillmentStatus; 4] = [
    FulfillmentStatus::Unfulfilled,
    FulfillmentStatus::InProgress,
    FulfillmentStatus::Fulfilled,
    FulfillmentStatus::NotRequired,
];

/// The `status_in` value enforced when no explicit status filter is given,
/// preventing draft or pending orders from being listed accidentally.
#[must_use]
pub fn default_status_in() -> String {
    FILTRABLE_STATUS
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Error returned when parsing a filter field from its wire form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized {field} filter value: {value}")]
pub struct ParseFilterValueError {
    /// Which filter field was being parsed.
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseFilterValueError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_owned(),
        }
    }
}

/// How archived orders participate in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchivedFilter {
    /// List archived orders only.
    Only,
    /// Exclude archived orders. Default when no value is given.
    Hide,
    /// List both archived and non-archived orders.
    Show,
}

impl ArchivedFilter {
    /// Wire form of the filter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Only => "only",
            Self::Hide => "hide",
            Self::Show => "show",
        }
    }
}

impl fmt::Display for ArchivedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArchivedFilter {
    type Err = ParseFilterValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "only" => Ok(Self::Only),
            "hide" => Ok(Self::Hide),
            "show" => Ok(Self::Show),
            _ => Err(ParseFilterValueError::new("archived", s)),
        }
    }
}

/// A named relative time window, or a custom absolute range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRangePreset {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "last7days")]
    Last7Days,
    #[serde(rename = "last30days")]
    Last30Days,
    #[serde(rename = "custom")]
    Custom,
}

impl TimeRangePreset {
    /// Wire form of the preset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Last7Days => "last7days",
            Self::Last30Days => "last30days",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for TimeRangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeRangePreset {
    type Err = ParseFilterValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "last7days" => Ok(Self::Last7Days),
            "last30days" => Ok(Self::Last30Days),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseFilterValueError::new("timePreset", s)),
        }
    }
}

/// The canonical in-memory shape of a filter selection.
///
/// Array fields are never null, only empty. `time_from`/`time_to` are only
/// meaningful when `time_preset` is [`TimeRangePreset::Custom`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterFormValues {
    pub market: Vec<String>,
    pub status: Vec<OrderStatus>,
    pub payment_status: Vec<PaymentStatus>,
    pub fulfillment_status: Vec<FulfillmentStatus>,
    pub archived: Option<ArchivedFilter>,
    pub time_preset: Option<TimeRangePreset>,
    pub time_from: Option<DateTime<Utc>>,
    pub time_to: Option<DateTime<Utc>>,
    pub text: Option<String>,
}

/// The backend query object, sent verbatim as request parameters.
///
/// Field names and operators match the backend query API exactly. All
/// structurally empty predicates are omitted from serialization; booleans
/// are preserved even when `false`. `status_in` is a plain `String` rather
/// than an option because it is never empty: when no explicit status filter
/// survives conversion, [`default_status_in`] is substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_id_in: Option<String>,
    pub status_in: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_status_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at_null: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at_gteq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at_lteq: Option<String>,
    /// Free-text predicate, OR'd across order number, customer email and
    /// billing email on the backend.
    #[serde(
        rename = "number_or_customer_email_or_billing_address_email_cont",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub text_cont: Option<String>,
}

/// Selection set for the metrics API (`{ "in": [...] }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsInSet {
    pub r#in: Vec<String>,
}

/// Filter object for the metrics API.
///
/// Partial adapter: the metrics backend only supports the three status
/// dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<MetricsInSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_statuses: Option<MetricsInSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_statuses: Option<MetricsInSet>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_status_in() {
        assert_eq!(default_status_in(), "placed,approved,cancelled");
    }

    #[test]
    fn test_sdk_filter_wire_names() {
        let filter = SdkFilter {
            market_id_in: Some("abc123".to_owned()),
            status_in: "placed,approved,cancelled".to_owned(),
            payment_status_in: None,
            fulfillment_status_in: None,
            archived_at_null: Some(true),
            updated_at_gteq: None,
            updated_at_lteq: None,
            text_cont: Some("jane@example.com".to_owned()),
        };

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "market_id_in": "abc123",
                "status_in": "placed,approved,cancelled",
                "archived_at_null": true,
                "number_or_customer_email_or_billing_address_email_cont": "jane@example.com",
            })
        );
    }

    #[test]
    fn test_sdk_filter_preserves_false_booleans() {
        let filter = SdkFilter {
            market_id_in: None,
            status_in: "placed".to_owned(),
            payment_status_in: None,
            fulfillment_status_in: None,
            archived_at_null: Some(false),
            updated_at_gteq: None,
            updated_at_lteq: None,
            text_cont: None,
        };

        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({ "status_in": "placed", "archived_at_null": false })
        );
    }

    #[test]
    fn test_time_preset_wire_names() {
        assert_eq!(
            serde_json::to_string(&TimeRangePreset::Last7Days).unwrap(),
            "\"last7days\""
        );
        assert_eq!(
            "last30days".parse::<TimeRangePreset>(),
            Ok(TimeRangePreset::Last30Days)
        );
        assert!("last2days".parse::<TimeRangePreset>().is_err());
    }

    #[test]
    fn test_parse_errors_name_the_field() {
        let err = "sometimes".parse::<ArchivedFilter>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized archived filter value: sometimes"
        );

        let err = "last2days".parse::<TimeRangePreset>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized timePreset filter value: last2days"
        );
    }

    #[test]
    fn test_metrics_in_set_serializes_as_in() {
        let set = MetricsInSet {
            r#in: vec!["placed".to_owned()],
        };
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({ "in": ["placed"] })
        );
    }
}
