//! Predefined list views.
//!
//! Each preset is a named, fixed filter combination the dashboard offers as
//! a one-click view, distinct from ad-hoc operator-chosen filters.

use order_desk_core::{FulfillmentStatus, OrderStatus, PaymentStatus};
use serde::{Deserialize, Serialize};

use super::{ArchivedFilter, FilterFormValues};

/// A predefined order list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListPreset {
    AwaitingApproval,
    PaymentToCapture,
    FulfillmentInProgress,
    Archived,
    History,
}

impl ListPreset {
    /// Every preset, in display order.
    pub const ALL: [Self; 5] = [
        Self::AwaitingApproval,
        Self::PaymentToCapture,
        Self::FulfillmentInProgress,
        Self::Archived,
        Self::History,
    ];

    /// Title shown on the preset's list page.
    #[must_use]
    pub const fn view_title(self) -> &'static str {
        match self {
            Self::AwaitingApproval => "Awaiting approval",
            Self::PaymentToCapture => "Payment to capture",
            Self::FulfillmentInProgress => "Fulfillment in progress",
            Self::Archived => "Archived",
            Self::History => "Order history",
        }
    }

    /// The filter selection this preset expands to.
    #[must_use]
    pub fn form_values(self) -> FilterFormValues {
        match self {
            Self::AwaitingApproval => FilterFormValues {
                status: vec![OrderStatus::Placed],
                payment_status: vec![PaymentStatus::Authorized, PaymentStatus::Free],
                archived: Some(ArchivedFilter::Show),
                ..FilterFormValues::default()
            },
            Self::PaymentToCapture => FilterFormValues {
                status: vec![OrderStatus::Approved],
                payment_status: vec![PaymentStatus::Authorized],
                archived: Some(ArchivedFilter::Show),
                ..FilterFormValues::default()
            },
            Self::FulfillmentInProgress => FilterFormValues {
                status: vec![OrderStatus::Approved],
                fulfillment_status: vec![FulfillmentStatus::InProgress],
                archived: Some(ArchivedFilter::Show),
                ..FilterFormValues::default()
            },
            Self::Archived => FilterFormValues {
                archived: Some(ArchivedFilter::Only),
                ..FilterFormValues::default()
            },
            Self::History => FilterFormValues {
                archived: Some(ArchivedFilter::Hide),
                ..FilterFormValues::default()
            },
        }
    }
}
