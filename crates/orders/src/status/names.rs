//! Display-name dictionaries for status fields and trigger actions.
//!
//! Exhaustive matches: adding an enum variant forces a corresponding entry
//! here at compile time. Unknown wire values echo their raw form rather
//! than failing, matching the engine's silent-degradation policy.

use order_desk_core::{FulfillmentStatus, OrderStatus, PaymentStatus, TriggerAction};

/// Display name for a trigger action, as rendered on context-menu entries.
#[must_use]
pub const fn trigger_action_name(action: TriggerAction) -> &'static str {
    match action {
        TriggerAction::Approve => "Approve",
        TriggerAction::Cancel => "Cancel",
        TriggerAction::Capture => "Capture payment",
        TriggerAction::Refund => "Refund",
        TriggerAction::Archive => "Archive",
        TriggerAction::Unarchive => "Unarchive",
        TriggerAction::Return => "Return",
        TriggerAction::StartEditing => "Edit",
        TriggerAction::StopEditing => "Stop editing",
    }
}

/// Display name for an order status.
#[must_use]
pub const fn order_status_name(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Placed => "Placed",
        OrderStatus::Approved => "Approved",
        OrderStatus::Cancelled => "Cancelled",
        OrderStatus::Draft => "Draft",
        OrderStatus::Pending => "Pending",
        OrderStatus::Editing => "Editing",
        OrderStatus::Unknown => OrderStatus::Unknown.as_str(),
    }
}

/// Display name for a payment status.
#[must_use]
pub const fn payment_status_name(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Authorized => "Authorized",
        PaymentStatus::Paid => "Paid",
        PaymentStatus::Unpaid => "Unpaid",
        PaymentStatus::Free => "Free",
        PaymentStatus::Voided => "Voided",
        PaymentStatus::Refunded => "Refunded",
        PaymentStatus::PartiallyRefunded => "Part. refunded",
        PaymentStatus::PartiallyAuthorized => "Part. authorized",
        PaymentStatus::PartiallyPaid => "Part. paid",
        PaymentStatus::PartiallyVoided => "Part. voided",
        PaymentStatus::Unknown => PaymentStatus::Unknown.as_str(),
    }
}

/// Display name for a fulfillment status.
#[must_use]
pub const fn fulfillment_status_name(status: FulfillmentStatus) -> &'static str {
    match status {
        FulfillmentStatus::Unfulfilled => "Unfulfilled",
        FulfillmentStatus::InProgress => "In progress",
        FulfillmentStatus::Fulfilled => "Fulfilled",
        FulfillmentStatus::NotRequired => "Not required",
        FulfillmentStatus::Unknown => FulfillmentStatus::Unknown.as_str(),
    }
}
