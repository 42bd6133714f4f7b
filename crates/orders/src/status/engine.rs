//! Status triple lookup tables.

use order_desk_core::{
    CanonicalStatus, ColorHint, DisplayStatus, FulfillmentStatus, IconHint, OrderStatus,
    PaymentStatus, StatusTriple, TriggerAction,
};

fn make(
    status: CanonicalStatus,
    label: &str,
    icon: IconHint,
    color: ColorHint,
    task: Option<&str>,
) -> DisplayStatus {
    DisplayStatus {
        status,
        label: label.to_owned(),
        icon,
        color,
        task: task.map(str::to_owned),
    }
}

/// Derive the user-facing display status for an order's status triple.
///
/// Total over every combination: a triple with no table entry resolves to
/// [`CanonicalStatus::Unhandled`] with the raw triple embedded in the label,
/// so an unexpected backend combination stays visible and debuggable in
/// production instead of crashing the view.
#[must_use]
pub fn display_status(triple: &StatusTriple) -> DisplayStatus {
    use CanonicalStatus as C;
    use FulfillmentStatus as F;
    use OrderStatus as S;
    use PaymentStatus as P;

    match (triple.status, triple.payment, triple.fulfillment) {
        (S::Editing, _, _) => make(C::Editing, "Editing", IconHint::Pencil, ColorHint::Orange, None),

        (S::Cancelled, _, _) => make(C::Cancelled, "Cancelled", IconHint::X, ColorHint::Gray, None),

        (S::Pending, _, _) => make(
            C::Pending,
            "Pending",
            IconHint::ShoppingBag,
            ColorHint::White,
            None,
        ),

        (
            S::Placed,
            P::Authorized | P::Paid | P::Free | P::PartiallyRefunded,
            F::Unfulfilled | F::NotRequired,
        ) => make(
            C::Placed,
            "Placed",
            IconHint::ArrowDown,
            ColorHint::Orange,
            Some("Awaiting approval"),
        ),

        (S::Placed, P::Unpaid, F::Unfulfilled) => make(
            C::Error,
            "Error",
            IconHint::X,
            ColorHint::Red,
            Some("Payment error"),
        ),

        (
            S::Approved,
            P::Authorized | P::PartiallyAuthorized,
            F::Unfulfilled | F::NotRequired | F::InProgress,
        ) => make(
            C::Approved,
            "Approved",
            IconHint::CreditCard,
            ColorHint::Orange,
            Some("Payment to capture"),
        ),

        (S::Approved, P::Paid | P::PartiallyPaid | P::PartiallyRefunded, F::InProgress) => make(
            C::InProgress,
            "In progress",
            IconHint::ArrowClockwise,
            ColorHint::Orange,
            Some("Fulfillment in progress"),
        ),

        (S::Approved, P::Paid | P::Free, F::Fulfilled) => make(
            C::Fulfilled,
            "Fulfilled",
            IconHint::Check,
            ColorHint::Green,
            None,
        ),

        (S::Approved, P::PartiallyRefunded, F::Fulfilled) => make(
            C::Fulfilled,
            "Part. refunded",
            IconHint::Check,
            ColorHint::Green,
            None,
        ),

        (S::Approved, P::Paid | P::PartiallyRefunded | P::Free, F::NotRequired) => make(
            C::Approved,
            "Approved",
            IconHint::Check,
            ColorHint::Green,
            None,
        ),

        _ => make(
            C::Unhandled,
            &format!("Not handled: ({triple})"),
            IconHint::Warning,
            ColorHint::White,
            None,
        ),
    }
}

/// Derive the ordered list of trigger actions currently legal for an order.
///
/// `archived` is whether the order is currently archived (`archived_at`
/// present); it selects between the archive and unarchive actions. Orders in
/// `editing` status expose their actions through a dedicated surface and
/// return an empty list here. Unknown combinations also return an empty
/// list: offering no action is safe, offering a wrong one is not.
#[must_use]
pub fn trigger_actions(triple: &StatusTriple, archived: bool) -> Vec<TriggerAction> {
    use FulfillmentStatus as F;
    use OrderStatus as S;
    use PaymentStatus as P;
    use TriggerAction as T;

    let archive_action = if archived { T::Unarchive } else { T::Archive };

    if triple.status == S::Editing {
        return vec![];
    }

    match (triple.status, triple.payment, triple.fulfillment) {
        (
            S::Placed,
            P::Authorized | P::Paid | P::PartiallyRefunded | P::Free,
            F::Unfulfilled | F::NotRequired,
        ) => vec![T::Approve, T::Cancel],

        (S::Placed, P::Unpaid, F::Unfulfilled) => vec![T::Cancel],

        (S::Approved, P::Authorized, F::Unfulfilled | F::NotRequired | F::InProgress) => {
            vec![T::Capture]
        }

        (S::Approved, P::Paid | P::PartiallyRefunded, F::InProgress) => vec![T::Refund],

        (S::Approved, P::Paid | P::PartiallyRefunded, F::Fulfilled) => {
            vec![T::Refund, T::Return, archive_action]
        }

        (S::Approved, P::Free, F::Fulfilled) | (S::Cancelled, P::Refunded, F::Fulfilled) => {
            vec![T::Return, archive_action]
        }

        (S::Approved, P::Paid | P::PartiallyRefunded, F::NotRequired) => {
            vec![T::Refund, archive_action]
        }

        (S::Approved, P::Free, F::NotRequired)
        | (S::Cancelled, P::Voided, F::Unfulfilled)
        | (S::Cancelled, P::Refunded, F::Unfulfilled | F::NotRequired)
        | (S::Cancelled, P::Unpaid | P::Free, F::Unfulfilled) => vec![archive_action],

        _ => vec![],
    }
}
