//! The order status engine.
//!
//! Deterministically classifies an order's three raw status fields into a
//! human-facing [`DisplayStatus`](order_desk_core::DisplayStatus) and the
//! ordered list of [`TriggerAction`](order_desk_core::TriggerAction)s that
//! are currently legal to offer.
//!
//! Both lookups are exhaustive matches over the status triple: the tables
//! are data, not branching logic, so the functions are trivially total and
//! never fail. Combinations outside the tables degrade gracefully (a
//! visibly-labeled "not handled" status, an empty action list) so that new
//! backend status combinations never break the UI.

mod engine;
mod names;

pub use engine::{display_status, trigger_actions};
pub use names::{
    fulfillment_status_name, order_status_name, payment_status_name, trigger_action_name,
};
