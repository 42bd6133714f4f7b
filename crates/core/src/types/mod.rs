//! Core types for OrderDesk.
//!
//! This module provides type-safe representations of the order domain.

pub mod display;
pub mod status;
pub mod trigger;

pub use display::{CanonicalStatus, ColorHint, DisplayStatus, IconHint};
pub use status::{
    FulfillmentStatus, OrderStatus, ParseStatusError, PaymentStatus, StatusTriple,
};
pub use trigger::TriggerAction;
