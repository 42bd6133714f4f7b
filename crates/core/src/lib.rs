//! OrderDesk Core - Shared domain types library.
//!
//! This crate provides the common types used across all OrderDesk components:
//! - `orders` - Status derivation and filter conversion engines
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Order status enums, the status triple, trigger actions, and
//!   display-status value types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
