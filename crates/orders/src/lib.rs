//! OrderDesk Orders - pure logic behind the order-management dashboard.
//!
//! Two independent, side-effect-free engines, composed by the surrounding
//! application but not coupled to each other:
//!
//! - [`status`] - maps an order's raw status triple onto a user-facing
//!   display status and the list of trigger actions the operator may
//!   currently invoke.
//! - [`filters`] - losslessly converts a filter selection between its three
//!   representations (in-memory form state, URL query string, backend query
//!   object), enforcing validity and default constraints on every path.
//!
//! Everything here is a pure function over immutable input: no I/O, no
//! shared state, no panics. The only ambient input is the wall-clock
//! instant anchoring relative time presets, and every entry point that
//! needs it has an `_at` variant taking `now` explicitly so tests can fix
//! time deterministically.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod filters;
pub mod status;
