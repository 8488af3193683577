//! Mail-relay implementation of the frontdesk notification contract.
//!
//! Delivery itself is an external service: this crate only builds messages
//! and hands them to an HTTP relay. Every failure mode collapses into a
//! [`NotifyOutcome`](frontdesk_core::notify::NotifyOutcome) — nothing here
//! can fail a storage operation.

mod relay;

pub use relay::{Error, RelayConfig, RelayNotifier};
