//! Core types and trait definitions for the frontdesk record store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing heavier than serde.

// Native `async fn` in traits; suppress the advisory lint about `Send`
// bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod error;
pub mod export;
pub mod notify;
pub mod record;
pub mod report;
pub mod status;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
