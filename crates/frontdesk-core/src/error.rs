//! Error types for `frontdesk-core`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
  /// A creation request is missing one or more required fields. The message
  /// is the caller-facing description of the missing field class.
  #[error("{0}")]
  Validation(&'static str),

  #[error("invalid appointment status: {0:?}")]
  InvalidStatus(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
