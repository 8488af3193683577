//! Appointment lifecycle status.
//!
//! Transitions are intentionally permissive: an appointment may move from
//! any state to any of the four states, including back out of `Completed`
//! or `Cancelled`. The enum only guarantees membership in the four values.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The lifecycle state of an appointment. New appointments start `Pending`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
  #[default]
  Pending,
  Confirmed,
  Completed,
  Cancelled,
}

impl AppointmentStatus {
  /// The lowercase wire form, matching the serde representation.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "pending",
      Self::Confirmed => "confirmed",
      Self::Completed => "completed",
      Self::Cancelled => "cancelled",
    }
  }
}

impl fmt::Display for AppointmentStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for AppointmentStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "pending" => Ok(Self::Pending),
      "confirmed" => Ok(Self::Confirmed),
      "completed" => Ok(Self::Completed),
      "cancelled" => Ok(Self::Cancelled),
      other => Err(Error::InvalidStatus(other.to_string())),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
