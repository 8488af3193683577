//! The notification contract — best-effort, post-commit, never load-bearing.
//!
//! Creation operations call [`Notifier::notify`] after the record is stored
//! and surface the [`NotifyOutcome`] in their response. Storage success is
//! never conditional on the notifier: a failed or absent notifier must not
//! fail or block any request.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::record::{Appointment, Contact, Subscriber};

/// A stored record with a user-facing notification attached.
#[derive(Debug, Clone)]
pub enum NotifyEvent {
  AppointmentBooked(Appointment),
  ContactSubmitted(Contact),
  SubscriptionConfirmed(Subscriber),
}

impl NotifyEvent {
  /// Stable tag for logging.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::AppointmentBooked(_) => "appointment_booked",
      Self::ContactSubmitted(_) => "contact_submitted",
      Self::SubscriptionConfirmed(_) => "subscription_confirmed",
    }
  }
}

/// What became of a notification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyOutcome {
  Sent,
  Failed,
  NotConfigured,
}

/// Best-effort notification dispatch.
///
/// Implementations must bound their own I/O: a send that exceeds the
/// configured timeout resolves to [`NotifyOutcome::Failed`] rather than
/// blocking the caller. Failures are reported through the outcome, never as
/// errors.
pub trait Notifier: Send + Sync {
  fn notify(
    &self,
    event: NotifyEvent,
  ) -> impl Future<Output = NotifyOutcome> + Send + '_;
}
