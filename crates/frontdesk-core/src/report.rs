//! Derived admin views — dashboard statistics and recency windows.
//!
//! Every function recomputes from the store on each call. The datasets are
//! small enough that caching would only risk staleness.

use serde::{Deserialize, Serialize};

use crate::{
  record::{Appointment, Contact},
  status::AppointmentStatus,
  store::RecordStore,
};

// ─── Stats types ─────────────────────────────────────────────────────────────

/// Appointment totals broken down by lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCounts {
  pub total:     usize,
  pub pending:   usize,
  pub confirmed: usize,
  pub completed: usize,
  pub cancelled: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberCounts {
  pub total:  usize,
  pub active: usize,
}

/// The counts shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
  pub appointments:   AppointmentCounts,
  pub total_contacts: usize,
  pub subscribers:    SubscriberCounts,
  pub total_leads:    usize,
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

/// Compute the dashboard aggregate from the store's current state.
pub async fn dashboard_stats<S: RecordStore>(
  store: &S,
) -> Result<DashboardStats, S::Error> {
  let appointments = store.list_appointments().await?;
  let contacts = store.list_contacts().await?;
  let subscribers = store.list_subscribers().await?;
  let leads = store.list_leads().await?;

  let mut counts = AppointmentCounts {
    total:     appointments.len(),
    pending:   0,
    confirmed: 0,
    completed: 0,
    cancelled: 0,
  };
  for appointment in &appointments {
    match appointment.status {
      AppointmentStatus::Pending => counts.pending += 1,
      AppointmentStatus::Confirmed => counts.confirmed += 1,
      AppointmentStatus::Completed => counts.completed += 1,
      AppointmentStatus::Cancelled => counts.cancelled += 1,
    }
  }

  Ok(DashboardStats {
    appointments:   counts,
    total_contacts: contacts.len(),
    subscribers:    SubscriberCounts {
      total:  subscribers.len(),
      active: subscribers.iter().filter(|s| s.active).count(),
    },
    total_leads:    leads.len(),
  })
}

/// The `n` most recently created appointments. List order is already
/// creation-time descending, so this is a prefix.
pub async fn recent_appointments<S: RecordStore>(
  store: &S,
  n: usize,
) -> Result<Vec<Appointment>, S::Error> {
  let mut records = store.list_appointments().await?;
  records.truncate(n);
  Ok(records)
}

/// The `n` most recently created contact submissions.
pub async fn recent_contacts<S: RecordStore>(
  store: &S,
  n: usize,
) -> Result<Vec<Contact>, S::Error> {
  let mut records = store.list_contacts().await?;
  records.truncate(n);
  Ok(records)
}
