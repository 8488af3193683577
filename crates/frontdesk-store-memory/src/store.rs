//! [`MemoryStore`] — the in-memory implementation of [`RecordStore`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use frontdesk_core::{
  Error,
  record::{
    Appointment, Contact, Lead, NewAppointment, NewContact, NewLead,
    NewSubscriber, Subscriber,
  },
  status::AppointmentStatus,
  store::RecordStore,
};

/// Record collections guarded by a single lock.
///
/// One lock over all collections keeps every write a serialized
/// check-then-act: subscriber dedup and status updates cannot interleave
/// with each other or with concurrent creates.
#[derive(Default)]
struct Inner {
  appointments: Vec<Appointment>,
  contacts:     Vec<Contact>,
  subscribers:  Vec<Subscriber>,
  leads:        Vec<Lead>,
}

/// A frontdesk store held entirely in process memory.
///
/// Cloning is cheap — clones share the same collections.
#[derive(Clone, Default)]
pub struct MemoryStore {
  inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
  /// Create an empty store.
  pub fn new() -> Self {
    Self::default()
  }

  #[cfg(test)]
  pub(crate) async fn insert_appointment_record(&self, record: Appointment) {
    self.inner.write().await.appointments.push(record);
  }
}

/// Clone out `items` most-recent-first: creation time descending, ties
/// broken by insertion position (later insertion wins).
fn newest_first<T, F>(items: &[T], created_at: F) -> Vec<T>
where
  T: Clone,
  F: Fn(&T) -> DateTime<Utc>,
{
  let mut indexed: Vec<(usize, T)> =
    items.iter().cloned().enumerate().collect();
  indexed.sort_by(|(ia, a), (ib, b)| {
    created_at(b).cmp(&created_at(a)).then(ib.cmp(ia))
  });
  indexed.into_iter().map(|(_, item)| item).collect()
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for MemoryStore {
  type Error = Error;

  // ── Appointments ──────────────────────────────────────────────────────

  async fn create_appointment(
    &self,
    input: NewAppointment,
  ) -> Result<Appointment, Error> {
    let record = Appointment::new(input);
    self.inner.write().await.appointments.push(record.clone());
    Ok(record)
  }

  async fn get_appointment(
    &self,
    id: Uuid,
  ) -> Result<Option<Appointment>, Error> {
    let inner = self.inner.read().await;
    Ok(inner.appointments.iter().find(|a| a.id == id).cloned())
  }

  async fn list_appointments(&self) -> Result<Vec<Appointment>, Error> {
    let inner = self.inner.read().await;
    Ok(newest_first(&inner.appointments, |a| a.created_at))
  }

  async fn update_appointment_status(
    &self,
    id: Uuid,
    status: AppointmentStatus,
  ) -> Result<Option<Appointment>, Error> {
    let mut inner = self.inner.write().await;
    let Some(record) = inner.appointments.iter_mut().find(|a| a.id == id)
    else {
      return Ok(None);
    };
    record.status = status;
    record.updated_at = Utc::now();
    Ok(Some(record.clone()))
  }

  // ── Contacts ──────────────────────────────────────────────────────────

  async fn create_contact(&self, input: NewContact) -> Result<Contact, Error> {
    let record = Contact::new(input);
    self.inner.write().await.contacts.push(record.clone());
    Ok(record)
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>, Error> {
    let inner = self.inner.read().await;
    Ok(newest_first(&inner.contacts, |c| c.created_at))
  }

  // ── Subscribers ───────────────────────────────────────────────────────

  async fn subscribe(&self, input: NewSubscriber) -> Result<Subscriber, Error> {
    // Lookup and insert under one write guard: concurrent requests for the
    // same email serialize here, so the first inserts and the rest observe
    // its record.
    let mut inner = self.inner.write().await;
    if let Some(existing) =
      inner.subscribers.iter().find(|s| s.email == input.email)
    {
      return Ok(existing.clone());
    }
    let record = Subscriber::new(input.email);
    inner.subscribers.push(record.clone());
    Ok(record)
  }

  async fn list_subscribers(&self) -> Result<Vec<Subscriber>, Error> {
    let inner = self.inner.read().await;
    Ok(newest_first(&inner.subscribers, |s| s.subscribed_at))
  }

  // ── Leads ─────────────────────────────────────────────────────────────

  async fn create_lead(&self, input: NewLead) -> Result<Lead, Error> {
    let record = Lead::new(input);
    self.inner.write().await.leads.push(record.clone());
    Ok(record)
  }

  async fn list_leads(&self) -> Result<Vec<Lead>, Error> {
    let inner = self.inner.read().await;
    Ok(newest_first(&inner.leads, |l| l.created_at))
  }
}
