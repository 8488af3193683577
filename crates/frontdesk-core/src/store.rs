//! The `RecordStore` trait — the storage contract every backend satisfies.
//!
//! Implemented by the volatile in-memory store and the SQLite store. Higher
//! layers (the HTTP API, the aggregator) depend on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  record::{
    Appointment, Contact, Lead, NewAppointment, NewContact, NewLead,
    NewSubscriber, Subscriber,
  },
  status::AppointmentStatus,
};

/// Abstraction over a frontdesk storage backend.
///
/// Validation is the caller's precondition on every create operation; the
/// store assigns identifiers and timestamps and never re-checks fields.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Appointments ──────────────────────────────────────────────────────

  /// Insert a new appointment. Status starts `pending`; `created_at` and
  /// `updated_at` are set to the same instant.
  fn create_appointment(
    &self,
    input: NewAppointment,
  ) -> impl Future<Output = Result<Appointment, Self::Error>> + Send + '_;

  /// Retrieve an appointment by id. Returns `None` if not found.
  fn get_appointment(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Appointment>, Self::Error>> + Send + '_;

  /// All appointments, most recent first: creation time descending, ties
  /// broken by insertion order (newest insertion wins).
  fn list_appointments(
    &self,
  ) -> impl Future<Output = Result<Vec<Appointment>, Self::Error>> + Send + '_;

  /// Atomically set `status` and refresh `updated_at`. Returns `None` if
  /// the id is unknown; in that case nothing is mutated.
  ///
  /// Any status value is accepted from any current state; there is no
  /// transition graph and no terminal state.
  fn update_appointment_status(
    &self,
    id: Uuid,
    status: AppointmentStatus,
  ) -> impl Future<Output = Result<Option<Appointment>, Self::Error>> + Send + '_;

  // ── Contacts ──────────────────────────────────────────────────────────

  fn create_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// All contact submissions, most recent first.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  // ── Subscribers ───────────────────────────────────────────────────────

  /// Idempotent per email: the first call inserts, later calls return the
  /// existing record unchanged. Concurrent calls for the same email are
  /// serialized so exactly one record is created and every caller observes
  /// it.
  fn subscribe(
    &self,
    input: NewSubscriber,
  ) -> impl Future<Output = Result<Subscriber, Self::Error>> + Send + '_;

  /// All subscribers, most recent first.
  fn list_subscribers(
    &self,
  ) -> impl Future<Output = Result<Vec<Subscriber>, Self::Error>> + Send + '_;

  // ── Leads ─────────────────────────────────────────────────────────────

  fn create_lead(
    &self,
    input: NewLead,
  ) -> impl Future<Output = Result<Lead, Self::Error>> + Send + '_;

  /// All captured leads, most recent first.
  fn list_leads(
    &self,
  ) -> impl Future<Output = Result<Vec<Lead>, Self::Error>> + Send + '_;
}
