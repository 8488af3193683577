//! Tests for `MemoryStore` — trait semantics plus the derived admin views.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use frontdesk_core::{
  record::{Appointment, NewAppointment, NewContact, NewLead, NewSubscriber},
  report,
  status::AppointmentStatus,
  store::RecordStore,
};

use crate::MemoryStore;

fn booking(name: &str) -> NewAppointment {
  NewAppointment {
    service: "CCTV".into(),
    date: "2025-01-01".into(),
    time: "10:00".into(),
    name: name.into(),
    email: "a@x.com".into(),
    phone: "123".into(),
    ..Default::default()
  }
}

fn inquiry(name: &str) -> NewContact {
  NewContact {
    name: name.into(),
    email: "a@x.com".into(),
    message: "hello".into(),
    ..Default::default()
  }
}

// ─── Appointments ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_appointment_starts_pending() {
  let s = MemoryStore::new();
  let record = s.create_appointment(booking("A")).await.unwrap();
  assert_eq!(record.status, AppointmentStatus::Pending);
  assert_eq!(record.created_at, record.updated_at);
}

#[tokio::test]
async fn get_appointment_roundtrip() {
  let s = MemoryStore::new();
  let record = s.create_appointment(booking("A")).await.unwrap();

  let fetched = s.get_appointment(record.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, record.id);
  assert_eq!(fetched.name, "A");

  assert!(s.get_appointment(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn update_status_sets_status_and_updated_at() {
  let s = MemoryStore::new();
  let record = s.create_appointment(booking("A")).await.unwrap();

  let updated = s
    .update_appointment_status(record.id, AppointmentStatus::Confirmed)
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.status, AppointmentStatus::Confirmed);
  assert!(updated.updated_at > record.updated_at);
  assert_eq!(updated.created_at, record.created_at);
}

#[tokio::test]
async fn update_status_is_permissive_out_of_terminal_states() {
  let s = MemoryStore::new();
  let record = s.create_appointment(booking("A")).await.unwrap();

  for status in [
    AppointmentStatus::Completed,
    AppointmentStatus::Cancelled,
    AppointmentStatus::Confirmed,
  ] {
    let updated = s
      .update_appointment_status(record.id, status)
      .await
      .unwrap()
      .unwrap();
    assert_eq!(updated.status, status);
  }
}

#[tokio::test]
async fn update_status_unknown_id_mutates_nothing() {
  let s = MemoryStore::new();
  let record = s.create_appointment(booking("A")).await.unwrap();

  let result = s
    .update_appointment_status(Uuid::new_v4(), AppointmentStatus::Cancelled)
    .await
    .unwrap();
  assert!(result.is_none());

  let fetched = s.get_appointment(record.id).await.unwrap().unwrap();
  assert_eq!(fetched.status, AppointmentStatus::Pending);
  assert_eq!(fetched.updated_at, record.updated_at);
}

#[tokio::test]
async fn list_appointments_newest_first() {
  let s = MemoryStore::new();
  let first = s.create_appointment(booking("first")).await.unwrap();
  let second = s.create_appointment(booking("second")).await.unwrap();
  let third = s.create_appointment(booking("third")).await.unwrap();

  let listed = s.list_appointments().await.unwrap();
  let ids: Vec<_> = listed.iter().map(|a| a.id).collect();
  assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
async fn list_breaks_creation_time_ties_by_insertion_order() {
  let s = MemoryStore::new();
  let instant = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();

  let mut earlier = Appointment::new(booking("earlier"));
  earlier.created_at = instant;
  earlier.updated_at = instant;
  let mut later = Appointment::new(booking("later"));
  later.created_at = instant;
  later.updated_at = instant;

  s.insert_appointment_record(earlier).await;
  s.insert_appointment_record(later.clone()).await;

  let listed = s.list_appointments().await.unwrap();
  assert_eq!(listed[0].id, later.id);
}

// ─── Contacts ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn contact_blank_subject_stored_with_default() {
  let s = MemoryStore::new();
  let record = s.create_contact(inquiry("A")).await.unwrap();
  assert_eq!(record.subject, "General Inquiry");

  let listed = s.list_contacts().await.unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].subject, "General Inquiry");
}

#[tokio::test]
async fn list_contacts_newest_first() {
  let s = MemoryStore::new();
  s.create_contact(inquiry("first")).await.unwrap();
  let last = s.create_contact(inquiry("second")).await.unwrap();

  let listed = s.list_contacts().await.unwrap();
  assert_eq!(listed[0].id, last.id);
}

// ─── Subscribers ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn subscribe_twice_returns_the_same_record() {
  let s = MemoryStore::new();
  let input = NewSubscriber { email: "a@x.com".into() };

  let first = s.subscribe(input.clone()).await.unwrap();
  let second = s.subscribe(input).await.unwrap();

  assert_eq!(first.id, second.id);
  assert_eq!(s.list_subscribers().await.unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_subscribe_creates_exactly_one_record() {
  let s = MemoryStore::new();
  let input = NewSubscriber { email: "a@x.com".into() };

  let (first, second) =
    tokio::join!(s.subscribe(input.clone()), s.subscribe(input));
  let (first, second) = (first.unwrap(), second.unwrap());

  assert_eq!(first.id, second.id);
  assert_eq!(s.list_subscribers().await.unwrap().len(), 1);
}

#[tokio::test]
async fn distinct_emails_get_distinct_records() {
  let s = MemoryStore::new();
  s.subscribe(NewSubscriber { email: "a@x.com".into() })
    .await
    .unwrap();
  s.subscribe(NewSubscriber { email: "b@x.com".into() })
    .await
    .unwrap();
  assert_eq!(s.list_subscribers().await.unwrap().len(), 2);
}

// ─── Leads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn lead_optional_fields_roundtrip() {
  let s = MemoryStore::new();
  let record = s
    .create_lead(NewLead {
      name: "A".into(),
      phone: "123".into(),
      email: None,
      message: Some("CCTV quote".into()),
    })
    .await
    .unwrap();

  let listed = s.list_leads().await.unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].id, record.id);
  assert!(listed[0].email.is_none());
  assert_eq!(listed[0].message.as_deref(), Some("CCTV quote"));
}

// ─── Derived views ───────────────────────────────────────────────────────────

#[tokio::test]
async fn dashboard_stats_counts_match_lists() {
  let s = MemoryStore::new();
  let a1 = s.create_appointment(booking("a1")).await.unwrap();
  let a2 = s.create_appointment(booking("a2")).await.unwrap();
  s.create_appointment(booking("a3")).await.unwrap();
  s.update_appointment_status(a1.id, AppointmentStatus::Confirmed)
    .await
    .unwrap();
  s.update_appointment_status(a2.id, AppointmentStatus::Cancelled)
    .await
    .unwrap();

  s.create_contact(inquiry("c1")).await.unwrap();
  s.subscribe(NewSubscriber { email: "a@x.com".into() })
    .await
    .unwrap();
  s.create_lead(NewLead {
    name: "L".into(),
    phone: "123".into(),
    ..Default::default()
  })
  .await
  .unwrap();

  let stats = report::dashboard_stats(&s).await.unwrap();
  assert_eq!(
    stats.appointments.total,
    s.list_appointments().await.unwrap().len()
  );
  assert_eq!(stats.appointments.pending, 1);
  assert_eq!(stats.appointments.confirmed, 1);
  assert_eq!(stats.appointments.cancelled, 1);
  assert_eq!(stats.appointments.completed, 0);
  assert_eq!(stats.total_contacts, 1);
  assert_eq!(stats.subscribers.total, 1);
  assert_eq!(stats.subscribers.active, 1);
  assert_eq!(stats.total_leads, 1);
}

#[tokio::test]
async fn recent_windows_take_the_newest() {
  let s = MemoryStore::new();
  for i in 0..4 {
    s.create_appointment(booking(&format!("a{i}"))).await.unwrap();
  }
  let newest = s.create_appointment(booking("a4")).await.unwrap();

  let recent = report::recent_appointments(&s, 2).await.unwrap();
  assert_eq!(recent.len(), 2);
  assert_eq!(recent[0].id, newest.id);

  assert!(report::recent_contacts(&s, 3).await.unwrap().is_empty());
}
