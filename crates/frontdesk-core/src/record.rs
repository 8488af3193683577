//! Business record types — the entities the store owns.
//!
//! Each record kind has a stored form (id and timestamps assigned by the
//! store) and a `New*` input form accepted from callers. The constructors
//! here are the single place where server-assigned fields are set, so every
//! backend produces identical records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::AppointmentStatus;

/// Subject applied when a contact submission leaves the field blank.
pub const DEFAULT_CONTACT_SUBJECT: &str = "General Inquiry";

// ─── Appointment ─────────────────────────────────────────────────────────────

/// A booked service appointment. Mutated only through the status-update
/// operation; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
  pub id:         Uuid,
  pub service:    String,
  /// Calendar date as entered by the customer; no shape is enforced.
  pub date:       String,
  pub time:       String,
  pub name:       String,
  pub email:      String,
  pub phone:      String,
  pub address:    String,
  pub message:    String,
  pub status:     AppointmentStatus,
  pub created_at: DateTime<Utc>,
  /// Equal to `created_at` until the first status change.
  pub updated_at: DateTime<Utc>,
}

/// Input to [`create_appointment`](crate::store::RecordStore::create_appointment).
/// Absent JSON fields deserialize to empty strings so the validator, not the
/// deserializer, reports what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewAppointment {
  pub service: String,
  pub date:    String,
  pub time:    String,
  pub name:    String,
  pub email:   String,
  pub phone:   String,
  pub address: String,
  pub message: String,
}

impl Appointment {
  /// Build the stored record from validated input. Status starts `Pending`
  /// and both timestamps are set to the same instant.
  pub fn new(input: NewAppointment) -> Self {
    let now = Utc::now();
    Self {
      id:         Uuid::new_v4(),
      service:    input.service,
      date:       input.date,
      time:       input.time,
      name:       input.name,
      email:      input.email,
      phone:      input.phone,
      address:    input.address,
      message:    input.message,
      status:     AppointmentStatus::Pending,
      created_at: now,
      updated_at: now,
    }
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A contact-form submission. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
  pub id:         Uuid,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewContact {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
}

impl Contact {
  /// Build the stored record; a blank subject becomes
  /// [`DEFAULT_CONTACT_SUBJECT`].
  pub fn new(input: NewContact) -> Self {
    let subject = if input.subject.is_empty() {
      DEFAULT_CONTACT_SUBJECT.to_string()
    } else {
      input.subject
    };
    Self {
      id: Uuid::new_v4(),
      name: input.name,
      email: input.email,
      subject,
      message: input.message,
      created_at: Utc::now(),
    }
  }
}

// ─── Subscriber ──────────────────────────────────────────────────────────────

/// A blog-update subscriber. At most one record exists per email value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
  pub id:            Uuid,
  pub email:         String,
  pub subscribed_at: DateTime<Utc>,
  pub active:        bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSubscriber {
  pub email: String,
}

impl Subscriber {
  pub fn new(email: String) -> Self {
    Self {
      id: Uuid::new_v4(),
      email,
      subscribed_at: Utc::now(),
      active: true,
    }
  }
}

// ─── Lead ────────────────────────────────────────────────────────────────────

/// A captured sales lead. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
  pub id:         Uuid,
  pub name:       String,
  pub phone:      String,
  pub email:      Option<String>,
  pub message:    Option<String>,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewLead {
  pub name:    String,
  pub phone:   String,
  pub email:   Option<String>,
  pub message: Option<String>,
}

impl Lead {
  pub fn new(input: NewLead) -> Self {
    Self {
      id: Uuid::new_v4(),
      name: input.name,
      phone: input.phone,
      email: input.email,
      message: input.message,
      created_at: Utc::now(),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn appointment_starts_pending_with_equal_timestamps() {
    let record = Appointment::new(NewAppointment {
      service: "CCTV".into(),
      date: "2025-01-01".into(),
      time: "10:00".into(),
      name: "A".into(),
      email: "a@x.com".into(),
      phone: "123".into(),
      ..Default::default()
    });
    assert_eq!(record.status, AppointmentStatus::Pending);
    assert_eq!(record.created_at, record.updated_at);
    assert_eq!(record.address, "");
    assert_eq!(record.message, "");
  }

  #[test]
  fn contact_blank_subject_gets_default() {
    let record = Contact::new(NewContact {
      name: "A".into(),
      email: "a@x.com".into(),
      message: "hi".into(),
      ..Default::default()
    });
    assert_eq!(record.subject, DEFAULT_CONTACT_SUBJECT);
  }

  #[test]
  fn contact_explicit_subject_is_kept() {
    let record = Contact::new(NewContact {
      name: "A".into(),
      email: "a@x.com".into(),
      subject: "Quote request".into(),
      message: "hi".into(),
    });
    assert_eq!(record.subject, "Quote request");
  }

  #[test]
  fn subscriber_starts_active() {
    let record = Subscriber::new("a@x.com".into());
    assert!(record.active);
    assert_eq!(record.email, "a@x.com");
  }
}
