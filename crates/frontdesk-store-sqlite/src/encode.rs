//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, UUIDs as hyphenated lowercase
//! strings, status as its lowercase wire form, and subscriber `active` as
//! 0/1.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use frontdesk_core::{
  record::{Appointment, Contact, Lead, Subscriber},
  status::AppointmentStatus,
};

use crate::{Error, Result};

pub fn encode_uuid(id: Uuid) -> String {
  id.hyphenated().to_string()
}

pub fn decode_uuid(s: &str) -> Result<Uuid> {
  Ok(Uuid::parse_str(s)?)
}

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn decode_status(s: &str) -> Result<AppointmentStatus> {
  Ok(s.parse().map_err(Error::Core)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an `appointments` row.
pub struct RawAppointment {
  pub id:         String,
  pub service:    String,
  pub date:       String,
  pub time:       String,
  pub name:       String,
  pub email:      String,
  pub phone:      String,
  pub address:    String,
  pub message:    String,
  pub status:     String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawAppointment {
  pub fn into_appointment(self) -> Result<Appointment> {
    Ok(Appointment {
      id:         decode_uuid(&self.id)?,
      service:    self.service,
      date:       self.date,
      time:       self.time,
      name:       self.name,
      email:      self.email,
      phone:      self.phone,
      address:    self.address,
      message:    self.message,
      status:     decode_status(&self.status)?,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw strings read directly from a `contacts` row.
pub struct RawContact {
  pub id:         String,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  pub created_at: String,
}

impl RawContact {
  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         decode_uuid(&self.id)?,
      name:       self.name,
      email:      self.email,
      subject:    self.subject,
      message:    self.message,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from a `subscribers` row.
pub struct RawSubscriber {
  pub id:            String,
  pub email:         String,
  pub subscribed_at: String,
  pub active:        i64,
}

impl RawSubscriber {
  pub fn into_subscriber(self) -> Result<Subscriber> {
    Ok(Subscriber {
      id:            decode_uuid(&self.id)?,
      email:         self.email,
      subscribed_at: decode_dt(&self.subscribed_at)?,
      active:        self.active != 0,
    })
  }
}

/// Raw values read directly from a `leads` row.
pub struct RawLead {
  pub id:         String,
  pub name:       String,
  pub phone:      String,
  pub email:      Option<String>,
  pub message:    Option<String>,
  pub created_at: String,
}

impl RawLead {
  pub fn into_lead(self) -> Result<Lead> {
    Ok(Lead {
      id:         decode_uuid(&self.id)?,
      name:       self.name,
      phone:      self.phone,
      email:      self.email,
      message:    self.message,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
