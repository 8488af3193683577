//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use frontdesk_core::{
  record::{
    Appointment, Contact, Lead, NewAppointment, NewContact, NewLead,
    NewSubscriber, Subscriber,
  },
  status::AppointmentStatus,
  store::RecordStore,
};

use crate::{
  Error, Result,
  encode::{
    RawAppointment, RawContact, RawLead, RawSubscriber, encode_dt,
    encode_uuid,
  },
  schema::SCHEMA,
};

const APPOINTMENT_COLUMNS: &str =
  "id, service, date, time, name, email, phone, address, message, status, \
   created_at, updated_at";

fn read_appointment_row(
  row: &rusqlite::Row<'_>,
) -> rusqlite::Result<RawAppointment> {
  Ok(RawAppointment {
    id:         row.get(0)?,
    service:    row.get(1)?,
    date:       row.get(2)?,
    time:       row.get(3)?,
    name:       row.get(4)?,
    email:      row.get(5)?,
    phone:      row.get(6)?,
    address:    row.get(7)?,
    message:    row.get(8)?,
    status:     row.get(9)?,
    created_at: row.get(10)?,
    updated_at: row.get(11)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A frontdesk store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  // ── Appointments ──────────────────────────────────────────────────────

  async fn create_appointment(
    &self,
    input: NewAppointment,
  ) -> Result<Appointment> {
    let record = Appointment::new(input);

    let id_str      = encode_uuid(record.id);
    let status_str  = record.status.as_str().to_owned();
    let created_str = encode_dt(record.created_at);
    let updated_str = encode_dt(record.updated_at);
    let fields      = record.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO appointments (
             id, service, date, time, name, email, phone, address, message,
             status, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
          rusqlite::params![
            id_str,
            fields.service,
            fields.date,
            fields.time,
            fields.name,
            fields.email,
            fields.phone,
            fields.address,
            fields.message,
            status_str,
            created_str,
            updated_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawAppointment> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = ?1"
              ),
              rusqlite::params![id_str],
              read_appointment_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawAppointment::into_appointment).transpose()
  }

  async fn list_appointments(&self) -> Result<Vec<Appointment>> {
    let raws: Vec<RawAppointment> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {APPOINTMENT_COLUMNS} FROM appointments
           ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map([], read_appointment_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(RawAppointment::into_appointment)
      .collect()
  }

  async fn update_appointment_status(
    &self,
    id: Uuid,
    status: AppointmentStatus,
  ) -> Result<Option<Appointment>> {
    let id_str      = encode_uuid(id);
    let status_str  = status.as_str().to_owned();
    let updated_str = encode_dt(Utc::now());

    // UPDATE and read-back run in one closure on the connection thread, so
    // concurrent status updates for the same id cannot interleave.
    let raw: Option<RawAppointment> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE appointments SET status = ?2, updated_at = ?3 WHERE id = ?1",
          rusqlite::params![id_str, status_str, updated_str],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = ?1"
              ),
              rusqlite::params![id_str],
              read_appointment_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawAppointment::into_appointment).transpose()
  }

  // ── Contacts ──────────────────────────────────────────────────────────

  async fn create_contact(&self, input: NewContact) -> Result<Contact> {
    let record = Contact::new(input);

    let id_str      = encode_uuid(record.id);
    let created_str = encode_dt(record.created_at);
    let fields      = record.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (id, name, email, subject, message, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            fields.name,
            fields.email,
            fields.subject,
            fields.message,
            created_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, email, subject, message, created_at
           FROM contacts
           ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawContact {
              id:         row.get(0)?,
              name:       row.get(1)?,
              email:      row.get(2)?,
              subject:    row.get(3)?,
              message:    row.get(4)?,
              created_at: row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  // ── Subscribers ───────────────────────────────────────────────────────

  async fn subscribe(&self, input: NewSubscriber) -> Result<Subscriber> {
    let record = Subscriber::new(input.email);

    let id_str = encode_uuid(record.id);
    let email  = record.email.clone();
    let at_str = encode_dt(record.subscribed_at);

    // Check-then-insert in one closure; the UNIQUE(email) constraint
    // backstops it.
    let existing: Option<RawSubscriber> = self
      .conn
      .call(move |conn| {
        let found = conn
          .query_row(
            "SELECT id, email, subscribed_at, active
             FROM subscribers WHERE email = ?1",
            rusqlite::params![email],
            |row| {
              Ok(RawSubscriber {
                id:            row.get(0)?,
                email:         row.get(1)?,
                subscribed_at: row.get(2)?,
                active:        row.get(3)?,
              })
            },
          )
          .optional()?;
        if found.is_some() {
          return Ok(found);
        }
        conn.execute(
          "INSERT INTO subscribers (id, email, subscribed_at, active)
           VALUES (?1, ?2, ?3, 1)",
          rusqlite::params![id_str, email, at_str],
        )?;
        Ok(None)
      })
      .await?;

    match existing {
      Some(raw) => raw.into_subscriber(),
      None => Ok(record),
    }
  }

  async fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
    let raws: Vec<RawSubscriber> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, email, subscribed_at, active
           FROM subscribers
           ORDER BY subscribed_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSubscriber {
              id:            row.get(0)?,
              email:         row.get(1)?,
              subscribed_at: row.get(2)?,
              active:        row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSubscriber::into_subscriber).collect()
  }

  // ── Leads ─────────────────────────────────────────────────────────────

  async fn create_lead(&self, input: NewLead) -> Result<Lead> {
    let record = Lead::new(input);

    let id_str      = encode_uuid(record.id);
    let created_str = encode_dt(record.created_at);
    let fields      = record.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO leads (id, name, phone, email, message, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            fields.name,
            fields.phone,
            fields.email,
            fields.message,
            created_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn list_leads(&self) -> Result<Vec<Lead>> {
    let raws: Vec<RawLead> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, phone, email, message, created_at
           FROM leads
           ORDER BY created_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawLead {
              id:         row.get(0)?,
              name:       row.get(1)?,
              phone:      row.get(2)?,
              email:      row.get(3)?,
              message:    row.get(4)?,
              created_at: row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLead::into_lead).collect()
  }
}
