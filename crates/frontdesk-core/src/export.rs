//! CSV rendering for admin downloads.
//!
//! Every field is quoted and embedded quotes are doubled, so the output is
//! parseable by any standard CSV reader. Rows are emitted in the order the
//! caller provides them; the admin endpoints pass `list_*` output, i.e.
//! creation-time descending.

use crate::record::{Appointment, Contact};

const APPOINTMENT_COLUMNS: [&str; 11] = [
  "id", "service", "date", "time", "name", "email", "phone", "address",
  "message", "status", "created_at",
];

const CONTACT_COLUMNS: [&str; 6] =
  ["id", "name", "email", "subject", "message", "created_at"];

/// Quote one field, doubling any embedded double-quote character.
fn quote(field: &str) -> String {
  format!("\"{}\"", field.replace('"', "\"\""))
}

/// Append one CRLF-terminated row of quoted fields.
fn push_row(out: &mut String, fields: &[&str]) {
  let mut first = true;
  for field in fields {
    if !first {
      out.push(',');
    }
    out.push_str(&quote(field));
    first = false;
  }
  out.push_str("\r\n");
}

/// Render appointments with the fixed admin column order.
pub fn appointments_csv(records: &[Appointment]) -> String {
  let mut out = String::new();
  push_row(&mut out, &APPOINTMENT_COLUMNS);
  for r in records {
    let id = r.id.to_string();
    let created_at = r.created_at.to_rfc3339();
    push_row(&mut out, &[
      id.as_str(),
      r.service.as_str(),
      r.date.as_str(),
      r.time.as_str(),
      r.name.as_str(),
      r.email.as_str(),
      r.phone.as_str(),
      r.address.as_str(),
      r.message.as_str(),
      r.status.as_str(),
      created_at.as_str(),
    ]);
  }
  out
}

/// Render contact submissions with the fixed admin column order.
pub fn contacts_csv(records: &[Contact]) -> String {
  let mut out = String::new();
  push_row(&mut out, &CONTACT_COLUMNS);
  for r in records {
    let id = r.id.to_string();
    let created_at = r.created_at.to_rfc3339();
    push_row(&mut out, &[
      id.as_str(),
      r.name.as_str(),
      r.email.as_str(),
      r.subject.as_str(),
      r.message.as_str(),
      created_at.as_str(),
    ]);
  }
  out
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::record::{NewAppointment, NewContact};

  /// Minimal RFC 4180 reader used to verify the output stays parseable.
  fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut chars = text.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
      if in_quotes {
        if c == '"' {
          if chars.peek() == Some(&'"') {
            chars.next();
            field.push('"');
          } else {
            in_quotes = false;
          }
        } else {
          field.push(c);
        }
      } else {
        match c {
          '"' => in_quotes = true,
          ',' => row.push(std::mem::take(&mut field)),
          '\r' => {}
          '\n' => {
            row.push(std::mem::take(&mut field));
            rows.push(std::mem::take(&mut row));
          }
          other => field.push(other),
        }
      }
    }
    rows
  }

  fn booking(message: &str) -> Appointment {
    Appointment::new(NewAppointment {
      service: "CCTV".into(),
      date: "2025-01-01".into(),
      time: "10:00".into(),
      name: "A".into(),
      email: "a@x.com".into(),
      phone: "123".into(),
      message: message.into(),
      ..Default::default()
    })
  }

  #[test]
  fn empty_collection_is_header_only() {
    let out = appointments_csv(&[]);
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("\"id\",\"service\""));
  }

  #[test]
  fn every_field_is_quoted() {
    let out = appointments_csv(&[booking("hello")]);
    for line in out.lines() {
      assert!(line.starts_with('"') && line.ends_with('"'), "{line}");
    }
  }

  #[test]
  fn embedded_quotes_round_trip() {
    let out = appointments_csv(&[booking(r#"He said "hello""#)]);
    assert!(out.contains(r#""He said ""hello""""#));

    let rows = parse_csv(&out);
    assert_eq!(rows.len(), 2);
    // message is the 9th column
    assert_eq!(rows[1][8], r#"He said "hello""#);
  }

  #[test]
  fn appointment_columns_match_record_order() {
    let record = booking("msg");
    let rows = parse_csv(&appointments_csv(&[record.clone()]));
    assert_eq!(rows[0], APPOINTMENT_COLUMNS.map(String::from).to_vec());
    assert_eq!(rows[1][0], record.id.to_string());
    assert_eq!(rows[1][9], "pending");
    assert_eq!(rows[1][10], record.created_at.to_rfc3339());
  }

  #[test]
  fn contact_export_includes_default_subject() {
    let record = Contact::new(NewContact {
      name: "A".into(),
      email: "a@x.com".into(),
      message: "hi".into(),
      ..Default::default()
    });
    let rows = parse_csv(&contacts_csv(&[record]));
    assert_eq!(rows[0], CONTACT_COLUMNS.map(String::from).to_vec());
    assert_eq!(rows[1][3], "General Inquiry");
  }
}
