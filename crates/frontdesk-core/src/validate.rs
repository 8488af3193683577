//! Required-field checks applied before a record reaches the store.
//!
//! Presence-only: no email- or phone-shape validation is performed. The
//! error messages are the caller-facing strings returned by the API.

use crate::{
  Error, Result,
  record::{NewAppointment, NewContact, NewLead, NewSubscriber},
};

impl NewAppointment {
  /// Require non-empty service, date, time, name, email, and phone.
  pub fn validate(&self) -> Result<()> {
    let required = [
      &self.service,
      &self.date,
      &self.time,
      &self.name,
      &self.email,
      &self.phone,
    ];
    if required.iter().any(|field| field.is_empty()) {
      return Err(Error::Validation("Required fields missing"));
    }
    Ok(())
  }
}

impl NewContact {
  /// Require non-empty name, email, and message. Subject may be blank.
  pub fn validate(&self) -> Result<()> {
    if self.name.is_empty() || self.email.is_empty() || self.message.is_empty()
    {
      return Err(Error::Validation(
        "Name, email, and message are required",
      ));
    }
    Ok(())
  }
}

impl NewSubscriber {
  pub fn validate(&self) -> Result<()> {
    if self.email.is_empty() {
      return Err(Error::Validation("Email is required"));
    }
    Ok(())
  }
}

impl NewLead {
  /// Require non-empty name and phone. Email and message may be absent.
  pub fn validate(&self) -> Result<()> {
    if self.name.is_empty() || self.phone.is_empty() {
      return Err(Error::Validation("Name and phone are required"));
    }
    Ok(())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn booking() -> NewAppointment {
    NewAppointment {
      service: "CCTV".into(),
      date: "2025-01-01".into(),
      time: "10:00".into(),
      name: "A".into(),
      email: "a@x.com".into(),
      phone: "123".into(),
      ..Default::default()
    }
  }

  #[test]
  fn complete_booking_passes() {
    assert!(booking().validate().is_ok());
  }

  #[test]
  fn booking_missing_any_required_field_fails() {
    let strips: [fn(&mut NewAppointment); 6] = [
      |b| b.service.clear(),
      |b| b.date.clear(),
      |b| b.time.clear(),
      |b| b.name.clear(),
      |b| b.email.clear(),
      |b| b.phone.clear(),
    ];
    for strip in strips {
      let mut input = booking();
      strip(&mut input);
      let err = input.validate().unwrap_err();
      assert_eq!(err, Error::Validation("Required fields missing"));
    }
  }

  #[test]
  fn booking_optional_fields_may_be_blank() {
    let mut input = booking();
    input.address.clear();
    input.message.clear();
    assert!(input.validate().is_ok());
  }

  #[test]
  fn contact_requires_name_email_message() {
    let input = NewContact {
      name: "A".into(),
      email: String::new(),
      subject: "Hi".into(),
      message: "hello".into(),
    };
    assert!(input.validate().is_err());
  }

  #[test]
  fn contact_subject_is_optional() {
    let input = NewContact {
      name: "A".into(),
      email: "a@x.com".into(),
      subject: String::new(),
      message: "hello".into(),
    };
    assert!(input.validate().is_ok());
  }

  #[test]
  fn subscriber_requires_email() {
    assert!(NewSubscriber::default().validate().is_err());
    assert!(
      NewSubscriber { email: "a@x.com".into() }.validate().is_ok()
    );
  }

  #[test]
  fn lead_requires_name_and_phone() {
    let input = NewLead {
      name: "A".into(),
      phone: String::new(),
      ..Default::default()
    };
    let err = input.validate().unwrap_err();
    assert_eq!(err, Error::Validation("Name and phone are required"));
  }
}
