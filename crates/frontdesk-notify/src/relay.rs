//! [`RelayNotifier`] — best-effort mail dispatch through an HTTP relay.
//!
//! The relay accepts `POST <endpoint>` with a bearer token and a JSON
//! message body. Transport errors, non-2xx responses, and timeouts all
//! resolve to [`NotifyOutcome::Failed`]; an unconfigured relay resolves to
//! [`NotifyOutcome::NotConfigured`] without touching the network.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use frontdesk_core::{
  notify::{Notifier, NotifyEvent, NotifyOutcome},
  record::{Appointment, Contact, Subscriber},
};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Connection settings for the mail relay.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
  /// Full URL of the relay's send endpoint.
  pub endpoint:     String,
  pub token:        String,
  /// Sender address on outgoing mail.
  pub from_address: String,
  /// Admin inbox for new-booking and new-inquiry alerts.
  pub notify_email: String,
  /// Per-request timeout; sends past this count as failed.
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
  10
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Client(#[from] reqwest::Error),
}

// ─── Notifier ────────────────────────────────────────────────────────────────

/// One message handed to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct OutboundMessage {
  from:    String,
  to:      String,
  subject: String,
  html:    String,
}

#[derive(Clone)]
struct RelayClient {
  client: Client,
  config: RelayConfig,
}

/// A notifier that posts messages to an HTTP mail relay.
///
/// Built from `Some(config)` for a configured relay, or `None` for a
/// deployment without one.
#[derive(Clone)]
pub struct RelayNotifier {
  inner: Option<RelayClient>,
}

impl RelayNotifier {
  pub fn new(config: Option<RelayConfig>) -> Result<Self, Error> {
    let inner = match config {
      Some(config) => {
        let client = Client::builder()
          .timeout(Duration::from_secs(config.timeout_secs))
          .build()?;
        Some(RelayClient { client, config })
      }
      None => None,
    };
    Ok(Self { inner })
  }

  /// A notifier that always reports `not_configured`.
  pub fn disabled() -> Self {
    Self { inner: None }
  }

  pub fn is_configured(&self) -> bool {
    self.inner.is_some()
  }
}

impl Notifier for RelayNotifier {
  async fn notify(&self, event: NotifyEvent) -> NotifyOutcome {
    let Some(relay) = &self.inner else {
      return NotifyOutcome::NotConfigured;
    };

    for message in relay.messages_for(&event) {
      if let Err(reason) = relay.send(&message).await {
        tracing::warn!(
          kind = event.kind(),
          to = %message.to,
          error = %reason,
          "notification send failed"
        );
        return NotifyOutcome::Failed;
      }
    }
    NotifyOutcome::Sent
  }
}

// ─── Message building ────────────────────────────────────────────────────────

fn or_placeholder(value: &str) -> &str {
  if value.is_empty() { "N/A" } else { value }
}

impl RelayClient {
  fn messages_for(&self, event: &NotifyEvent) -> Vec<OutboundMessage> {
    match event {
      NotifyEvent::AppointmentBooked(a) => {
        vec![self.booking_alert(a), self.booking_confirmation(a)]
      }
      NotifyEvent::ContactSubmitted(c) => vec![self.inquiry_alert(c)],
      NotifyEvent::SubscriptionConfirmed(s) => {
        vec![self.subscription_welcome(s)]
      }
    }
  }

  /// Admin alert for a new booking.
  fn booking_alert(&self, a: &Appointment) -> OutboundMessage {
    OutboundMessage {
      from:    self.config.from_address.clone(),
      to:      self.config.notify_email.clone(),
      subject: format!("New Appointment - {}", a.name),
      html:    format!(
        "<p><strong>Service:</strong> {}</p>\
         <p><strong>Date:</strong> {} at {}</p>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Phone:</strong> {}</p>\
         <p><strong>Address:</strong> {}</p>\
         <p><strong>Message:</strong> {}</p>",
        a.service,
        a.date,
        a.time,
        a.name,
        a.email,
        a.phone,
        or_placeholder(&a.address),
        or_placeholder(&a.message),
      ),
    }
  }

  /// Customer acknowledgement for a new booking.
  fn booking_confirmation(&self, a: &Appointment) -> OutboundMessage {
    OutboundMessage {
      from:    self.config.from_address.clone(),
      to:      a.email.clone(),
      subject: format!("Appointment Received - {}", a.service),
      html:    format!(
        "<p>Dear {},</p>\
         <p>Your appointment request for <strong>{}</strong> on \
         <strong>{}</strong> at <strong>{}</strong> has been received.</p>\
         <p>We will contact you 24 hours before to reconfirm.</p>",
        a.name, a.service, a.date, a.time,
      ),
    }
  }

  /// Admin alert for a contact-form submission.
  fn inquiry_alert(&self, c: &Contact) -> OutboundMessage {
    OutboundMessage {
      from:    self.config.from_address.clone(),
      to:      self.config.notify_email.clone(),
      subject: format!("New Contact Inquiry: {}", c.subject),
      html:    format!(
        "<h3>New Contact Inquiry</h3>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Message:</strong><br>{}</p>",
        c.name, c.email, c.message,
      ),
    }
  }

  /// Subscription confirmation to the subscriber.
  fn subscription_welcome(&self, s: &Subscriber) -> OutboundMessage {
    OutboundMessage {
      from:    self.config.from_address.clone(),
      to:      s.email.clone(),
      subject: "Subscription Confirmed".to_string(),
      html:    "<p>You will receive our latest blog updates and security \
                tips directly in your inbox.</p>"
        .to_string(),
    }
  }

  async fn send(&self, message: &OutboundMessage) -> Result<(), reqwest::Error> {
    self
      .client
      .post(&self.config.endpoint)
      .bearer_auth(&self.config.token)
      .json(message)
      .send()
      .await?
      .error_for_status()?;
    Ok(())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use frontdesk_core::record::{NewAppointment, NewContact};

  fn relay() -> RelayClient {
    RelayClient {
      client: Client::new(),
      config: RelayConfig {
        endpoint:     "http://relay.test/send".into(),
        token:        "secret".into(),
        from_address: "noreply@example.com".into(),
        notify_email: "admin@example.com".into(),
        timeout_secs: 10,
      },
    }
  }

  fn booking() -> Appointment {
    Appointment::new(NewAppointment {
      service: "CCTV".into(),
      date: "2025-01-01".into(),
      time: "10:00".into(),
      name: "A".into(),
      email: "customer@example.com".into(),
      phone: "123".into(),
      ..Default::default()
    })
  }

  #[tokio::test]
  async fn unconfigured_notifier_reports_not_configured() {
    let notifier = RelayNotifier::disabled();
    assert!(!notifier.is_configured());

    let outcome = notifier
      .notify(NotifyEvent::AppointmentBooked(booking()))
      .await;
    assert_eq!(outcome, NotifyOutcome::NotConfigured);
  }

  #[test]
  fn booking_produces_admin_alert_and_customer_confirmation() {
    let messages =
      relay().messages_for(&NotifyEvent::AppointmentBooked(booking()));
    assert_eq!(messages.len(), 2);

    assert_eq!(messages[0].to, "admin@example.com");
    assert_eq!(messages[0].subject, "New Appointment - A");
    assert!(messages[0].html.contains("CCTV"));
    // Blank optional fields render as placeholders, not empty tags.
    assert!(messages[0].html.contains("<strong>Address:</strong> N/A"));

    assert_eq!(messages[1].to, "customer@example.com");
    assert_eq!(messages[1].subject, "Appointment Received - CCTV");
    assert!(messages[1].html.contains("2025-01-01"));
  }

  #[test]
  fn inquiry_goes_to_the_admin_inbox_with_resolved_subject() {
    let contact = Contact::new(NewContact {
      name: "B".into(),
      email: "b@example.com".into(),
      message: "hello".into(),
      ..Default::default()
    });
    let messages =
      relay().messages_for(&NotifyEvent::ContactSubmitted(contact));
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].to, "admin@example.com");
    assert_eq!(messages[0].subject, "New Contact Inquiry: General Inquiry");
  }

  #[test]
  fn subscription_confirmation_goes_to_the_subscriber() {
    let subscriber = Subscriber::new("reader@example.com".into());
    let messages =
      relay().messages_for(&NotifyEvent::SubscriptionConfirmed(subscriber));
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].to, "reader@example.com");
  }
}
