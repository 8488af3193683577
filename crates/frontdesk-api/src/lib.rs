//! JSON REST API for frontdesk.
//!
//! Exposes an axum [`Router`] backed by any
//! [`RecordStore`](frontdesk_core::store::RecordStore) and
//! [`Notifier`](frontdesk_core::notify::Notifier). Auth, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! Responses use the envelope the site's frontend expects:
//! `{"success": true, ...}` on success and
//! `{"success": false, "error": "..."}` on failure.

pub mod admin;
pub mod appointments;
pub mod catalog;
pub mod contacts;
pub mod error;
pub mod leads;
pub mod subscribers;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, post, put},
};
use serde_json::json;

use frontdesk_core::{
  catalog::Catalog, notify::Notifier, store::RecordStore,
};

pub use error::ApiError;

/// Shared state threaded through all handlers.
pub struct AppState<S, N> {
  pub store:    Arc<S>,
  pub notifier: Arc<N>,
  pub catalog:  Arc<Catalog>,
}

// Manual impl: `S` and `N` need not be `Clone` themselves.
impl<S, N> Clone for AppState<S, N> {
  fn clone(&self) -> Self {
    Self {
      store:    self.store.clone(),
      notifier: self.notifier.clone(),
      catalog:  self.catalog.clone(),
    }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, N>(state: AppState<S, N>) -> Router<()>
where
  S: RecordStore + Send + Sync + 'static,
  N: Notifier + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(health))
    // Appointments
    .route(
      "/api/appointments",
      post(appointments::create::<S, N>).get(appointments::list::<S, N>),
    )
    .route("/api/appointments/export", get(appointments::export::<S, N>))
    .route("/api/appointments/{id}", get(appointments::get_one::<S, N>))
    .route(
      "/api/appointments/{id}/status",
      put(appointments::update_status::<S, N>),
    )
    // Contact form
    .route(
      "/api/contact",
      post(contacts::create::<S, N>).get(contacts::list::<S, N>),
    )
    .route("/api/contact/export", get(contacts::export::<S, N>))
    // Blog subscriptions
    .route("/api/blog/subscribe", post(subscribers::subscribe::<S, N>))
    .route("/api/subscribers", get(subscribers::list::<S, N>))
    // Leads
    .route(
      "/api/leads",
      post(leads::create::<S, N>).get(leads::list::<S, N>),
    )
    // Catalog
    .route("/api/services", get(catalog::services::<S, N>))
    .route("/api/faq", get(catalog::faq::<S, N>))
    // Admin views
    .route("/api/admin/stats", get(admin::stats::<S, N>))
    .route("/api/admin/recent", get(admin::recent::<S, N>))
    .with_state(state)
}

/// `GET /` — liveness probe.
async fn health() -> Json<serde_json::Value> {
  Json(json!({ "message": "Server is live" }))
}
