//! Admin reporting endpoints — dashboard stats and recency windows.

use axum::{
  Json,
  extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use frontdesk_core::{
  notify::Notifier,
  record::{Appointment, Contact},
  report::{self, DashboardStats},
  store::RecordStore,
};

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct StatsResponse {
  pub success: bool,
  pub stats:   DashboardStats,
}

/// `GET /api/admin/stats` — recomputed from the store on every call.
pub async fn stats<S, N>(
  State(state): State<AppState<S, N>>,
) -> Result<Json<StatsResponse>, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  let stats = report::dashboard_stats(state.store.as_ref())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(StatsResponse { success: true, stats }))
}

#[derive(Debug, Deserialize)]
pub struct RecentParams {
  #[serde(default = "default_limit")]
  pub limit: usize,
}

fn default_limit() -> usize {
  5
}

#[derive(Debug, Serialize)]
pub struct RecentResponse {
  pub success:      bool,
  pub appointments: Vec<Appointment>,
  pub contacts:     Vec<Contact>,
}

/// `GET /api/admin/recent[?limit=n]` — the n newest appointments and
/// contacts (default 5).
pub async fn recent<S, N>(
  State(state): State<AppState<S, N>>,
  Query(params): Query<RecentParams>,
) -> Result<Json<RecentResponse>, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  let appointments =
    report::recent_appointments(state.store.as_ref(), params.limit)
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?;
  let contacts = report::recent_contacts(state.store.as_ref(), params.limit)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(RecentResponse { success: true, appointments, contacts }))
}
