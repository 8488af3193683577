//! Handlers for `/api/leads` endpoints. Lead capture has no user-facing
//! notification.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use frontdesk_core::{
  notify::Notifier,
  record::{Lead, NewLead},
  store::RecordStore,
};

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct LeadResponse {
  pub success: bool,
  pub lead:    Lead,
}

/// `POST /api/leads`
pub async fn create<S, N>(
  State(state): State<AppState<S, N>>,
  Json(body): Json<NewLead>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  body.validate()?;
  let lead = state
    .store
    .create_lead(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(LeadResponse { success: true, lead })))
}

#[derive(Debug, Serialize)]
pub struct LeadList {
  pub success: bool,
  pub leads:   Vec<Lead>,
}

/// `GET /api/leads`
pub async fn list<S, N>(
  State(state): State<AppState<S, N>>,
) -> Result<Json<LeadList>, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  let leads = state
    .store
    .list_leads()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(LeadList { success: true, leads }))
}
