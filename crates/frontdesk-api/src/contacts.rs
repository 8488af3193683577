//! Handlers for `/api/contact` endpoints.
//!
//! The frontend calls the collection `submissions`, so the list envelope
//! keeps that name.

use axum::{
  Json,
  extract::State,
  http::{StatusCode, header},
  response::IntoResponse,
};
use serde::Serialize;

use frontdesk_core::{
  export,
  notify::{Notifier, NotifyEvent, NotifyOutcome},
  record::{Contact, NewContact},
  store::RecordStore,
};

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
  pub success:      bool,
  pub submission:   Contact,
  pub notification: NotifyOutcome,
}

/// `POST /api/contact` — validate, store, then notify best-effort.
pub async fn create<S, N>(
  State(state): State<AppState<S, N>>,
  Json(body): Json<NewContact>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  body.validate()?;
  let submission = state
    .store
    .create_contact(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let notification = state
    .notifier
    .notify(NotifyEvent::ContactSubmitted(submission.clone()))
    .await;

  Ok((
    StatusCode::CREATED,
    Json(SubmissionResponse { success: true, submission, notification }),
  ))
}

#[derive(Debug, Serialize)]
pub struct SubmissionList {
  pub success:     bool,
  pub submissions: Vec<Contact>,
}

/// `GET /api/contact`
pub async fn list<S, N>(
  State(state): State<AppState<S, N>>,
) -> Result<Json<SubmissionList>, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  let submissions = state
    .store
    .list_contacts()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(SubmissionList { success: true, submissions }))
}

/// `GET /api/contact/export` — CSV in list order (newest first).
pub async fn export<S, N>(
  State(state): State<AppState<S, N>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  let records = state
    .store
    .list_contacts()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let csv = export::contacts_csv(&records);
  Ok((
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
      (
        header::CONTENT_DISPOSITION,
        "attachment; filename=\"contacts.csv\"",
      ),
    ],
    csv,
  ))
}
