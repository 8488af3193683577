//! Handlers for `/api/appointments` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/appointments` | Body: [`NewAppointment`]; 201 + stored record |
//! | `GET`  | `/api/appointments` | Newest first |
//! | `GET`  | `/api/appointments/{id}` | 404 if not found |
//! | `PUT`  | `/api/appointments/{id}/status` | Body: `{"status":"confirmed"}` |
//! | `GET`  | `/api/appointments/export` | CSV download |

use axum::{
  Json,
  extract::{Path, State},
  http::{StatusCode, header},
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use frontdesk_core::{
  export,
  notify::{Notifier, NotifyEvent, NotifyOutcome},
  record::{Appointment, NewAppointment},
  status::AppointmentStatus,
  store::RecordStore,
};

use crate::{AppState, error::ApiError};

// ─── Create ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BookingResponse {
  pub success:      bool,
  pub appointment:  Appointment,
  pub notification: NotifyOutcome,
}

/// `POST /api/appointments` — validate, store, then notify best-effort.
pub async fn create<S, N>(
  State(state): State<AppState<S, N>>,
  Json(body): Json<NewAppointment>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  body.validate()?;
  let appointment = state
    .store
    .create_appointment(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  // The record is already durably stored; the outcome only annotates the
  // response.
  let notification = state
    .notifier
    .notify(NotifyEvent::AppointmentBooked(appointment.clone()))
    .await;

  Ok((
    StatusCode::CREATED,
    Json(BookingResponse { success: true, appointment, notification }),
  ))
}

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AppointmentList {
  pub success:      bool,
  pub appointments: Vec<Appointment>,
}

/// `GET /api/appointments`
pub async fn list<S, N>(
  State(state): State<AppState<S, N>>,
) -> Result<Json<AppointmentList>, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  let appointments = state
    .store
    .list_appointments()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(AppointmentList { success: true, appointments }))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
  pub success:     bool,
  pub appointment: Appointment,
}

/// `GET /api/appointments/{id}`
pub async fn get_one<S, N>(
  State(state): State<AppState<S, N>>,
  Path(id): Path<Uuid>,
) -> Result<Json<AppointmentResponse>, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  let appointment = state
    .store
    .get_appointment(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("appointment {id} not found")))?;
  Ok(Json(AppointmentResponse { success: true, appointment }))
}

// ─── Update status ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  #[serde(default)]
  pub status: String,
}

/// `PUT /api/appointments/{id}/status` — body: `{"status":"confirmed"}`.
///
/// Rejects unknown status values before touching the store.
pub async fn update_status<S, N>(
  State(state): State<AppState<S, N>>,
  Path(id): Path<Uuid>,
  Json(body): Json<StatusBody>,
) -> Result<Json<AppointmentResponse>, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  let status: AppointmentStatus = body.status.parse()?;
  let appointment = state
    .store
    .update_appointment_status(id, status)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("appointment {id} not found")))?;
  Ok(Json(AppointmentResponse { success: true, appointment }))
}

// ─── Export ──────────────────────────────────────────────────────────────────

/// `GET /api/appointments/export` — CSV in list order (newest first).
pub async fn export<S, N>(
  State(state): State<AppState<S, N>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  let records = state
    .store
    .list_appointments()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let csv = export::appointments_csv(&records);
  Ok((
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
      (
        header::CONTENT_DISPOSITION,
        "attachment; filename=\"appointments.csv\"",
      ),
    ],
    csv,
  ))
}
