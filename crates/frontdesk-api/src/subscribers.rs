//! Handlers for blog-subscription endpoints.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use frontdesk_core::{
  notify::{Notifier, NotifyEvent, NotifyOutcome},
  record::{NewSubscriber, Subscriber},
  store::RecordStore,
};

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
  pub success:      bool,
  pub subscriber:   Subscriber,
  pub notification: NotifyOutcome,
}

/// `POST /api/blog/subscribe` — idempotent per email: a repeat subscription
/// returns the existing record as a success.
pub async fn subscribe<S, N>(
  State(state): State<AppState<S, N>>,
  Json(body): Json<NewSubscriber>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  body.validate()?;
  let subscriber = state
    .store
    .subscribe(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let notification = state
    .notifier
    .notify(NotifyEvent::SubscriptionConfirmed(subscriber.clone()))
    .await;

  Ok((
    StatusCode::CREATED,
    Json(SubscribeResponse { success: true, subscriber, notification }),
  ))
}

#[derive(Debug, Serialize)]
pub struct SubscriberList {
  pub success:     bool,
  pub subscribers: Vec<Subscriber>,
}

/// `GET /api/subscribers`
pub async fn list<S, N>(
  State(state): State<AppState<S, N>>,
) -> Result<Json<SubscriberList>, ApiError>
where
  S: RecordStore,
  N: Notifier,
{
  let subscribers = state
    .store
    .list_subscribers()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(SubscriberList { success: true, subscribers }))
}
