//! Read-only catalog endpoints — service and FAQ listings from config.

use axum::{Json, extract::State};
use serde::Serialize;

use frontdesk_core::{
  catalog::{FaqEntry, Service},
  notify::Notifier,
  store::RecordStore,
};

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ServiceList {
  pub success:  bool,
  pub services: Vec<Service>,
}

/// `GET /api/services`
pub async fn services<S, N>(
  State(state): State<AppState<S, N>>,
) -> Json<ServiceList>
where
  S: RecordStore,
  N: Notifier,
{
  Json(ServiceList {
    success:  true,
    services: state.catalog.services.clone(),
  })
}

#[derive(Debug, Serialize)]
pub struct FaqList {
  pub success: bool,
  pub faqs:    Vec<FaqEntry>,
}

/// `GET /api/faq`
pub async fn faq<S, N>(State(state): State<AppState<S, N>>) -> Json<FaqList>
where
  S: RecordStore,
  N: Notifier,
{
  Json(FaqList { success: true, faqs: state.catalog.faqs.clone() })
}
