//! Service and FAQ listings served alongside the record API.
//!
//! Catalog content is read-only reference data supplied by configuration;
//! it is not owned by the record store and has no write path.

use serde::{Deserialize, Serialize};

/// One entry in the service listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
  pub title:       String,
  pub description: String,
  #[serde(default)]
  pub price:       String,
  #[serde(default)]
  pub category:    String,
}

/// One entry in the FAQ listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
  pub question: String,
  pub answer:   String,
  #[serde(default = "default_faq_category")]
  pub category: String,
}

fn default_faq_category() -> String {
  "general".to_string()
}

/// The full listing set. An empty catalog is valid and serves empty lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
  #[serde(default)]
  pub services: Vec<Service>,
  #[serde(default)]
  pub faqs:     Vec<FaqEntry>,
}
