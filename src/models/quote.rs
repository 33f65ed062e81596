use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::locale::Locale;

/// What the visitor picked in the configurator.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteSelection {
    /// A catalog tent, optionally narrowed to one of its sizes.
    Catalog {
        tent_slug: String,
        size_id: Option<Uuid>,
    },
    /// A tent type with free width / height in meters.
    Custom {
        tent_type_id: Uuid,
        width: f64,
        height: f64,
    },
}

/// Body for POST /quote.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub locale: Locale,
    #[serde(flatten)]
    pub selection: QuoteSelection,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteLink {
    pub message: String,
    pub whatsapp_url: String,
}
