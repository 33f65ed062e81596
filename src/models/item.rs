use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub created_at: DateTime<Utc>,
}

/// One page of items. `has_more` is derived by over-fetching a single row.
#[derive(Debug, Clone, Serialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub has_more: bool,
}

/// Query params for GET /items.
#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
    /// 1-based.
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
