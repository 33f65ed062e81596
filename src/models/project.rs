use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A past installation. May showcase a tent, a tent type and a review, or none.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title_ar: String,
    pub title_en: String,
    pub slug_ar: String,
    pub slug_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub image_urls: Vec<String>,
    pub keywords_ar: Vec<String>,
    pub keywords_en: Vec<String>,
    pub tags_ar: Vec<String>,
    pub tags_en: Vec<String>,
    pub date: DateTime<Utc>,
    pub tent_id: Option<Uuid>,
    pub tent_type_id: Option<Uuid>,
    pub review_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
