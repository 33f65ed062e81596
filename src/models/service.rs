use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A rental service offered by the business (event setup, catering tents, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub name_ar: String,
    pub name_en: String,
    pub slug_ar: String,
    pub slug_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub image_urls: Vec<String>,
    pub keywords_ar: Vec<String>,
    pub keywords_en: Vec<String>,
    pub tags_ar: Vec<String>,
    pub tags_en: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
