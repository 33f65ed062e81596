use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title_ar: String,
    pub title_en: String,
    pub slug_ar: String,
    pub slug_en: String,
    pub excerpt_ar: String,
    pub excerpt_en: String,
    /// HTML body.
    pub content_ar: String,
    pub content_en: String,
    pub featured_image_url: String,
    pub image_urls: Vec<String>,
    pub keywords_ar: Vec<String>,
    pub keywords_en: Vec<String>,
    pub tags_ar: Vec<String>,
    pub tags_en: Vec<String>,
    pub meta_description_ar: String,
    pub meta_description_en: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query params for GET /blog/latest and GET /blog/related/{id}.
#[derive(Debug, Deserialize)]
pub struct PostLimitQuery {
    pub limit: Option<i64>,
}
