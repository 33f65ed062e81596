use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub author_name_ar: String,
    pub author_name_en: String,
    pub profile_image_url: Option<String>,
    pub review_content_ar: String,
    pub review_content_en: String,
    /// 0 to 5 in 0.5 steps. Not validated.
    pub stars: f64,
    pub position_ar: Option<String>,
    pub position_en: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
