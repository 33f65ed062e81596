use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    models::blog::BlogPost,
    services::slug::{decode_slug, SLUG_MATCH},
};

/// Posts without a publication date sort after dated ones.
const PUBLISHED_ORDER: &str = "ORDER BY published_at DESC NULLS LAST";

pub const DEFAULT_POST_LIMIT: i64 = 3;

pub struct BlogService;

impl BlogService {
    /// All published posts, newest first.
    pub async fn list(pool: &PgPool) -> anyhow::Result<Vec<BlogPost>> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT * FROM blog_posts WHERE is_published = TRUE {PUBLISHED_ORDER}"
        ))
        .fetch_all(pool)
        .await?;
        Ok(posts)
    }

    /// Latest `limit` published posts for the homepage section.
    pub async fn latest(pool: &PgPool, limit: i64) -> anyhow::Result<Vec<BlogPost>> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT * FROM blog_posts WHERE is_published = TRUE {PUBLISHED_ORDER} LIMIT $1"
        ))
        .bind(limit.max(0))
        .fetch_all(pool)
        .await?;
        Ok(posts)
    }

    /// A published post by either locale's slug.
    pub async fn get_by_slug(pool: &PgPool, raw_slug: &str) -> anyhow::Result<Option<BlogPost>> {
        let slug = decode_slug(raw_slug);
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT * FROM blog_posts WHERE {SLUG_MATCH} AND is_published = TRUE LIMIT 1"
        ))
        .bind(slug.as_ref())
        .fetch_optional(pool)
        .await?;
        Ok(post)
    }

    /// The most recent published posts other than `current_id`.
    ///
    /// Recency only; tags are not compared.
    pub async fn related(
        pool: &PgPool,
        current_id: Uuid,
        limit: usize,
    ) -> anyhow::Result<Vec<BlogPost>> {
        let posts = Self::list(pool).await?;
        Ok(select_related(posts, current_id, limit))
    }
}

fn select_related(posts: Vec<BlogPost>, current_id: Uuid, limit: usize) -> Vec<BlogPost> {
    posts
        .into_iter()
        .filter(|p| p.id != current_id)
        .take(limit)
        .collect()
}
