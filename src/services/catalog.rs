use sqlx::PgPool;

use crate::{
    models::{project::Project, review::Review, service::Service},
    services::slug::{decode_slug, SLUG_MATCH},
};

/// Reads for the standalone catalog entities: services, projects, reviews.
pub struct CatalogService;

impl CatalogService {
    pub async fn list_services(pool: &PgPool) -> anyhow::Result<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>("SELECT * FROM services ORDER BY created_at")
            .fetch_all(pool)
            .await?;
        Ok(services)
    }

    pub async fn service_by_slug(pool: &PgPool, raw_slug: &str) -> anyhow::Result<Option<Service>> {
        let slug = decode_slug(raw_slug);
        let service = sqlx::query_as::<_, Service>(&format!(
            "SELECT * FROM services WHERE {SLUG_MATCH} LIMIT 1"
        ))
        .bind(slug.as_ref())
        .fetch_optional(pool)
        .await?;
        Ok(service)
    }

    /// Most recent projects first.
    pub async fn list_projects(pool: &PgPool) -> anyhow::Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY date DESC")
            .fetch_all(pool)
            .await?;
        Ok(projects)
    }

    pub async fn project_by_slug(pool: &PgPool, raw_slug: &str) -> anyhow::Result<Option<Project>> {
        let slug = decode_slug(raw_slug);
        let project = sqlx::query_as::<_, Project>(&format!(
            "SELECT * FROM projects WHERE {SLUG_MATCH} LIMIT 1"
        ))
        .bind(slug.as_ref())
        .fetch_optional(pool)
        .await?;
        Ok(project)
    }

    pub async fn list_reviews(pool: &PgPool) -> anyhow::Result<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at")
            .fetch_all(pool)
            .await?;
        Ok(reviews)
    }
}
