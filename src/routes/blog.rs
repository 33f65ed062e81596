use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::{
    models::blog::{BlogPost, PostLimitQuery},
    routes::{internal_error, not_found, ApiError},
    services::{
        blog::{BlogService, DEFAULT_POST_LIMIT},
        metrics::record_lookup,
    },
    AppState,
};

const MAX_POST_LIMIT: i64 = 50;

fn post_limit(query: &PostLimitQuery) -> i64 {
    query.limit.unwrap_or(DEFAULT_POST_LIMIT).clamp(0, MAX_POST_LIMIT)
}

/// GET /blog: all published posts, newest first.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    BlogService::list(&state.db)
        .await
        .map(Json)
        .map_err(internal_error)
}

/// GET /blog/latest?limit=3
pub async fn latest_posts(
    State(state): State<AppState>,
    Query(query): Query<PostLimitQuery>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    BlogService::latest(&state.db, post_limit(&query))
        .await
        .map(Json)
        .map_err(internal_error)
}

/// GET /blog/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = BlogService::get_by_slug(&state.db, &slug)
        .await
        .map_err(internal_error)?;
    record_lookup("post", &post);
    post.map(Json).ok_or_else(not_found)
}

/// GET /blog/related/{id}?limit=3
pub async fn related_posts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PostLimitQuery>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    BlogService::related(&state.db, id, post_limit(&query) as usize)
        .await
        .map(Json)
        .map_err(internal_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_limit() {
        assert_eq!(post_limit(&PostLimitQuery { limit: None }), 3);
        assert_eq!(post_limit(&PostLimitQuery { limit: Some(-1) }), 0);
        assert_eq!(post_limit(&PostLimitQuery { limit: Some(500) }), MAX_POST_LIMIT);
    }
}
