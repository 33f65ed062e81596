use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    models::search::{SearchQuery, SearchResults},
    routes::{internal_error, ApiError},
    services::{
        metrics::{SEARCHES_COUNTER, SEARCH_SECONDS},
        search::{like_pattern, SearchService},
    },
    AppState,
};

/// GET /search?q=...
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResults>, ApiError> {
    let Some(pattern) = like_pattern(&params.q) else {
        SEARCHES_COUNTER.with_label_values(&["short"]).inc();
        return Ok(Json(SearchResults::default()));
    };

    let started = Instant::now();
    let results = SearchService::search_pattern(&state.db, &pattern)
        .await
        .map_err(internal_error)?;

    let outcome = if results.total_count == 0 { "empty" } else { "hit" };
    SEARCHES_COUNTER.with_label_values(&[outcome]).inc();
    SEARCH_SECONDS
        .with_label_values(&[outcome])
        .observe(started.elapsed().as_secs_f64());

    Ok(Json(results))
}
