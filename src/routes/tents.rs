use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    models::tent::{TentDetail, TentListing, TentType},
    routes::{internal_error, not_found, ApiError},
    services::{metrics::record_lookup, tents::TentService},
    AppState,
};

/// GET /tent-types
pub async fn list_tent_types(State(state): State<AppState>) -> Result<Json<Vec<TentType>>, ApiError> {
    TentService::list_types(&state.db)
        .await
        .map(Json)
        .map_err(internal_error)
}

/// GET /tents: every tent with its type and max width / height.
pub async fn list_tents(State(state): State<AppState>) -> Result<Json<Vec<TentListing>>, ApiError> {
    TentService::list(&state.db)
        .await
        .map(Json)
        .map_err(internal_error)
}

/// GET /tents/{slug}: Arabic or English slug.
pub async fn get_tent(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<TentDetail>, ApiError> {
    let tent = TentService::get_by_slug(&state.db, &slug)
        .await
        .map_err(internal_error)?;
    record_lookup("tent", &tent);
    tent.map(Json).ok_or_else(not_found)
}
