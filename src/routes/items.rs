use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    models::item::{ItemPage, ItemsQuery},
    routes::{internal_error, ApiError},
    services::items::{ItemService, DEFAULT_PAGE_SIZE},
    AppState,
};

/// GET /items?page=1&limit=15
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ItemsQuery>,
) -> Result<Json<ItemPage>, ApiError> {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    ItemService::list(&state.db, page, limit)
        .await
        .map(Json)
        .map_err(internal_error)
}
