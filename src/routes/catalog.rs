use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    models::{project::Project, review::Review, service::Service},
    routes::{internal_error, not_found, ApiError},
    services::{catalog::CatalogService, metrics::record_lookup},
    AppState,
};

pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    CatalogService::list_services(&state.db)
        .await
        .map(Json)
        .map_err(internal_error)
}

pub async fn get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Service>, ApiError> {
    let service = CatalogService::service_by_slug(&state.db, &slug)
        .await
        .map_err(internal_error)?;
    record_lookup("service", &service);
    service.map(Json).ok_or_else(not_found)
}

pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    CatalogService::list_projects(&state.db)
        .await
        .map(Json)
        .map_err(internal_error)
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let project = CatalogService::project_by_slug(&state.db, &slug)
        .await
        .map_err(internal_error)?;
    record_lookup("project", &project);
    project.map(Json).ok_or_else(not_found)
}

pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    CatalogService::list_reviews(&state.db)
        .await
        .map(Json)
        .map_err(internal_error)
}
