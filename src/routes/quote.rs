use axum::{extract::State, Json};

use crate::{
    models::quote::{QuoteLink, QuoteRequest, QuoteSelection},
    routes::{bad_request, internal_error, not_found, ApiError},
    services::{
        configurator::{validate_selection, ConfiguratorService},
        metrics::QUOTES_COUNTER,
    },
    AppState,
};

/// POST /quote: configurator choice to a pre-filled WhatsApp message.
pub async fn compose_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteLink>, ApiError> {
    validate_selection(&req.selection).map_err(bad_request)?;

    let link = ConfiguratorService::compose(
        &state.db,
        &state.config.whatsapp_number,
        req.locale,
        &req.selection,
    )
    .await
    .map_err(internal_error)?
    .ok_or_else(not_found)?;

    let kind = match req.selection {
        QuoteSelection::Catalog { .. } => "catalog",
        QuoteSelection::Custom { .. } => "custom",
    };
    QUOTES_COUNTER.with_label_values(&[kind]).inc();

    Ok(Json(link))
}
