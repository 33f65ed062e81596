use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::json;

use crate::{
    middleware::rate_limit::{client_ip, CONTACT_FORM},
    models::contact::{ContactChannels, ContactRequest, ContactResponse},
    routes::{bad_request, ApiError},
    services::{
        contact::{contact_channels, validate},
        metrics::CONTACT_COUNTER,
    },
    AppState,
};

/// GET /contact/channels: WhatsApp and phone deep links.
pub async fn channels(State(state): State<AppState>) -> Json<ContactChannels> {
    Json(contact_channels(&state.config))
}

/// POST /contact: relay the form to the business chat.
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    validate(&payload).map_err(bad_request)?;

    CONTACT_FORM.check(&state.redis, &client_ip(&headers)).await?;

    let contact = state.contact.as_ref().ok_or_else(|| {
        CONTACT_COUNTER.with_label_values(&["unavailable"]).inc();
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "Contact service unavailable" })),
        )
    })?;

    contact.submit(&payload).await.map_err(|e| {
        tracing::error!("Failed to relay contact request: {e}");
        CONTACT_COUNTER.with_label_values(&["failed"]).inc();
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to process request" })),
        )
    })?;

    CONTACT_COUNTER.with_label_values(&["sent"]).inc();
    Ok(Json(ContactResponse { success: true }))
}
