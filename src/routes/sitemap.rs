use axum::{extract::State, http::header, response::IntoResponse};

use crate::{
    services::sitemap::{render_xml, SitemapService},
    AppState,
};

/// GET /sitemap.xml: never fails; falls back to the static pages.
pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let entries = SitemapService::build(&state.db, &state.config.site_base_url).await;
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_xml(&entries),
    )
}
