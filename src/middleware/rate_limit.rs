use axum::{
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::json;

use crate::routes::ApiError;

/// A fixed-window limit on one kind of lead submission, counted per client.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub scope: &'static str,
    pub max_attempts: u64,
    pub window_secs: u64,
}

/// Contact form: 5 submissions per hour per IP.
pub const CONTACT_FORM: RateLimit = RateLimit {
    scope: "contact:form",
    max_attempts: 5,
    window_secs: 3600,
};

impl RateLimit {
    pub fn key(&self, client: &str) -> String {
        format!("rate:{}:{}", self.scope, client)
    }

    fn exceeded(&self, count: u64) -> bool {
        count > self.max_attempts
    }

    /// INCR the client's counter and set its TTL on the first hit, so later
    /// hits never stretch the window.
    ///
    /// An unreachable Redis lets the request through with a warning.
    pub async fn check(&self, redis: &redis::Client, client: &str) -> Result<(), ApiError> {
        let mut conn = match redis.get_multiplexed_async_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!("Redis unavailable, {} not rate limited: {e}", self.scope);
                return Ok(());
            }
        };

        let key = self.key(client);
        let count: u64 = redis::cmd("INCR")
            .arg(&key)
            .query_async(&mut conn)
            .await
            .unwrap_or(0);

        if count == 1 {
            let _: Result<(), _> = redis::cmd("EXPIRE")
                .arg(&key)
                .arg(self.window_secs)
                .query_async(&mut conn)
                .await;
        }

        if self.exceeded(count) {
            tracing::info!("{} limit hit for {client}", self.scope);
            return Err((
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": "Too many requests. Please try again later." })),
            ));
        }

        Ok(())
    }
}

/// Client IP as forwarded by the reverse proxy.
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("X-Real-IP")
        .or_else(|| headers.get("X-Forwarded-For"))
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
