use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

/// GET /health
///
/// Counting tents checks both the connection and that migrations ran. Redis
/// and the contact relay are reported but never fail the check, since the
/// catalog reads work without them.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (tents, redis) = tokio::join!(
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tents").fetch_one(&state.db),
        ping_redis(&state.redis),
    );
    report(tents, redis, state.contact.is_some())
}

async fn ping_redis(client: &redis::Client) -> bool {
    let Ok(mut conn) = client.get_multiplexed_async_connection().await else {
        return false;
    };
    let pong: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
    pong.is_ok()
}

fn report(
    tents: Result<i64, sqlx::Error>,
    redis_ok: bool,
    contact_relay: bool,
) -> (StatusCode, Json<Value>) {
    let redis = if redis_ok { "ok" } else { "unavailable" };
    match tents {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "db": "connected",
                "tents": count,
                "redis": redis,
                "contact_relay": contact_relay,
            })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "error",
                    "db": e.to_string(),
                    "redis": redis,
                    "contact_relay": contact_relay,
                })),
            )
        }
    }
}
