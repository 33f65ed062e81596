use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tent_catalog_api::{
    config::Config, db, routes, services::contact::ContactService, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);

    let pool = db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;
    db::run_migrations(&pool).await.context("Failed to run migrations")?;
    info!("Database connected and migrations applied");

    let redis = redis::Client::open(config.redis_url.as_str())?;

    let contact = ContactService::new(&config).map(Arc::new);
    if contact.is_some() {
        info!("Contact relay configured");
    } else {
        info!("Contact relay not configured, contact form disabled");
    }

    let state = AppState {
        db: pool,
        redis,
        config: config.clone(),
        contact,
    };

    let app = routes::router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("tent catalog API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
