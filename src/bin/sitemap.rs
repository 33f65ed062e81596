//! Write the sitemap to stdout or a file.
//!
//! Usage: sitemap [--base-url URL] [--output FILE]
//!
//! Reads DATABASE_URL (and SITE_BASE_URL when --base-url is omitted).
//! A database failure still produces the static pages.

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;

use tent_catalog_api::services::sitemap::{render_xml, SitemapService};

#[derive(Parser)]
#[command(name = "sitemap", about = "Generate the bilingual sitemap.xml")]
struct Args {
    /// Public site origin, e.g. https://riyadh-tents.com
    #[arg(long, env = "SITE_BASE_URL", default_value = "https://riyadh-tents.com")]
    base_url: String,

    /// Output file (stdout if not specified)
    #[arg(long)]
    output: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let base_url = args.base_url.trim_end_matches('/');

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL required")?;
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect_lazy(&database_url)
        .context("Invalid DATABASE_URL")?;

    let entries = SitemapService::build(&pool, base_url).await;
    tracing::info!("Sitemap: {} entries", entries.len());
    let xml = render_xml(&entries);

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, xml)
                .await
                .with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("Wrote {:?}", path);
        }
        None => print!("{xml}"),
    }

    Ok(())
}
