use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub redis_url: String,
    pub host: String,
    pub port: u16,
    /// Public site origin used for sitemap URLs, e.g. "https://riyadh-tents.com".
    pub site_base_url: String,
    pub whatsapp_number: String,
    pub phone_number: String,
    // Contact form relay (optional)
    pub contact_bot_token: Option<String>,
    pub contact_chat_id: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".into())
                .parse()?,
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            site_base_url: env::var("SITE_BASE_URL")
                .unwrap_or_else(|_| "https://riyadh-tents.com".into())
                .trim_end_matches('/')
                .to_string(),
            whatsapp_number: env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "966552248896".into()),
            phone_number: env::var("PHONE_NUMBER")
                .unwrap_or_else(|_| "+966552248896".into()),
            contact_bot_token: env::var("CONTACT_BOT_TOKEN").ok().filter(|s| !s.is_empty()),
            contact_chat_id: env::var("CONTACT_CHAT_ID").ok().filter(|s| !s.is_empty()),
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).map_err(|_| anyhow::anyhow!("Missing required env var: {}", key))
}
