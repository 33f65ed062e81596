use reqwest::Client;
use serde_json::json;

use crate::{
    config::Config,
    models::contact::{ContactChannels, ContactRequest},
};

const BOT_API: &str = "https://api.telegram.org";

/// Relays contact-form submissions to the business chat through a bot.
pub struct ContactService {
    client: Client,
    bot_token: String,
    chat_id: String,
}

impl ContactService {
    /// `None` when the bot token or chat id is not configured.
    pub fn new(config: &Config) -> Option<Self> {
        let bot_token = config.contact_bot_token.clone()?;
        let chat_id = config.contact_chat_id.clone()?;
        Some(Self {
            client: Client::new(),
            bot_token,
            chat_id,
        })
    }

    pub async fn submit(&self, form: &ContactRequest) -> anyhow::Result<()> {
        let url = format!("{BOT_API}/bot{}/sendMessage", self.bot_token);
        let payload = json!({
            "chat_id": self.chat_id,
            "text": compose_message(form),
        });

        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("contact relay error {}: {}", status, text);
            anyhow::bail!("contact relay rejected message with status {status}");
        }

        Ok(())
    }
}

/// Plain-text message body sent to the chat.
pub fn compose_message(form: &ContactRequest) -> String {
    format!(
        "📬 New Contact Form Submission\n\n\
         👤 Name: {}\n\
         📧 Email: {}\n\
         📱 Phone: {}\n\
         📌 Subject: {}\n\n\
         💬 Message:\n{}",
        form.name.trim(),
        form.email.trim(),
        form.phone.trim(),
        form.subject.trim(),
        form.message.trim(),
    )
}

/// Reject submissions that would relay an empty message.
pub fn validate(form: &ContactRequest) -> Result<(), &'static str> {
    if form.name.trim().is_empty() {
        return Err("name is required");
    }
    if form.message.trim().is_empty() {
        return Err("message is required");
    }
    if form.email.trim().is_empty() && form.phone.trim().is_empty() {
        return Err("email or phone is required");
    }
    Ok(())
}

/// WhatsApp and phone deep links for the configured business number.
pub fn contact_channels(config: &Config) -> ContactChannels {
    ContactChannels {
        whatsapp_url: format!("https://wa.me/{}", config.whatsapp_number),
        phone_url: format!("tel:{}", config.phone_number),
    }
}
