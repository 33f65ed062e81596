use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

/// Deep links for the "talk to us" buttons.
#[derive(Debug, Clone, Serialize)]
pub struct ContactChannels {
    pub whatsapp_url: String,
    pub phone_url: String,
}
