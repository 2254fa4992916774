use serde::{Deserialize, Serialize};

// Response body for every outcome of the test-call endpoint
#[derive(Deserialize, Serialize, Clone)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn error(code: &str) -> Self {
        Self {
            ok: false,
            error: Some(code.to_string()),
        }
    }
}

// Payload forwarded to the automation webhook
#[derive(Deserialize, Serialize, Clone)]
pub struct WebhookPayload {
    pub phone: String,
}
