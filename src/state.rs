use crate::rate_limit::RateLimiter;
use std::time::Duration;

// app's shared state
pub struct AppState {
    pub client: reqwest::Client,
    pub webhook_url: String,            // where the normalized phone goes
    pub upstream_timeout: Duration,     // per-request cap on the webhook call
    pub rate_limiter: RateLimiter,
}
