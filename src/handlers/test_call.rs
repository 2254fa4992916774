use axum::{
    Json,
    body::Bytes,
    extract::{ConnectInfo, State},
    http::{HeaderMap, Method, StatusCode},
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::{
    RATE_LIMIT_KEYS, RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL, UPSTREAM_FAILURES,
};
use crate::models::{ApiResponse, WebhookPayload};
use crate::phone::normalize_phone;
use crate::state::AppState;

fn reply(status: StatusCode, code: &str) -> (StatusCode, Json<ApiResponse>) {
    (status, Json(ApiResponse::error(code)))
}

// Resolve the key used for rate limiting. Peer address wins, then the
// usual proxy headers; "unknown" lumps everything unidentifiable into
// one shared bucket.
fn client_ip(peer: Option<IpAddr>, headers: &HeaderMap) -> String {
    if let Some(ip) = peer {
        return ip.to_string();
    }

    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        // first entry is the original client
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    "unknown".to_string()
}

// The route is registered with any() so wrong methods still get a JSON
// body instead of axum's default empty 405.
pub async fn test_call_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<ApiResponse>) {
    REQUEST_TOTAL.inc();

    if method != Method::POST {
        return reply(StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed");
    }

    let key = client_ip(Some(addr.ip()), &headers);

    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return reply(StatusCode::BAD_REQUEST, "invalid_json"),
    };

    let raw_phone = match payload.get("phone").and_then(|v| v.as_str()) {
        Some(phone) if !phone.is_empty() => phone,
        _ => return reply(StatusCode::BAD_REQUEST, "invalid_phone"),
    };

    let normalized = match normalize_phone(raw_phone) {
        Some(normalized) => normalized,
        None => return reply(StatusCode::BAD_REQUEST, "invalid_phone"),
    };

    if !state.rate_limiter.check(&key) {
        RATE_LIMITED_TOTAL.inc();
        return reply(StatusCode::TOO_MANY_REQUESTS, "rate_limited");
    }
    RATE_LIMIT_KEYS.set(state.rate_limiter.tracked_keys() as f64);

    let start_time = Instant::now();

    // single attempt, no retries; the caller can resubmit within their quota
    let result = state
        .client
        .post(&state.webhook_url)
        .timeout(state.upstream_timeout)
        .json(&WebhookPayload { phone: normalized })
        .send()
        .await;

    let response = match result {
        Ok(res) if res.status().is_success() => (StatusCode::OK, Json(ApiResponse::success())),
        Ok(res) => {
            UPSTREAM_FAILURES.inc();
            eprintln!("[test-call] Webhook returned status {}", res.status());
            reply(StatusCode::BAD_GATEWAY, "upstream_failed")
        }
        Err(e) => {
            UPSTREAM_FAILURES.inc();
            eprintln!("[test-call] Webhook request failed: {}", e);
            reply(StatusCode::BAD_GATEWAY, "upstream_failed")
        }
    };

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peer_address_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "10.0.0.1".parse().unwrap());

        let peer: IpAddr = "192.168.1.7".parse().unwrap();
        assert_eq!(client_ip(Some(peer), &headers), "192.168.1.7");
    }

    #[test]
    fn forwarded_for_takes_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", " 10.0.0.1 , 10.0.0.2".parse().unwrap());

        assert_eq!(client_ip(None, &headers), "10.0.0.1");
    }

    #[test]
    fn real_ip_is_the_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "10.0.0.9".parse().unwrap());

        assert_eq!(client_ip(None, &headers), "10.0.0.9");
    }

    #[test]
    fn unknown_when_nothing_identifies_the_client() {
        assert_eq!(client_ip(None, &HeaderMap::new()), "unknown");
    }
}
