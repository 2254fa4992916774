use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("testcall_requests_total", "Total number of requests").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter =
        register_counter!("testcall_rate_limited_total", "Requests rejected by the rate limiter")
            .unwrap();
    pub static ref UPSTREAM_FAILURES: Counter = register_counter!(
        "testcall_upstream_failures_total",
        "Webhook calls that failed or returned a non-success status"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "testcall_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
    pub static ref RATE_LIMIT_KEYS: Gauge =
        register_gauge!("testcall_rate_limit_keys", "Current number of tracked client keys")
            .unwrap();
}
