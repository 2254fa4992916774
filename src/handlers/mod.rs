mod health;
mod metrics;
mod test_call;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use test_call::test_call_handler;
