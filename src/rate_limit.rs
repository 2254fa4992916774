use dashmap::DashMap;

// Per-key request throttle backed by a process-local map.
// Keys are client IPs; values are epoch-ms timestamps of admitted requests.
// Entries are pruned lazily on each check and never swept, so the map only
// resets when the process restarts.
pub struct RateLimiter {
    entries: DashMap<String, Vec<i64>>,
    max_requests: usize,
    window_ms: i64,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window_ms: i64) -> Self {
        Self {
            entries: DashMap::new(),
            max_requests: max_requests as usize,
            window_ms,
        }
    }

    // true = request admitted, false = over the limit
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, chrono::Utc::now().timestamp_millis())
    }

    // Separate processes sharing nothing means this is best-effort only;
    // a cold start drops the whole map.
    fn check_at(&self, key: &str, now_ms: i64) -> bool {
        let mut timestamps = self.entries.entry(key.to_string()).or_default();

        // drop everything outside the trailing window
        timestamps.retain(|&t| now_ms - t < self.window_ms);

        if timestamps.len() >= self.max_requests {
            return false;
        }

        timestamps.push(now_ms);
        true
    }

    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }
}
