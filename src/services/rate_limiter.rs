// src/services/rate_limiter.rs
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

/// Rolling-window request limiter keyed by client identity.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<RwLock<HashMap<String, Vec<Instant>>>>,
    window: Duration,
    max_requests: usize,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            window,
            max_requests,
        }
    }

    /// Record one request from this client. Returns false when the client
    /// already used up its window.
    pub async fn check(&self, client: &str) -> bool {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let hits = guard.entry(client.to_string()).or_default();
        hits.retain(|at| now.duration_since(*at) < self.window);
        if hits.len() >= self.max_requests {
            return false;
        }
        hits.push(now);
        true
    }

    /// Drop clients with no requests left in the window. Returns number removed.
    pub async fn purge_idle(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, hits| {
            hits.retain(|at| now.duration_since(*at) < self.window);
            !hits.is_empty()
        });
        before - guard.len()
    }

    /// Number of clients currently tracked.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }
}
