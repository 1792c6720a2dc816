// src/state.rs
use std::sync::Arc;
use std::time::Duration;

use crate::services::rate_limiter::RateLimiter;
use crate::services::record_store::RecordStore;
use crate::services::text_provider::TextProvider;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: RecordStore,
    pub provider: TextProvider,
    pub limiter: RateLimiter,
}

impl AppState {
    /// Production limits: 100 requests per rolling 15 minutes per client.
    pub fn new(store: RecordStore, provider: TextProvider) -> Self {
        Self::with_limiter(
            store,
            provider,
            RateLimiter::new(Duration::from_secs(15 * 60), 100),
        )
    }

    pub fn with_limiter(store: RecordStore, provider: TextProvider, limiter: RateLimiter) -> Self {
        Self {
            store,
            provider,
            limiter,
        }
    }
}
