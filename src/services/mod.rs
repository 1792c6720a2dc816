// src/services/mod.rs
pub mod classifier;
pub mod rate_limiter;
pub mod record_store;
pub mod text_provider;
