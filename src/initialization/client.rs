//! HTTP client initialization.
//!
//! This module provides the one shared HTTP client used for redirect
//! probes.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by the resolver.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - Global request timeout from config
/// - TCP connect timeout so unreachable hosts fail fast
/// - Automatic redirect following (reqwest's default limit of 10 hops)
///
/// The client is wrapped in an `Arc` because it is shared by the generic
/// resolution pass and the rule engine's nested one.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
