//! Redirect chain resolution.
//!
//! Short-link services answer with an HTTP redirect instead of content; this
//! module follows the chain to the final destination. Probes use HEAD
//! semantics so no response body is ever transferred.

use std::sync::Arc;

use crate::error_handling::ResolutionError;

/// Capability for resolving a URL's redirect chain to its final destination.
///
/// The pipeline uses it once generically on every extracted URL, and the
/// rule engine uses it a second time inside the `163cn.tv` rule. Both call
/// sites share the same resolution semantics through this trait, which also
/// lets tests substitute a stub for the network.
#[allow(async_fn_in_trait)]
pub trait Resolve {
    /// Follows every redirect from `url` and returns the final effective URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] when the probe cannot complete (DNS
    /// failure, connection refused, timeout, exhausted redirect chain).
    async fn resolve(&self, url: &str) -> Result<String, ResolutionError>;
}

/// Network-backed [`Resolve`] implementation.
///
/// Issues a HEAD request with automatic redirect following (reqwest's
/// default limit of 10 hops) and a bounded timeout, and reports the final
/// request's effective URL. A non-redirect status, error or not, terminates
/// the chain; the URL that produced it is the result.
#[derive(Clone)]
pub struct Resolver {
    client: Arc<reqwest::Client>,
}

impl Resolver {
    /// Creates a resolver on top of a shared HTTP client.
    ///
    /// The client must have redirect following enabled; see
    /// `initialization::init_client`.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl Resolve for Resolver {
    async fn resolve(&self, url: &str) -> Result<String, ResolutionError> {
        log::debug!("Probing redirect chain for {url}");

        let response = self.client.head(url).send().await.map_err(|e| {
            let err = ResolutionError::from(e);
            log::warn!("Probe for {url} failed ({}): {err}", err.kind());
            err
        })?;

        let final_url = response.url().to_string();
        if final_url != url {
            log::debug!("Redirects led {url} to {final_url}");
        }
        Ok(final_url)
    }
}
