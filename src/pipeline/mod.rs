//! Pipeline orchestration.
//!
//! Composes extraction, resolution, and rule application into one
//! request/response cycle: text → candidate URL → resolved URL → clean URL.

use crate::error_handling::PipelineError;
use crate::extract::extract_first_url;
use crate::resolve::Resolve;
use crate::rules::RuleEngine;

/// One-shot URL cleaning pipeline.
///
/// Holds no mutable state, so a single instance serves any number of
/// concurrent requests without locking. Each request performs one outbound
/// probe, or two when the `163cn.tv` rule fires; the probes are sequential
/// because the nested one depends on the generic one's outcome.
pub struct Pipeline<R: Resolve> {
    resolver: R,
    rules: RuleEngine<R>,
}

impl<R: Resolve + Clone> Pipeline<R> {
    /// Builds a pipeline around `resolver`.
    ///
    /// The rule engine gets its own handle to the same resolver so the
    /// nested `163cn.tv` resolution shares one implementation with the
    /// generic pass.
    pub fn new(resolver: R) -> Self {
        Self {
            rules: RuleEngine::new(resolver.clone()),
            resolver,
        }
    }

    /// Runs the full pipeline over a pasted text blob.
    ///
    /// Extracts the first URL, collapses any short-link redirect chain, and
    /// applies the per-domain rule. Failure at any stage short-circuits; no
    /// stage retries.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::NoUrlFound`] when the text contains no URL
    /// - [`PipelineError::Resolution`] when a network probe fails
    pub async fn process(&self, text: &str) -> Result<String, PipelineError> {
        let candidate = extract_first_url(text).ok_or(PipelineError::NoUrlFound)?;
        log::info!("Extracted candidate URL: {candidate}");

        let resolved = self.resolver.resolve(candidate).await?;
        if resolved != candidate {
            log::info!("Short link resolved to: {resolved}");
        }

        let clean = self.rules.clean(&resolved).await?;
        log::info!("Clean URL: {clean}");
        Ok(clean)
    }
}
