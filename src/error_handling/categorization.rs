//! Error categorization.
//!
//! This module maps transport-level errors onto the internal failure modes
//! used for logging. The pipeline itself only ever reports the single
//! `ResolutionError` kind to callers.

use super::types::ResolutionErrorKind;

/// Categorizes a `reqwest::Error` into a [`ResolutionErrorKind`].
///
/// DNS failures surface through reqwest as connect errors, so they land in
/// `Connect`. Redirect-limit exhaustion is reported by reqwest's redirect
/// policy and lands in `Redirect`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ResolutionErrorKind {
    if error.is_builder() {
        ResolutionErrorKind::Builder
    } else if error.is_redirect() {
        ResolutionErrorKind::Redirect
    } else if error.is_timeout() {
        ResolutionErrorKind::Timeout
    } else if error.is_connect() {
        ResolutionErrorKind::Connect
    } else if error.is_request() {
        ResolutionErrorKind::Request
    } else {
        ResolutionErrorKind::Other
    }
}
