//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A redirect-chain probe could not complete.
///
/// Wraps every network and protocol failure (DNS, connect, timeout,
/// exhausted redirect chain) into a single kind; the pipeline never
/// distinguishes sub-causes to the end user. The underlying cause is
/// still categorized via [`ResolutionError::kind`] for logging.
#[derive(Error, Debug)]
#[error("network probe failed: {source}")]
pub struct ResolutionError {
    #[from]
    source: ReqwestError,
}

impl ResolutionError {
    /// Categorizes the underlying failure for logging and statistics.
    pub fn kind(&self) -> ResolutionErrorKind {
        super::categorization::categorize_reqwest_error(&self.source)
    }
}

/// Failure modes of a redirect-chain probe.
///
/// Used for internal logging only; the user-facing outcome is always the
/// single [`ResolutionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ResolutionErrorKind {
    /// The request could not be built (usually a malformed URL).
    Builder,
    /// The redirect limit was exhausted or a redirect loop detected.
    Redirect,
    /// The request timed out.
    Timeout,
    /// The TCP connection could not be established (includes DNS failures).
    Connect,
    /// The request failed while in flight.
    Request,
    /// Anything reqwest reports that does not fit the cases above.
    Other,
}

impl std::fmt::Display for ResolutionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResolutionErrorKind {
    /// Returns a human-readable string representation of the failure mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionErrorKind::Builder => "request builder error",
            ResolutionErrorKind::Redirect => "redirect chain error",
            ResolutionErrorKind::Timeout => "request timeout",
            ResolutionErrorKind::Connect => "connection error",
            ResolutionErrorKind::Request => "request error",
            ResolutionErrorKind::Other => "other network error",
        }
    }
}

/// Failures the pipeline can surface to its caller.
///
/// Each variant maps to a distinct, static user-facing message via
/// [`PipelineError::user_message`]; nothing in the pipeline panics or
/// retries.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The extractor found no URL-shaped substring in the input text.
    #[error("no http(s) link found in the input text")]
    NoUrlFound,

    /// A network probe failed (generic resolution or the nested rule case).
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

impl PipelineError {
    /// Returns the static message shown to the end user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineError::NoUrlFound => "No link was found in the provided text.",
            PipelineError::Resolution(_) => {
                "The link could not be resolved. Check that it is valid and reachable."
            }
        }
    }
}
