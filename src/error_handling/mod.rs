//! Error handling.
//!
//! This module provides:
//! - Error type definitions for every pipeline stage
//! - Categorization of transport errors for logging
//! - The static user-facing message for each failure
//!
//! Failures are never retried and never crash: everything is recovered at
//! the pipeline boundary and converted into a descriptive message.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{InitializationError, PipelineError, ResolutionError, ResolutionErrorKind};
