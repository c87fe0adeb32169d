//! linkwash library: URL cleaning for links pasted as free text
//!
//! This library takes an arbitrary text blob containing one URL, possibly
//! wrapped in tracking query parameters or a short-link redirect, and
//! produces a canonical clean URL: the first URL is extracted from the
//! text, its redirect chain is followed to the final destination, and a
//! per-domain rule strips tracking parameters while preserving the ones a
//! link needs to function.
//!
//! # Example
//!
//! ```no_run
//! use linkwash::initialization::init_client;
//! use linkwash::{Config, Pipeline, Resolver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config)?;
//! let pipeline = Pipeline::new(Resolver::new(client));
//!
//! let clean = pipeline
//!     .process("check this out https://example.com/page?utm_source=share thanks")
//!     .await?;
//! assert_eq!(clean, "https://example.com/page");
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Resolution performs network I/O and requires a Tokio runtime. Use
//! `#[tokio::main]` in your application or ensure you're calling
//! [`Pipeline::process`] within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod extract;
pub mod initialization;
mod pipeline;
mod resolve;
mod rules;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    InitializationError, PipelineError, ResolutionError, ResolutionErrorKind,
};
pub use extract::extract_first_url;
pub use pipeline::Pipeline;
pub use resolve::{Resolve, Resolver};
pub use rules::{Rule, RuleEngine};
