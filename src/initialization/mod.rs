//! Initialization of shared resources.
//!
//! This module provides initialization helpers for the HTTP client and the
//! logger. The binary calls these once at startup; library users may bring
//! their own client and logger instead.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
