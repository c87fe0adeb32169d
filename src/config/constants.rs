//! Configuration constants.
//!
//! This module defines the operational constants used throughout the
//! application: network timeouts and the default User-Agent.

/// Per-request timeout in seconds (covers the whole probe, redirects included).
///
/// A HEAD probe transfers no body, so 10s is generous; slow short-link
/// services occasionally need several hops to settle.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds.
///
/// Kept below the global timeout so unreachable hosts fail fast during
/// connect instead of eating the whole request budget.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// Several short-link services refuse or divert requests with obvious
/// non-browser User-Agents, which would change the redirect chain we
/// observe. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
