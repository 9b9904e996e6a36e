// src/job_extraction/error.rs
use thiserror::Error;

/// Errors raised by the URL extraction path and the input boundary.
///
/// All failures are terminal for the single extraction attempt; the crate
/// never retries. Fallback policy (e.g. asking the user to paste the posting
/// text after a failed fetch) belongs to callers.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input string is not a fetchable http(s) URL. Raised before any
    /// network I/O.
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// The request (or body read) exceeded the configured timeout.
    #[error("request timed out after {seconds}s")]
    FetchTimeout { seconds: u64 },

    /// The server answered with a non-2xx status.
    #[error("fetch failed with HTTP status {status}")]
    FetchFailed { status: u16 },

    /// Any other transport-level failure (DNS, TLS, connection reset).
    #[error("fetch error: {message}")]
    Fetch { message: String },

    /// Blank text supplied to the extraction boundary.
    #[error("input text is empty")]
    EmptyInput,
}
