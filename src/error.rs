use thiserror::Error;

/// Everything that can abort a run, tagged per boundary so `main` can print
/// a distinguishable diagnostic before exiting non-zero.
#[derive(Debug, Error)]
pub enum Error {
    /// User picked a playlist index that is not a number or out of range.
    #[error("invalid selection: {0}")]
    Selection(String),

    /// Spotify answered with a non-success status.
    #[error("Spotify API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, TLS, timeout). Not retried.
    #[error("request failed: {0}")]
    Http(#[source] Box<ureq::Error>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The aggregation pass produced nothing to sample from.
    #[error("insufficient seed data: no {0}s found in the selected playlist")]
    InsufficientSeeds(&'static str),

    #[error("authorization failed: {0}")]
    Auth(String),
}

pub type Result<T> = std::result::Result<T, Error>;
