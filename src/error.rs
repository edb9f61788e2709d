//! Error types for the fetch path.

use thiserror::Error;

/// Failures while fetching the contribution calendar.
///
/// Rendering is a total function over its input, so this is the only
/// error class in the system. Any variant aborts the run before the
/// SVG is written; there is no retry and no partial output.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("No contribution data for user '{0}'")]
    UnknownUser(String),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
