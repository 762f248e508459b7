//! Error types for directory lookups

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use http::StatusCode;
use miette::Diagnostic;
use thiserror::Error;

/// Errors from a single lookup request.
///
/// A rate limit is reported separately from other HTTP failures, but
/// [`LookupError::status`] still returns 429 for it so callers that only care
/// about status codes can treat both alike.
#[derive(Debug, Error, Diagnostic)]
pub enum LookupError {
    /// HTTP transport error
    #[error("HTTP transport error: {0}")]
    #[diagnostic(
        code(pronoundb::transport),
        help("check network connectivity and TLS configuration")
    )]
    Transport(
        #[from]
        #[diagnostic_source]
        TransportError,
    ),

    /// Non-success response other than a rate limit
    #[error("{0}")]
    #[diagnostic(code(pronoundb::http_status))]
    Http(
        #[from]
        #[diagnostic_source]
        HttpError,
    ),

    /// HTTP 429 from the directory
    #[error("rate limited by PronounDB{}", retry_hint(.retry_after))]
    #[diagnostic(
        code(pronoundb::rate_limited),
        help("batch IDs into fewer bulk lookups, or wait before retrying")
    )]
    RateLimited {
        /// Parsed `Retry-After` header, if the server sent a number of seconds
        retry_after: Option<Duration>,
    },

    /// Response body was not the expected JSON
    #[error("failed to decode lookup response: {0}")]
    #[diagnostic(code(pronoundb::decode))]
    Decode(#[from] serde_json::Error),
}

fn retry_hint(retry_after: &Option<Duration>) -> String {
    match retry_after {
        Some(d) => format!(", retry after {}s", d.as_secs()),
        None => String::new(),
    }
}

impl LookupError {
    /// Whether the directory rejected the request for rate limiting.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, LookupError::RateLimited { .. })
    }

    /// How long the server asked us to wait, for rate limit errors.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            LookupError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }

    /// HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            LookupError::Http(e) => Some(e.status),
            LookupError::RateLimited { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            _ => None,
        }
    }
}

/// Transport-level errors that occur during HTTP communication
#[derive(Debug, Error, Diagnostic)]
pub enum TransportError {
    /// Failed to establish connection to server
    #[error("Connection error: {0}")]
    Connect(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// Request construction failed (malformed URI, headers, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Other transport error
    #[error("Transport error: {0}")]
    Other(Box<dyn StdError + Send + Sync>),
}

#[cfg(feature = "reqwest-client")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_builder() || e.is_request() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Other(Box::new(e))
        }
    }
}

/// Non-200 response that isn't a rate limit
#[derive(Debug, Error, Diagnostic)]
pub struct HttpError {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body if available
    pub body: Option<Bytes>,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(body) = &self.body {
            if let Ok(s) = std::str::from_utf8(body) {
                if !s.is_empty() {
                    write!(f, ":\n{}", s)?;
                }
            }
        }
        Ok(())
    }
}

/// A bulk lookup that failed partway through.
///
/// Batches are fetched in order and the first failure stops the run;
/// `partial` holds every account from the batches that did succeed.
#[derive(Debug)]
pub struct BulkLookupError<T> {
    /// Accounts fetched before the failing batch
    pub partial: T,
    /// Why the failing batch failed
    pub source: LookupError,
}

impl<T> BulkLookupError<T> {
    /// Convert the partial results, keeping the error.
    pub fn map_partial<U>(self, f: impl FnOnce(T) -> U) -> BulkLookupError<U> {
        BulkLookupError {
            partial: f(self.partial),
            source: self.source,
        }
    }

    /// Split into the partial results and the error.
    pub fn into_parts(self) -> (T, LookupError) {
        (self.partial, self.source)
    }
}

impl<T> fmt::Display for BulkLookupError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bulk lookup stopped early: {}", self.source)
    }
}

impl<T: fmt::Debug> StdError for BulkLookupError<T> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl<T: fmt::Debug> Diagnostic for BulkLookupError<T> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.source.code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.source.help()
    }

    fn diagnostic_source(&self) -> Option<&dyn Diagnostic> {
        Some(&self.source)
    }
}

/// Result type for single lookups
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_reports_429() {
        let err = LookupError::RateLimited {
            retry_after: Some(Duration::from_secs(30)),
        };
        assert!(err.is_rate_limited());
        assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
        assert_eq!(err.to_string(), "rate limited by PronounDB, retry after 30s");

        let bare = LookupError::RateLimited { retry_after: None };
        assert_eq!(bare.to_string(), "rate limited by PronounDB");
    }

    #[test]
    fn http_error_display_includes_body() {
        let err = HttpError {
            status: StatusCode::BAD_REQUEST,
            body: Some(Bytes::from_static(b"invalid platform")),
        };
        assert_eq!(err.to_string(), "HTTP 400 Bad Request:\ninvalid platform");
        let err = LookupError::from(err);
        assert!(!err.is_rate_limited());
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn bulk_error_keeps_partial() {
        let err = BulkLookupError {
            partial: vec!["a".to_owned()],
            source: LookupError::Transport(TransportError::Timeout),
        };
        assert_eq!(err.to_string(), "bulk lookup stopped early: HTTP transport error: Request timeout");
        let err = err.map_partial(|v| v.len());
        let (partial, source) = err.into_parts();
        assert_eq!(partial, 1);
        assert!(source.status().is_none());
    }
}
