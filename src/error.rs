//! Error types for the Discogs API.

use thiserror::Error;

/// Main error type for all Discogs operations.
#[derive(Debug, Error)]
pub enum DiscogsError {
    /// No user agent was supplied. Discogs rejects anonymous clients.
    #[error("user agent is required")]
    UserAgentInvalid,

    /// Currency is not one of the codes accepted by the marketplace.
    #[error("currency not supported: {0}")]
    CurrencyNotSupported(String),

    /// Token contains characters that cannot go in an HTTP header.
    #[error("invalid token")]
    InvalidToken,

    /// Base URL could not be parsed.
    #[error("invalid url")]
    InvalidUrl(#[from] url::ParseError),

    /// Upstream answered 401.
    #[error("unauthorized")]
    Unauthorized,

    /// An OAuth call was made on a service with no signer bound.
    #[error("oauth credentials are not attached")]
    MissingCredentials,

    /// Any other non-200 status, with the raw status text.
    #[error("unknown error: {status}")]
    Upstream {
        /// Status line as reported by the server, e.g. `404 Not Found`.
        status: String,
    },

    /// Response body was not the JSON we expected.
    #[error("invalid JSON response")]
    Decode(#[from] serde_json::Error),

    /// HTTP request failed before a response was read.
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    /// Another error annotated with the operation that produced it.
    ///
    /// Displays only `context`; the cause is reachable through `source()`.
    #[error("{context}")]
    Operation {
        /// Human-readable prefix such as `failed to fetch release`.
        context: &'static str,
        /// Underlying cause.
        #[source]
        source: Box<DiscogsError>,
    },
}

/// Coarse classification of a [`DiscogsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while building the client.
    Configuration,
    /// Upstream 401 or missing OAuth material.
    Unauthorized,
    /// Non-200 status other than 401.
    Upstream,
    /// Malformed response body.
    Decode,
    /// Network or connection failure.
    Transport,
}

impl DiscogsError {
    /// Wrap `self` with an operation prefix.
    pub fn context(self, context: &'static str) -> Self {
        DiscogsError::Operation {
            context,
            source: Box::new(self),
        }
    }

    /// This error and every cause behind it, joined with `": "`.
    ///
    /// `failed to fetch artist: unknown error: 404 Not Found`
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }

    /// The innermost error, skipping any operation wrappers.
    pub fn root(&self) -> &DiscogsError {
        match self {
            DiscogsError::Operation { source, .. } => source.root(),
            other => other,
        }
    }

    /// Classify the error, looking through operation wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            DiscogsError::UserAgentInvalid
            | DiscogsError::CurrencyNotSupported(_)
            | DiscogsError::InvalidToken
            | DiscogsError::InvalidUrl(_) => ErrorKind::Configuration,
            DiscogsError::Unauthorized | DiscogsError::MissingCredentials => {
                ErrorKind::Unauthorized
            }
            DiscogsError::Upstream { .. } => ErrorKind::Upstream,
            DiscogsError::Decode(_) => ErrorKind::Decode,
            DiscogsError::Transport(_) => ErrorKind::Transport,
            DiscogsError::Operation { .. } => unreachable!("root never returns a wrapper"),
        }
    }
}

/// Result type alias for Discogs operations.
pub type Result<T> = std::result::Result<T, DiscogsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_context_keeps_cause() {
        let err = DiscogsError::Unauthorized.context("failed to fetch release");
        assert_eq!(err.to_string(), "failed to fetch release");
        assert_eq!(err.full_message(), "failed to fetch release: unauthorized");
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(matches!(err.root(), DiscogsError::Unauthorized));
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("unauthorized"));
    }

    #[test]
    fn test_kind_through_nested_wrappers() {
        let err = DiscogsError::Upstream {
            status: "503 Service Unavailable".to_string(),
        }
        .context("inner")
        .context("outer");
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert_eq!(
            err.full_message(),
            "outer: inner: unknown error: 503 Service Unavailable"
        );
    }

    #[test]
    fn test_cause_not_repeated_in_chain() {
        let decode = serde_json::from_str::<u32>("not json").unwrap_err();
        let detail = decode.to_string();
        let err = DiscogsError::from(decode).context("failed to fetch master");

        let message = err.full_message();
        assert!(message.starts_with("failed to fetch master: invalid JSON response: "));
        assert_eq!(message.matches(&detail).count(), 1);

        let mut displayed = Vec::new();
        let mut current: Option<&dyn std::error::Error> = Some(&err);
        while let Some(e) = current {
            displayed.push(e.to_string());
            current = e.source();
        }
        assert_eq!(displayed, vec!["failed to fetch master".to_string(), "invalid JSON response".to_string(), detail]);
    }

    #[test]
    fn test_configuration_kinds() {
        assert_eq!(
            DiscogsError::UserAgentInvalid.kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            DiscogsError::CurrencyNotSupported("XYZ".into()).kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_missing_credentials_is_unauthorized() {
        assert_eq!(
            DiscogsError::MissingCredentials.kind(),
            ErrorKind::Unauthorized
        );
    }
}
