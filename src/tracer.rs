//! Error metadata for tracing spans.
//!
//! Every service operation runs inside a span that declares three empty
//! fields: `error`, `status_code` and `status_message`. [`record_error`]
//! fills them in and emits an `error!` event carrying any extra attributes.

use tracing::{error, Span};

use crate::error::DiscogsError;

/// Canonical span status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusCode {
    #[default]
    Unknown,
    InvalidArgument,
    NotFound,
    PermissionDenied,
    Unauthenticated,
    Internal,
    Unavailable,
}

impl StatusCode {
    /// Name recorded in the `status_code` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Unknown => "UNKNOWN",
            StatusCode::InvalidArgument => "INVALID_ARGUMENT",
            StatusCode::NotFound => "NOT_FOUND",
            StatusCode::PermissionDenied => "PERMISSION_DENIED",
            StatusCode::Unauthenticated => "UNAUTHENTICATED",
            StatusCode::Internal => "INTERNAL",
            StatusCode::Unavailable => "UNAVAILABLE",
        }
    }
}

/// What to attach to the current span when an operation fails.
#[derive(Debug, Default)]
pub struct ErrorRecord<'a> {
    /// The failure, if any.
    pub error: Option<&'a DiscogsError>,
    /// Status code; `None` records [`StatusCode::Unknown`].
    pub code: Option<StatusCode>,
    /// Short description, e.g. `failed to fetch release`.
    pub message: &'a str,
    /// Extra key/value pairs such as the requested id.
    pub attributes: Vec<(&'static str, String)>,
}

/// Record `record` on the current span. Does nothing when no span is active.
pub fn record_error(record: &ErrorRecord<'_>) {
    let span = Span::current();
    if span.is_disabled() {
        return;
    }

    let code = record.code.unwrap_or_default();
    if let Some(err) = record.error {
        span.record("error", err.full_message().as_str());
    }
    span.record("status_code", code.as_str());
    span.record("status_message", record.message);

    error!(
        parent: &span,
        status_code = code.as_str(),
        attributes = ?record.attributes,
        "{}",
        record.message
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::info_span;
    use tracing_subscriber::fmt;

    #[test]
    fn test_record_without_span_is_noop() {
        let err = DiscogsError::Unauthorized;
        record_error(&ErrorRecord {
            error: Some(&err),
            code: Some(StatusCode::Internal),
            message: "failed to fetch release",
            attributes: vec![("id", "1".to_string())],
        });
    }

    #[test]
    fn test_record_inside_span() {
        let subscriber = fmt().with_test_writer().finish();
        tracing::subscriber::with_default(subscriber, || {
            let span = info_span!(
                "discogs.test",
                error = tracing::field::Empty,
                status_code = tracing::field::Empty,
                status_message = tracing::field::Empty
            );
            let _guard = span.enter();
            let err = DiscogsError::Upstream {
                status: "500 Internal Server Error".to_string(),
            };
            record_error(&ErrorRecord {
                error: Some(&err),
                message: "failed to fetch artist",
                ..Default::default()
            });
        });
    }

    #[test]
    fn test_default_code_is_unknown() {
        assert_eq!(StatusCode::default().as_str(), "UNKNOWN");
        assert_eq!(ErrorRecord::default().code, None);
    }
}
