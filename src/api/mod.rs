//! API services for Discogs.
//!
//! This module provides one service per group of endpoints:
//! - [`DatabaseService`]: releases, artists, labels and masters (token or anonymous)
//! - [`SearchService`]: database search (token required upstream)
//! - [`UserService`]: OAuth identity
//! - [`CollectionService`]: a user's collection folders (OAuth)

pub mod collection;
pub mod database;
pub mod search;
pub mod user;

pub use collection::{CollectionService, FolderArgs};
pub use database::DatabaseService;
pub use search::SearchService;
pub use user::UserService;

use crate::error::{DiscogsError, ErrorKind};
use crate::tracer::{record_error, ErrorRecord, StatusCode};

/// Record `err` on the current span and wrap it with `message`.
pub(crate) fn failed(
    err: DiscogsError,
    message: &'static str,
    attributes: Vec<(&'static str, String)>,
) -> DiscogsError {
    record_error(&ErrorRecord {
        error: Some(&err),
        code: Some(status_code(&err)),
        message,
        attributes,
    });
    err.context(message)
}

fn status_code(err: &DiscogsError) -> StatusCode {
    match err.root() {
        DiscogsError::Upstream { status } if status.starts_with("404") => StatusCode::NotFound,
        DiscogsError::Upstream { status } if status.starts_with("403") => {
            StatusCode::PermissionDenied
        }
        other => match other.kind() {
            ErrorKind::Unauthorized => StatusCode::Unauthenticated,
            ErrorKind::Configuration => StatusCode::InvalidArgument,
            ErrorKind::Transport => StatusCode::Unavailable,
            ErrorKind::Upstream | ErrorKind::Decode => StatusCode::Internal,
        },
    }
}
