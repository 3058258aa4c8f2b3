//! Collection service: a user's collection folders and their contents.
//!
//! All endpoints here are signed with OAuth. The signer is bound when the
//! service is built and never changes afterwards, so one service value can
//! be shared across tasks.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::field::Empty;
use tracing::{instrument, Span};

use super::failed;
use crate::auth::{percent_encode, OAuthSigner};
use crate::error::{DiscogsError, Result};
use crate::models::{CollectionFolders, Folder, FolderReleases};
use crate::pagination::{self, Pagination};
use crate::transport::{Auth, Transport};

const FOLDERS_URI: &str = "/users/{username}/collection/folders";
const FOLDER_URI: &str = "/users/{username}/collection/folders/{id}";
const FOLDER_RELEASES_URI: &str = "/users/{username}/collection/folders/{id}/releases";

/// Fill `{username}` and `{id}` in a path template.
pub(crate) fn expand(template: &str, username: &str, id: Option<u64>) -> String {
    let path = template.replacen("{username}", &percent_encode(username), 1);
    match id {
        Some(id) => path.replacen("{id}", &id.to_string(), 1),
        None => path,
    }
}

/// Identifies one folder of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderArgs {
    /// Owner of the collection.
    pub username: String,
    /// Folder id; `0` is the "All" folder.
    pub id: u64,
}

impl FolderArgs {
    /// Point at folder `id` of `username`.
    pub fn new<S: Into<String>>(username: S, id: u64) -> Self {
        Self {
            username: username.into(),
            id,
        }
    }

    /// Key/value pairs recorded on failure.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("username", self.username.clone()),
            ("id", self.id.to_string()),
        ]
    }
}

/// Access to a user's collection.
///
/// # Example
///
/// ```rust,no_run
/// use discogs::{Credentials, Discogs, OAuthClient, OAuthSigner, Options};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let signer = OAuthSigner::new(
///         OAuthClient::new("consumer_key", "consumer_secret"),
///         Credentials::new("access_token", "access_secret"),
///     );
///     let client = Discogs::new(&Options::new("MyDiscogsClient/1.0"))?.with_oauth(signer);
///     let folders = client.collection().folders("alice").await?;
///     for folder in folders.folders {
///         println!("{} ({})", folder.name, folder.count);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CollectionService {
    transport: Arc<Transport>,
    signer: Option<OAuthSigner>,
}

impl CollectionService {
    pub(crate) fn new(transport: Arc<Transport>, signer: Option<OAuthSigner>) -> Self {
        Self { transport, signer }
    }

    /// A copy of this service that signs with `signer`.
    pub fn with_signer(&self, signer: OAuthSigner) -> Self {
        Self::new(Arc::clone(&self.transport), Some(signer))
    }

    /// Whether OAuth credentials are bound.
    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    async fn signed_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let signer = self
            .signer
            .as_ref()
            .ok_or(DiscogsError::MissingCredentials)?;
        self.transport.get(path, query, Auth::OAuth(signer)).await
    }

    /// List the folders of `username`'s collection.
    #[instrument(
        name = "discogs.CollectionService.folders",
        skip(self),
        fields(path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn folders(&self, username: &str) -> Result<CollectionFolders> {
        let path = expand(FOLDERS_URI, username, None);
        Span::current().record("path", path.as_str());

        self.signed_get(&path, &[]).await.map_err(|err| {
            failed(
                err,
                "failed to fetch folders",
                vec![("username", username.to_string())],
            )
        })
    }

    /// Metadata of one folder.
    #[instrument(
        name = "discogs.CollectionService.folder",
        skip(self),
        fields(path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn folder(&self, args: &FolderArgs) -> Result<Folder> {
        let path = expand(FOLDER_URI, &args.username, Some(args.id));
        Span::current().record("path", path.as_str());

        self.signed_get(&path, &[])
            .await
            .map_err(|err| failed(err, "failed to fetch folder", args.attributes()))
    }

    /// One page of releases in a folder.
    #[instrument(
        name = "discogs.CollectionService.folder_releases",
        skip(self, pagination),
        fields(path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn folder_releases(
        &self,
        args: &FolderArgs,
        pagination: Option<&Pagination>,
    ) -> Result<FolderReleases> {
        let path = expand(FOLDER_RELEASES_URI, &args.username, Some(args.id));
        Span::current().record("path", path.as_str());

        self.signed_get(&path, &pagination::params(pagination))
            .await
            .map_err(|err| failed(err, "failed to fetch folder releases", args.attributes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_templates() {
        assert_eq!(
            expand(FOLDERS_URI, "alice", None),
            "/users/alice/collection/folders"
        );
        assert_eq!(
            expand(FOLDER_URI, "alice", Some(3)),
            "/users/alice/collection/folders/3"
        );
        assert_eq!(
            expand(FOLDER_RELEASES_URI, "alice", Some(0)),
            "/users/alice/collection/folders/0/releases"
        );
    }

    #[test]
    fn test_expand_encodes_username() {
        assert_eq!(
            expand(FOLDERS_URI, "dj shadow/x", None),
            "/users/dj%20shadow%2Fx/collection/folders"
        );
    }

    #[test]
    fn test_expand_does_not_touch_braces_in_username() {
        assert_eq!(
            expand(FOLDER_URI, "{id}", Some(7)),
            "/users/%7Bid%7D/collection/folders/7"
        );
    }

    #[test]
    fn test_folder_args_attributes() {
        let args = FolderArgs::new("alice", 2);
        assert_eq!(
            args.attributes(),
            vec![("username", "alice".to_string()), ("id", "2".to_string())]
        );
    }
}
