//! Database service: read-only lookups of releases, artists, labels and
//! masters.

use std::sync::Arc;

use tracing::field::Empty;
use tracing::{instrument, Span};

use super::failed;
use crate::config::Currency;
use crate::error::Result;
use crate::models::{
    Artist, ArtistReleases, Label, LabelReleases, Master, MasterVersions, Release, ReleaseRating,
};
use crate::pagination::{self, Pagination};
use crate::transport::{Auth, Transport};

const RELEASES_URI: &str = "/releases/";
const ARTISTS_URI: &str = "/artists/";
const LABELS_URI: &str = "/labels/";
const MASTERS_URI: &str = "/masters/";

pub(crate) fn release_path(release_id: u64) -> String {
    format!("{}{}", RELEASES_URI, release_id)
}

pub(crate) fn release_rating_path(release_id: u64) -> String {
    format!("{}{}/rating", RELEASES_URI, release_id)
}

pub(crate) fn artist_path(artist_id: u64) -> String {
    format!("{}{}", ARTISTS_URI, artist_id)
}

pub(crate) fn artist_releases_path(artist_id: u64) -> String {
    format!("{}{}/releases", ARTISTS_URI, artist_id)
}

pub(crate) fn label_path(label_id: u64) -> String {
    format!("{}{}", LABELS_URI, label_id)
}

pub(crate) fn label_releases_path(label_id: u64) -> String {
    format!("{}{}/releases", LABELS_URI, label_id)
}

pub(crate) fn master_path(master_id: u64) -> String {
    format!("{}{}", MASTERS_URI, master_id)
}

pub(crate) fn master_versions_path(master_id: u64) -> String {
    format!("{}{}/versions", MASTERS_URI, master_id)
}

/// Read-only access to the Discogs database.
///
/// Every method issues exactly one request with the client's static
/// headers. Failures are returned as-is, never retried.
///
/// # Example
///
/// ```rust,no_run
/// use discogs::{Discogs, Options};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Discogs::new(&Options::new("MyDiscogsClient/1.0"))?;
///     let release = client.database().release(249504).await?;
///     println!("{} by {}", release.title, release.artists_string());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseService {
    transport: Arc<Transport>,
    currency: Currency,
}

impl DatabaseService {
    pub(crate) fn new(transport: Arc<Transport>, currency: Currency) -> Self {
        Self {
            transport,
            currency,
        }
    }

    /// Currency used for marketplace prices.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Get a release by ID. Prices are in the client currency.
    #[instrument(
        name = "discogs.DatabaseService.release",
        skip(self),
        fields(currency = %self.currency, path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn release(&self, release_id: u64) -> Result<Release> {
        let path = release_path(release_id);
        Span::current().record("path", path.as_str());

        let params = [("curr_abbr", self.currency.code().to_string())];
        self.transport
            .get(&path, &params, Auth::Static)
            .await
            .map_err(|err| {
                failed(
                    err,
                    "failed to fetch release",
                    vec![("id", release_id.to_string())],
                )
            })
    }

    /// Get the community rating of a release.
    #[instrument(
        name = "discogs.DatabaseService.release_rating",
        skip(self),
        fields(path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn release_rating(&self, release_id: u64) -> Result<ReleaseRating> {
        let path = release_rating_path(release_id);
        Span::current().record("path", path.as_str());

        self.transport
            .get(&path, &[], Auth::Static)
            .await
            .map_err(|err| {
                failed(
                    err,
                    "failed to fetch release rating",
                    vec![("id", release_id.to_string())],
                )
            })
    }

    /// Get an artist by ID.
    #[instrument(
        name = "discogs.DatabaseService.artist",
        skip(self),
        fields(path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn artist(&self, artist_id: u64) -> Result<Artist> {
        let path = artist_path(artist_id);
        Span::current().record("path", path.as_str());

        self.transport
            .get(&path, &[], Auth::Static)
            .await
            .map_err(|err| {
                failed(
                    err,
                    "failed to fetch artist",
                    vec![("id", artist_id.to_string())],
                )
            })
    }

    /// Get one page of releases and masters associated with an artist.
    #[instrument(
        name = "discogs.DatabaseService.artist_releases",
        skip(self, pagination),
        fields(path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn artist_releases(
        &self,
        artist_id: u64,
        pagination: Option<&Pagination>,
    ) -> Result<ArtistReleases> {
        let path = artist_releases_path(artist_id);
        Span::current().record("path", path.as_str());

        self.transport
            .get(&path, &pagination::params(pagination), Auth::Static)
            .await
            .map_err(|err| {
                failed(
                    err,
                    "failed to fetch artist releases",
                    vec![("id", artist_id.to_string())],
                )
            })
    }

    /// Get a label by ID.
    #[instrument(
        name = "discogs.DatabaseService.label",
        skip(self),
        fields(path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn label(&self, label_id: u64) -> Result<Label> {
        let path = label_path(label_id);
        Span::current().record("path", path.as_str());

        self.transport
            .get(&path, &[], Auth::Static)
            .await
            .map_err(|err| {
                failed(
                    err,
                    "failed to fetch label",
                    vec![("id", label_id.to_string())],
                )
            })
    }

    /// Get one page of releases associated with a label.
    #[instrument(
        name = "discogs.DatabaseService.label_releases",
        skip(self, pagination),
        fields(path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn label_releases(
        &self,
        label_id: u64,
        pagination: Option<&Pagination>,
    ) -> Result<LabelReleases> {
        let path = label_releases_path(label_id);
        Span::current().record("path", path.as_str());

        self.transport
            .get(&path, &pagination::params(pagination), Auth::Static)
            .await
            .map_err(|err| {
                failed(
                    err,
                    "failed to fetch label releases",
                    vec![("id", label_id.to_string())],
                )
            })
    }

    /// Get a master release by ID.
    #[instrument(
        name = "discogs.DatabaseService.master",
        skip(self),
        fields(path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn master(&self, master_id: u64) -> Result<Master> {
        let path = master_path(master_id);
        Span::current().record("path", path.as_str());

        self.transport
            .get(&path, &[], Auth::Static)
            .await
            .map_err(|err| {
                failed(
                    err,
                    "failed to fetch master",
                    vec![("id", master_id.to_string())],
                )
            })
    }

    /// Get one page of releases that are versions of a master.
    #[instrument(
        name = "discogs.DatabaseService.master_versions",
        skip(self, pagination),
        fields(path = Empty, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn master_versions(
        &self,
        master_id: u64,
        pagination: Option<&Pagination>,
    ) -> Result<MasterVersions> {
        let path = master_versions_path(master_id);
        Span::current().record("path", path.as_str());

        self.transport
            .get(&path, &pagination::params(pagination), Auth::Static)
            .await
            .map_err(|err| {
                failed(
                    err,
                    "failed to fetch master versions",
                    vec![("id", master_id.to_string())],
                )
            })
    }
}
