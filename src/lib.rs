//! # Discogs
//!
//! A Rust client for the Discogs API: releases, artists, labels, masters,
//! database search, OAuth identity and user collections.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`Discogs`] struct:
//!
//! ```rust,no_run
//! use discogs::{Discogs, Options, Pagination};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A user agent is mandatory; the token is optional
//!     let client = Discogs::new(&Options::new("MyDiscogsClient/1.0").with_token("token"))?;
//!
//!     // Look up a release
//!     let release = client.database().release(249504).await?;
//!     println!("{} ({})", release.title, release.year);
//!
//!     // Page through an artist's releases
//!     let page = client
//!         .database()
//!         .artist_releases(108713, Some(&Pagination::new(2, 50)))
//!         .await?;
//!     println!("page {} of {}", page.pagination.page, page.pagination.pages);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! - **Static**: the user agent and optional `Discogs token=` header set in
//!   [`Options`], used by the database and search services
//! - **OAuth 1.0a**: an [`OAuthSigner`] bound with [`Discogs::with_oauth`],
//!   used by the user and collection services
//!
//! ## Errors
//!
//! Every failure is a [`DiscogsError`] prefixed with the operation that
//! failed; [`DiscogsError::kind`] classifies it. Nothing is retried.
//!
//! ## Tracing
//!
//! Each operation runs in a `tracing` span named after it, e.g.
//! `discogs.DatabaseService.release`. Failures record `error`,
//! `status_code` and `status_message` on that span.

pub mod api;
pub mod auth;
mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod tracer;
mod transport;

// Main interface (recommended)
pub use client::Discogs;
pub use config::{Currency, Options};

pub use api::{CollectionService, DatabaseService, FolderArgs, SearchService, UserService};
pub use auth::{Credentials, OAuthClient, OAuthSigner, SignatureMethod};
pub use error::{DiscogsError, ErrorKind, Result};
pub use models::{
    Artist, ArtistReleases, CollectionFolders, Folder, FolderReleases, Identity, Label,
    LabelReleases, Master, MasterVersions, Release, ReleaseRating, SearchRequest, SearchResults,
    SearchType,
};
pub use pagination::{Pagination, SortOrder};
