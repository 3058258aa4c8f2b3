//! Data models for Discogs API responses.
//!
//! Every record mirrors the JSON the API returns. Missing fields decode to
//! their empty/zero value and unknown fields are ignored.

pub mod artist;
pub mod collection;
pub mod common;
pub mod label;
pub mod master;
pub mod release;
pub mod search;
pub mod user;

// Re-exports for convenience
pub use artist::{Artist, ArtistReleases};
pub use collection::{
    BasicInformation, CollectionFolders, CollectionRelease, Folder, FolderReleases, Note,
};
pub use common::{
    Alias, ArtistSource, Community, Company, Contributor, Format, Identifier, Image, LabelSource,
    Member, Page, PageUrls, Rating, ReleaseSource, Series, Sublabel, Track, Version, Video,
};
pub use label::{Label, LabelReleases};
pub use master::{Master, MasterVersions};
pub use release::{Release, ReleaseRating};
pub use search::{SearchCommunity, SearchRequest, SearchResult, SearchResults, SearchType};
pub use user::Identity;
