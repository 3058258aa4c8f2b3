//! Artist-related models.
//!
//! This module contains models for representing artists and their
//! discography.

use serde::{Deserialize, Serialize};

use super::common::{primary_image, Alias, Image, Member, Page, ReleaseSource};

/// A person or group in the Discogs database who contributed to a release
/// in some capacity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Artist {
    /// Discogs artist ID.
    pub id: u64,

    /// Artist name.
    pub name: String,

    /// Legal name, if known.
    #[serde(rename = "realname")]
    pub real_name: String,

    /// Members when the artist is a group.
    pub members: Vec<Member>,

    /// Other names the artist has released under.
    pub aliases: Vec<Alias>,

    /// Spelling variations of the name.
    #[serde(rename = "namevariations")]
    pub name_variations: Vec<String>,

    /// Artist images in various sizes.
    pub images: Vec<Image>,

    /// Biography text with Discogs markup.
    pub profile: String,

    pub releases_url: String,
    pub resource_url: String,
    pub uri: String,

    /// External links (homepage, social media).
    pub urls: Vec<String>,

    pub data_quality: String,
}

impl Artist {
    /// Whether the artist is a group with listed members.
    pub fn is_group(&self) -> bool {
        !self.members.is_empty()
    }

    /// Members that are still active.
    pub fn active_members(&self) -> Vec<&Member> {
        self.members.iter().filter(|m| m.active).collect()
    }

    /// Primary image, or the first image when none is marked primary.
    pub fn primary_image(&self) -> Option<&Image> {
        primary_image(&self.images)
    }
}

/// One page of releases and masters associated with an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArtistReleases {
    pub pagination: Page,
    pub releases: Vec<ReleaseSource>,
}

impl ArtistReleases {
    /// Entries where the artist has the `Main` role.
    pub fn main_releases(&self) -> Vec<&ReleaseSource> {
        self.releases.iter().filter(|r| r.role == "Main").collect()
    }
}
