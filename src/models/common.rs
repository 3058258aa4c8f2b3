//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Pagination block returned by list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Page {
    /// Current page (1-based).
    pub page: u32,

    /// Total number of pages.
    pub pages: u32,

    /// Items per page.
    pub per_page: u32,

    /// Total number of items across all pages.
    pub items: u32,

    /// Links to neighbouring pages.
    pub urls: PageUrls,
}

impl Page {
    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.urls.next.is_some() || self.page < self.pages
    }
}

/// Links to other pages of the same listing. Only present when meaningful.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// Image with URLs and dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Image {
    /// `primary` or `secondary`.
    #[serde(rename = "type")]
    pub type_: String,

    /// Full-size image URL.
    pub uri: String,

    /// 150px thumbnail URL.
    pub uri150: String,

    pub resource_url: String,

    /// Height in pixels.
    pub height: u32,

    /// Width in pixels.
    pub width: u32,
}

impl Image {
    /// Whether this is the primary image of its entity.
    pub fn is_primary(&self) -> bool {
        self.type_ == "primary"
    }
}

/// Pick the primary image, falling back to the first one.
pub(crate) fn primary_image(images: &[Image]) -> Option<&Image> {
    images
        .iter()
        .find(|image| image.is_primary())
        .or_else(|| images.first())
}

/// Video attached to a release or master.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Video {
    pub title: String,
    pub description: String,
    /// Duration in seconds.
    pub duration: u32,
    pub embed: bool,
    pub uri: String,
}

/// One entry of a tracklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Track {
    /// Position on the medium, e.g. `A1`.
    pub position: String,

    /// `track`, `heading` or `index`.
    #[serde(rename = "type_")]
    pub type_: String,

    pub title: String,

    /// Duration as printed, e.g. `4:05`.
    pub duration: String,

    pub artists: Vec<ArtistSource>,

    #[serde(rename = "extraartists")]
    pub extra_artists: Vec<ArtistSource>,
}

/// Physical or digital format of a release.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Format {
    /// Format name, e.g. `Vinyl` or `CD`.
    pub name: String,

    /// Quantity, sent as a string by Discogs.
    pub qty: String,

    /// Free-text format details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Descriptions such as `LP`, `Album`.
    pub descriptions: Vec<String>,
}

/// Barcode, matrix number and similar identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Identifier {
    #[serde(rename = "type")]
    pub type_: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Company credited on a release (pressing plant, distributor...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Company {
    pub id: u64,
    pub name: String,
    pub catno: String,
    pub entity_type: String,
    pub entity_type_name: String,
    pub resource_url: String,
}

/// Reference to an artist from a release, master or track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArtistSource {
    pub id: u64,

    pub name: String,

    /// Artist name variation as credited.
    pub anv: String,

    /// Join phrase to the next artist, e.g. `&` or `feat.`.
    pub join: String,

    /// Credit role for extra artists.
    pub role: String,

    /// Tracks the credit applies to.
    pub tracks: String,

    pub resource_url: String,
}

impl ArtistSource {
    /// Name as credited: the variation if present, otherwise the name.
    pub fn credited_name(&self) -> &str {
        if self.anv.is_empty() {
            &self.name
        } else {
            &self.anv
        }
    }
}

/// Join artist credits the way Discogs prints them.
pub(crate) fn credit_line(artists: &[ArtistSource]) -> String {
    let mut line = String::new();
    for (i, artist) in artists.iter().enumerate() {
        line.push_str(artist.credited_name());
        if i + 1 < artists.len() {
            match artist.join.trim() {
                "" | "," => line.push_str(", "),
                join => {
                    line.push(' ');
                    line.push_str(join);
                    line.push(' ');
                }
            }
        }
    }
    line
}

/// Reference to a label from a release.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelSource {
    pub id: u64,
    pub name: String,
    /// Catalog number on this label.
    pub catno: String,
    pub entity_type: String,
    pub entity_type_name: String,
    pub resource_url: String,
}

/// Series a release belongs to. Same shape as a label reference.
pub type Series = LabelSource;

/// Community statistics for a release.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Community {
    pub contributors: Vec<Contributor>,
    pub data_quality: String,
    /// Users that have this release.
    pub have: u32,
    /// Users that want this release.
    pub want: u32,
    pub rating: Rating,
    pub status: String,
    pub submitter: Contributor,
}

/// Discogs user credited with a submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Contributor {
    pub username: String,
    pub resource_url: String,
}

/// Community rating.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Rating {
    /// Average score out of 5.
    pub average: f64,
    /// Number of votes.
    pub count: u32,
}

/// Member of a group artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub active: bool,
    pub resource_url: String,
}

/// Alternative name for an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Alias {
    pub id: u64,
    pub name: String,
    pub resource_url: String,
}

/// Sub-label of a label.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Sublabel {
    pub id: u64,
    pub name: String,
    pub resource_url: String,
}

/// Release or master listed under an artist or a label.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReleaseSource {
    pub id: u64,

    /// `release` or `master`.
    #[serde(rename = "type")]
    pub type_: String,

    pub title: String,
    pub artist: String,
    pub year: u32,
    pub status: String,
    pub format: String,

    /// Label name (artist listings only).
    pub label: String,

    /// Artist's role, e.g. `Main` or `Remix`.
    pub role: String,

    /// Catalog number (label listings only).
    pub catno: String,

    /// Main release of a master entry.
    pub main_release: u64,

    pub thumb: String,
    pub resource_url: String,
}

impl ReleaseSource {
    /// Whether this entry points at a master release.
    pub fn is_master(&self) -> bool {
        self.type_ == "master"
    }
}

/// One version (release) of a master.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Version {
    pub id: u64,
    pub title: String,
    pub label: String,
    pub country: String,
    /// Release date as printed, often just the year.
    pub released: String,
    pub format: String,
    pub major_formats: Vec<String>,
    pub catno: String,
    pub status: String,
    pub thumb: String,
    pub resource_url: String,
}
