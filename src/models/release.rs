//! Release models.
//!
//! A release is one particular physical or digital object: a pressing,
//! a CD edition, a digital download.

use serde::{Deserialize, Serialize};

use super::common::{
    credit_line, primary_image, ArtistSource, Community, Company, Format, Identifier, Image,
    LabelSource, Rating, Series, Track, Video,
};

/// A full release record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Release {
    pub id: u64,
    pub title: String,
    pub artists: Vec<ArtistSource>,
    pub artists_sort: String,
    pub data_quality: String,
    pub thumb: String,
    pub community: Community,
    pub companies: Vec<Company>,
    pub country: String,
    pub date_added: String,
    pub date_changed: String,
    /// Estimated shipping weight in grams.
    pub estimated_weight: u32,
    #[serde(rename = "extraartists")]
    pub extra_artists: Vec<ArtistSource>,
    pub format_quantity: u32,
    pub formats: Vec<Format>,
    pub genres: Vec<String>,
    pub identifiers: Vec<Identifier>,
    pub images: Vec<Image>,
    pub labels: Vec<LabelSource>,
    /// Lowest marketplace price in the client currency; `null` when nothing is for sale.
    pub lowest_price: Option<f64>,
    pub master_id: u64,
    pub master_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
    pub num_for_sale: u32,
    /// Release date as entered, e.g. `1987-07-00`.
    pub released: String,
    pub released_formatted: String,
    pub resource_url: String,
    pub series: Vec<Series>,
    pub status: String,
    pub styles: Vec<String>,
    pub tracklist: Vec<Track>,
    pub uri: String,
    pub videos: Vec<Video>,
    pub year: u32,
}

impl Release {
    /// Artist credit line, e.g. `Daft Punk & Pharrell`.
    pub fn artists_string(&self) -> String {
        credit_line(&self.artists)
    }

    /// Primary image, or the first image when none is marked primary.
    pub fn primary_image(&self) -> Option<&Image> {
        primary_image(&self.images)
    }

    /// Whether the release belongs to a master.
    pub fn has_master(&self) -> bool {
        self.master_id != 0
    }
}

/// Community rating of a release.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReleaseRating {
    #[serde(rename = "release_id")]
    pub id: u64,
    pub rating: Rating,
}
