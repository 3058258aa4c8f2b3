//! Master release models.
//!
//! A master groups similar releases. Its main release is usually the
//! chronologically earliest one.

use serde::{Deserialize, Serialize};

use super::common::{credit_line, primary_image, ArtistSource, Image, Page, Track, Version, Video};

/// A master release.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Master {
    pub id: u64,
    pub title: String,
    pub year: u32,
    pub styles: Vec<String>,
    pub genres: Vec<String>,
    pub tracklist: Vec<Track>,
    pub notes: String,
    pub artists: Vec<ArtistSource>,
    pub images: Vec<Image>,
    pub videos: Vec<Video>,
    pub num_for_sale: u32,
    pub lowest_price: Option<f64>,
    pub uri: String,
    pub main_release: u64,
    pub main_release_url: String,
    pub most_recent_release: u64,
    pub most_recent_release_url: String,
    pub versions_url: String,
    pub resource_url: String,
    pub data_quality: String,
}

impl Master {
    /// Artist credit line.
    pub fn artists_string(&self) -> String {
        credit_line(&self.artists)
    }

    pub fn primary_image(&self) -> Option<&Image> {
        primary_image(&self.images)
    }
}

/// One page of releases that are versions of a master.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MasterVersions {
    pub pagination: Page,
    pub versions: Vec<Version>,
}
