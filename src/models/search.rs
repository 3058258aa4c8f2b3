//! Database search models.

use serde::{Deserialize, Serialize};

use super::common::Page;

/// Kinds of entity a search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Release,
    Master,
    Artist,
    Label,
}

impl SearchType {
    /// Value of the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Release => "release",
            SearchType::Master => "master",
            SearchType::Artist => "artist",
            SearchType::Label => "label",
        }
    }
}

/// Search parameters. Unset fields are not sent.
///
/// # Example
///
/// ```rust
/// use discogs::{SearchRequest, SearchType};
///
/// let request = SearchRequest::query("Nevermind")
///     .kind(SearchType::Release)
///     .artist("Nirvana");
/// assert_eq!(request.params().len(), 3);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchRequest {
    /// Free-text query.
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<SearchType>,
    pub title: Option<String>,
    pub release_title: Option<String>,
    pub credit: Option<String>,
    pub artist: Option<String>,
    /// Artist name variation.
    pub anv: Option<String>,
    pub label: Option<String>,
    pub genre: Option<String>,
    pub style: Option<String>,
    pub country: Option<String>,
    pub year: Option<String>,
    pub format: Option<String>,
    pub catno: Option<String>,
    pub barcode: Option<String>,
    pub track: Option<String>,
    pub submitter: Option<String>,
    pub contributor: Option<String>,
}

impl SearchRequest {
    /// Free-text search.
    pub fn query<S: Into<String>>(q: S) -> Self {
        Self {
            q: Some(q.into()),
            ..Default::default()
        }
    }

    /// Restrict to one entity type.
    pub fn kind(mut self, kind: SearchType) -> Self {
        self.type_ = Some(kind);
        self
    }

    pub fn artist<S: Into<String>>(mut self, artist: S) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn release_title<S: Into<String>>(mut self, title: S) -> Self {
        self.release_title = Some(title.into());
        self
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn year<S: Into<String>>(mut self, year: S) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn barcode<S: Into<String>>(mut self, barcode: S) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Query parameters in a stable order; empty values are skipped.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_param(&mut params, "q", &self.q);
        if let Some(kind) = self.type_ {
            params.push(("type", kind.as_str().to_string()));
        }

        for (key, value) in [
            ("title", &self.title),
            ("release_title", &self.release_title),
            ("credit", &self.credit),
            ("artist", &self.artist),
            ("anv", &self.anv),
            ("label", &self.label),
            ("genre", &self.genre),
            ("style", &self.style),
            ("country", &self.country),
            ("year", &self.year),
            ("format", &self.format),
            ("catno", &self.catno),
            ("barcode", &self.barcode),
            ("track", &self.track),
            ("submitter", &self.submitter),
            ("contributor", &self.contributor),
        ] {
            push_param(&mut params, key, value);
        }
        params
    }
}

fn push_param(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchResults {
    pub pagination: Page,
    pub results: Vec<SearchResult>,
}

/// A single search hit. Which fields are filled depends on its type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchResult {
    pub id: u64,
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub thumb: String,
    pub cover_image: String,
    pub resource_url: String,
    pub uri: String,
    pub master_id: Option<u64>,
    pub master_url: Option<String>,
    pub country: String,
    /// Year as a string; Discogs does not send a number here.
    pub year: String,
    pub format: Vec<String>,
    pub label: Vec<String>,
    pub genre: Vec<String>,
    pub style: Vec<String>,
    pub barcode: Vec<String>,
    pub catno: String,
    pub community: SearchCommunity,
}

/// Have/want counters attached to search hits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchCommunity {
    pub have: u32,
    pub want: u32,
}
