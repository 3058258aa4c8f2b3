//! Label models.

use serde::{Deserialize, Serialize};

use super::common::{Image, Page, ReleaseSource, Sublabel};

/// A label, company, recording studio, location or other entity involved
/// with artists and releases.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Label {
    pub id: u64,
    pub name: String,
    pub profile: String,
    pub contact_info: String,
    /// Parent label, when this one is a sub-label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_label: Option<Sublabel>,
    #[serde(rename = "sublabels")]
    pub sub_labels: Vec<Sublabel>,
    pub urls: Vec<String>,
    pub images: Vec<Image>,
    pub releases_url: String,
    pub resource_url: String,
    pub uri: String,
    pub data_quality: String,
}

/// One page of releases associated with a label.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelReleases {
    pub pagination: Page,
    pub releases: Vec<ReleaseSource>,
}
