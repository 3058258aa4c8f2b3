//! User collection models.

use serde::{Deserialize, Serialize};

use super::common::{credit_line, ArtistSource, Format, LabelSource, Page};

/// Folders in a user's collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CollectionFolders {
    pub folders: Vec<Folder>,
}

impl CollectionFolders {
    /// Find a folder by name.
    pub fn by_name(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }
}

/// A collection folder. Folder `0` is "All", folder `1` is "Uncategorized".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Folder {
    pub id: u64,
    /// Number of releases in the folder.
    pub count: u32,
    pub name: String,
    pub resource_url: String,
}

/// One page of releases in a collection folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FolderReleases {
    pub pagination: Page,
    pub releases: Vec<CollectionRelease>,
}

/// A release instance in a user's collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CollectionRelease {
    /// Release ID.
    pub id: u64,
    /// Collection item ID; the same release can be owned more than once.
    pub instance_id: u64,
    pub folder_id: u64,
    /// The user's own rating, 0 to 5.
    pub rating: u8,
    pub date_added: String,
    pub basic_information: BasicInformation,
    pub notes: Vec<Note>,
}

/// Release summary embedded in collection items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BasicInformation {
    pub id: u64,
    pub master_id: u64,
    pub master_url: Option<String>,
    pub title: String,
    pub year: u32,
    pub thumb: String,
    pub cover_image: String,
    pub resource_url: String,
    pub formats: Vec<Format>,
    pub labels: Vec<LabelSource>,
    pub artists: Vec<ArtistSource>,
    pub genres: Vec<String>,
    pub styles: Vec<String>,
}

impl BasicInformation {
    pub fn artists_string(&self) -> String {
        credit_line(&self.artists)
    }
}

/// Custom field value on a collection item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Note {
    pub field_id: u64,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folders_fixture() {
        let folders: CollectionFolders = serde_json::from_str(
            r#"{"folders": [
                {"id": 0, "count": 23, "name": "All", "resource_url": "https://api.discogs.com/users/example/collection/folders/0"},
                {"id": 1, "count": 20, "name": "Uncategorized", "resource_url": "https://api.discogs.com/users/example/collection/folders/1"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(folders.folders.len(), 2);
        assert_eq!(folders.by_name("All").unwrap().count, 23);
        assert!(folders.by_name("Wishlist").is_none());
    }

    #[test]
    fn test_folder_releases_fixture() {
        let releases: FolderReleases = serde_json::from_str(
            r#"{
                "pagination": {"per_page": 1, "pages": 14, "page": 1, "items": 14, "urls": {}},
                "releases": [{
                    "id": 2464521, "instance_id": 1, "folder_id": 1, "rating": 0,
                    "date_added": "2014-07-28T15:36:14-07:00",
                    "notes": [{"field_id": 3, "value": "Bought at a flea market"}],
                    "basic_information": {
                        "id": 2464521, "title": "Information Chase", "year": 2006,
                        "master_id": 0, "master_url": null,
                        "resource_url": "https://api.discogs.com/releases/2464521",
                        "thumb": "", "cover_image": "",
                        "formats": [{"qty": "1", "descriptions": ["Mini", "EP"], "name": "CDr"}],
                        "labels": [{"resource_url": "https://api.discogs.com/labels/11647", "entity_type": "", "catno": "8BP059", "id": 11647, "name": "8bitpeoples"}],
                        "artists": [{"join": "", "name": "Bit Shifter", "anv": "", "tracks": "", "role": "", "resource_url": "https://api.discogs.com/artists/103906", "id": 103906}]
                    }
                }]
            }"#,
        )
        .unwrap();

        let item = &releases.releases[0];
        assert_eq!(item.instance_id, 1);
        assert_eq!(item.notes[0].value, "Bought at a flea market");
        assert_eq!(item.basic_information.title, "Information Chase");
        assert!(item.basic_information.master_url.is_none());
        assert_eq!(item.basic_information.artists_string(), "Bit Shifter");
        assert_eq!(item.basic_information.labels[0].catno, "8BP059");
    }
}
