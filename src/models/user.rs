//! Authenticated user models.

use serde::{Deserialize, Serialize};

/// Identity of the user an OAuth token belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Identity {
    pub id: u64,
    pub username: String,
    pub resource_url: String,
    /// Name of the application the token was issued to.
    pub consumer_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fixture() {
        let identity: Identity = serde_json::from_str(
            r#"{"id": 1, "username": "example", "resource_url": "https://api.discogs.com/users/example", "consumer_name": "Your Application Name"}"#,
        )
        .unwrap();
        assert_eq!(identity.id, 1);
        assert_eq!(identity.username, "example");
        assert_eq!(identity.consumer_name, "Your Application Name");
    }
}
