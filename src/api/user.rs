//! User identity service.

use std::sync::Arc;

use tracing::field::Empty;
use tracing::instrument;

use super::failed;
use crate::auth::OAuthSigner;
use crate::error::{DiscogsError, Result};
use crate::models::Identity;
use crate::transport::{Auth, Transport};

pub(crate) const IDENTITY_URI: &str = "/oauth/identity";

/// Resolves the user behind an OAuth token.
#[derive(Debug, Clone)]
pub struct UserService {
    transport: Arc<Transport>,
    signer: Option<OAuthSigner>,
}

impl UserService {
    pub(crate) fn new(transport: Arc<Transport>, signer: Option<OAuthSigner>) -> Self {
        Self { transport, signer }
    }

    /// A copy of this service that signs with `signer`.
    pub fn with_signer(&self, signer: OAuthSigner) -> Self {
        Self::new(Arc::clone(&self.transport), Some(signer))
    }

    /// Whether OAuth credentials are bound.
    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    /// Identity of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` without sending anything when no signer
    /// is bound.
    #[instrument(
        name = "discogs.UserService.identity",
        skip(self),
        fields(path = IDENTITY_URI, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn identity(&self) -> Result<Identity> {
        let result: Result<Identity> = match self.signer.as_ref() {
            Some(signer) => {
                self.transport
                    .get(IDENTITY_URI, &[], Auth::OAuth(signer))
                    .await
            }
            None => Err(DiscogsError::MissingCredentials),
        };
        result.map_err(|err| failed(err, "failed to fetch identity", Vec::new()))
    }
}
