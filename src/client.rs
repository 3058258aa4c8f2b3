//! The [`Discogs`] facade.

use std::sync::Arc;

use tracing::info;

use crate::api::{CollectionService, DatabaseService, SearchService, UserService};
use crate::auth::OAuthSigner;
use crate::config::{Currency, Options};
use crate::error::Result;
use crate::transport::Transport;

/// Client for the Discogs API.
///
/// Holds one handle per sub-service. All of them share the same HTTP
/// client, base URL and static headers. Cloning is cheap.
///
/// # Example
///
/// ```rust,no_run
/// use discogs::{Discogs, Options, Pagination};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Discogs::new(&Options::new("MyDiscogsClient/1.0").with_token("token"))?;
///
///     let artist = client.database().artist(108713).await?;
///     println!("{}", artist.name);
///
///     let page = client
///         .database()
///         .artist_releases(108713, Some(&Pagination::new(1, 50)))
///         .await?;
///     println!("{} releases", page.pagination.items);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Discogs {
    database: DatabaseService,
    search: SearchService,
    user: UserService,
    collection: CollectionService,
}

impl Discogs {
    /// Build a client.
    ///
    /// # Errors
    ///
    /// - `UserAgentInvalid` if no user agent is set
    /// - `CurrencyNotSupported` if the currency is not in the allow-list
    /// - `InvalidUrl` if the endpoint cannot be parsed
    pub fn new(options: &Options) -> Result<Self> {
        options.validated_user_agent()?;
        let currency = Currency::parse(&options.currency)?;
        let transport = Arc::new(Transport::new(options)?);

        info!(
            url = options.base_url(),
            currency = %currency,
            token = options.token().is_some(),
            "Discogs client ready"
        );

        Ok(Self {
            database: DatabaseService::new(Arc::clone(&transport), currency),
            search: SearchService::new(Arc::clone(&transport)),
            user: UserService::new(Arc::clone(&transport), None),
            collection: CollectionService::new(transport, None),
        })
    }

    /// A copy of this client whose user and collection services sign with
    /// `signer`. `self` is left unchanged.
    pub fn with_oauth(&self, signer: OAuthSigner) -> Self {
        Self {
            database: self.database.clone(),
            search: self.search.clone(),
            user: self.user.with_signer(signer.clone()),
            collection: self.collection.with_signer(signer),
        }
    }

    /// Releases, artists, labels and masters.
    pub fn database(&self) -> &DatabaseService {
        &self.database
    }

    /// Database search.
    pub fn search(&self) -> &SearchService {
        &self.search
    }

    /// OAuth identity.
    pub fn user(&self) -> &UserService {
        &self.user
    }

    /// Collection folders.
    pub fn collection(&self) -> &CollectionService {
        &self.collection
    }

    /// Currency used for marketplace prices.
    pub fn currency(&self) -> Currency {
        self.database.currency()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Credentials, OAuthClient};
    use crate::error::{DiscogsError, ErrorKind};

    #[test]
    fn test_requires_user_agent() {
        for options in [
            Options::default(),
            Options::new(""),
            Options::new("   ").with_token("t").with_currency(Currency::Eur),
        ] {
            assert!(matches!(
                Discogs::new(&options),
                Err(DiscogsError::UserAgentInvalid)
            ));
        }
    }

    #[test]
    fn test_user_agent_checked_before_currency() {
        let options = Options {
            currency: "XXX".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            Discogs::new(&options),
            Err(DiscogsError::UserAgentInvalid)
        ));
    }

    #[test]
    fn test_currency_validation() {
        for currency in Currency::all() {
            let client = Discogs::new(&Options::new("ua").with_currency(*currency)).unwrap();
            assert_eq!(client.currency(), *currency);
        }

        let mut options = Options::new("ua");
        options.currency = "BTC".to_string();
        let err = Discogs::new(&options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(matches!(err, DiscogsError::CurrencyNotSupported(c) if c == "BTC"));
    }

    #[test]
    fn test_empty_currency_defaults_to_usd() {
        let client = Discogs::new(&Options::new("ua")).unwrap();
        assert_eq!(client.currency(), Currency::Usd);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Discogs>();
        assert_send_sync::<DatabaseService>();
        assert_send_sync::<CollectionService>();
    }

    #[test]
    fn test_with_oauth_returns_signed_copy() {
        let client = Discogs::new(&Options::new("ua")).unwrap();
        let signer = OAuthSigner::new(
            OAuthClient::new("key", "secret"),
            Credentials::new("token", "token_secret"),
        );
        let signed = client.with_oauth(signer);

        assert!(!client.user().has_credentials());
        assert!(!client.collection().has_credentials());
        assert!(signed.user().has_credentials());
        assert!(signed.collection().has_credentials());
    }
}
