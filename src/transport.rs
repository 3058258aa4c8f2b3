//! Single-request HTTP transport shared by every service.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::auth::OAuthSigner;
use crate::config::Options;
use crate::error::{DiscogsError, Result};

/// How a request is authenticated.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Auth<'a> {
    /// Headers fixed at construction: user agent and optional token.
    Static,
    /// OAuth 1.0a signature computed per request.
    OAuth(&'a OAuthSigner),
}

/// HTTP client bound to one base URL and one static header set.
#[derive(Debug)]
pub(crate) struct Transport {
    client: Client,
    /// Base URL stored without a trailing slash.
    base_url: String,
    /// Sent on every static-auth request.
    headers: HeaderMap,
}

impl Transport {
    /// Build the transport from validated options.
    pub(crate) fn new(options: &Options) -> Result<Self> {
        let user_agent = options.validated_user_agent()?;
        let base_url = options.base_url().to_string();
        Url::parse(&base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(token) = options.token() {
            let value = HeaderValue::from_str(&format!("Discogs token={}", token))
                .map_err(|_| DiscogsError::InvalidToken)?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder().user_agent(user_agent).build()?;

        debug!(base_url = %base_url, token = options.token().is_some(), "Initialized Discogs transport");

        Ok(Self {
            client,
            base_url,
            headers,
        })
    }

    /// Full URL for `path` with `query` appended.
    pub(crate) fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    /// GET `path` and decode the JSON body into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        auth: Auth<'_>,
    ) -> Result<T> {
        let url = self.url(path, query)?;
        debug!("GET {}", url);

        let request = match auth {
            Auth::Static => self.client.get(url).headers(self.headers.clone()),
            Auth::OAuth(signer) => {
                let authorization = signer.authorization("GET", &url);
                self.client.get(url).header(AUTHORIZATION, authorization)
            }
        };

        let response = request.send().await?;
        let status = response.status();
        debug!(status = %status, "Discogs response");

        if status != StatusCode::OK {
            warn!(status = %status, path, "Discogs request failed");
            return Err(match status {
                StatusCode::UNAUTHORIZED => DiscogsError::Unauthorized,
                _ => DiscogsError::Upstream {
                    status: status.to_string(),
                },
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
