//! Client configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiscogsError, Result};

/// Default Discogs API endpoint.
pub const DISCOGS_API: &str = "https://api.discogs.com";

/// Options used to build a [`Discogs`](crate::Discogs) client.
///
/// # Example
///
/// ```rust
/// use discogs::{Currency, Options};
///
/// let options = Options::new("MyDiscogsClient/1.0")
///     .with_currency(Currency::Eur)
///     .with_token("secret-token");
/// assert_eq!(options.url, "https://api.discogs.com");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Discogs API endpoint. Empty means [`DISCOGS_API`].
    pub url: String,

    /// Currency code for marketplace data. Empty means `USD`.
    pub currency: String,

    /// User agent to call the API with. Required.
    pub user_agent: String,

    /// Personal access token, needed by some endpoints such as search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Options {
    /// Options with the given user agent and defaults for everything else.
    pub fn new<S: Into<String>>(user_agent: S) -> Self {
        Self {
            url: DISCOGS_API.to_string(),
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    /// Point the client at another endpoint (a mirror or a test server).
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = url.into();
        self
    }

    /// Set the marketplace currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency.code().to_string();
        self
    }

    /// Set the personal access token.
    pub fn with_token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Endpoint with the default applied and trailing slashes removed.
    pub(crate) fn base_url(&self) -> &str {
        let url = self.url.trim();
        if url.is_empty() {
            DISCOGS_API
        } else {
            url.trim_end_matches('/')
        }
    }

    /// Non-blank token, trimmed.
    pub(crate) fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Non-blank user agent or [`DiscogsError::UserAgentInvalid`].
    pub(crate) fn validated_user_agent(&self) -> Result<&str> {
        let user_agent = self.user_agent.trim();
        if user_agent.is_empty() {
            return Err(DiscogsError::UserAgentInvalid);
        }
        Ok(user_agent)
    }
}

/// Currencies accepted by the Discogs marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Gbp,
    Eur,
    Cad,
    Aud,
    Jpy,
    Chf,
    Mxn,
    Brl,
    Nzd,
    Sek,
    Zar,
}

impl Currency {
    /// Every supported currency.
    pub fn all() -> &'static [Currency] {
        &[
            Currency::Usd,
            Currency::Gbp,
            Currency::Eur,
            Currency::Cad,
            Currency::Aud,
            Currency::Jpy,
            Currency::Chf,
            Currency::Mxn,
            Currency::Brl,
            Currency::Nzd,
            Currency::Sek,
            Currency::Zar,
        ]
    }

    /// ISO code sent as `curr_abbr`.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Jpy => "JPY",
            Currency::Chf => "CHF",
            Currency::Mxn => "MXN",
            Currency::Brl => "BRL",
            Currency::Nzd => "NZD",
            Currency::Sek => "SEK",
            Currency::Zar => "ZAR",
        }
    }

    /// Validate a currency code. Empty input falls back to `USD`.
    pub fn parse(code: &str) -> Result<Self> {
        if code.is_empty() {
            return Ok(Currency::Usd);
        }
        Currency::all()
            .iter()
            .copied()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| DiscogsError::CurrencyNotSupported(code.to_string()))
    }
}

impl FromStr for Currency {
    type Err = DiscogsError;

    fn from_str(s: &str) -> Result<Self> {
        Currency::parse(s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
