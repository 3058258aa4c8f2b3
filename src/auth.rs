//! OAuth 1.0a request signing.
//!
//! Discogs authenticates per-user endpoints (identity, collections) with
//! OAuth 1.0a. Obtaining the access token is left to the caller; this module
//! only signs requests once the token and secret are known. Signing itself is
//! done by `oauth1-request`.

use std::fmt;
use std::num::NonZeroU64;

use oauth1_request as oauth;
use oauth::signature_method::SignatureMethod as Method;
use oauth::{Builder, ParameterList, Token};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left untouched by OAuth percent-encoding.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string with the RFC 3986 unreserved set.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}

/// Signature methods supported by Discogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMethod {
    #[default]
    HmacSha1,
    Plaintext,
}

impl SignatureMethod {
    /// Value of the `oauth_signature_method` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::Plaintext => "PLAINTEXT",
        }
    }
}

/// Consumer (application) side of OAuth.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthClient {
    /// Consumer key issued by Discogs.
    pub consumer_key: String,
    consumer_secret: String,
    /// How requests get signed.
    pub signature_method: SignatureMethod,
}

impl OAuthClient {
    /// Create a client that signs with HMAC-SHA1.
    pub fn new<S1: Into<String>, S2: Into<String>>(consumer_key: S1, consumer_secret: S2) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            signature_method: SignatureMethod::default(),
        }
    }

    /// Use another signature method.
    pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
        self.signature_method = method;
        self
    }
}

impl fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthClient")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("signature_method", &self.signature_method)
            .finish()
    }
}

/// Access token and secret for one Discogs user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Access token.
    pub token: String,
    secret: String,
}

impl Credentials {
    /// Pair an access token with its secret.
    pub fn new<S1: Into<String>, S2: Into<String>>(token: S1, secret: S2) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// An [`OAuthClient`] paired with user [`Credentials`].
///
/// Bound to a service at construction; it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthSigner {
    client: OAuthClient,
    credentials: Credentials,
}

impl OAuthSigner {
    /// Combine consumer and user credentials.
    pub fn new(client: OAuthClient, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Consumer key this signer signs for.
    pub fn consumer_key(&self) -> &str {
        &self.client.consumer_key
    }

    /// `Authorization` header value for a request to `url`.
    ///
    /// Query parameters already present on `url` are part of the signature.
    /// Nonce and timestamp are generated per call.
    pub fn authorization(&self, method: &str, url: &Url) -> String {
        self.sign(method, url, None, None)
    }

    /// Same as [`authorization`](Self::authorization) with a fixed nonce and timestamp.
    pub fn authorization_with(&self, method: &str, url: &Url, nonce: &str, timestamp: u64) -> String {
        self.sign(method, url, Some(nonce), NonZeroU64::new(timestamp))
    }

    fn sign(
        &self,
        method: &str,
        url: &Url,
        nonce: Option<&str>,
        timestamp: Option<NonZeroU64>,
    ) -> String {
        match self.client.signature_method {
            SignatureMethod::HmacSha1 => {
                self.sign_with(oauth::HMAC_SHA1, method, url, nonce, timestamp)
            }
            SignatureMethod::Plaintext => {
                self.sign_with(oauth::PLAINTEXT, method, url, nonce, timestamp)
            }
        }
    }

    fn sign_with<SM: Method + Clone>(
        &self,
        signature_method: SM,
        method: &str,
        url: &Url,
        nonce: Option<&str>,
        timestamp: Option<NonZeroU64>,
    ) -> String {
        let token = Token::from_parts(
            self.client.consumer_key.as_str(),
            self.client.consumer_secret.as_str(),
            self.credentials.token.as_str(),
            self.credentials.secret.as_str(),
        );
        let (uri, params) = split_query(url);

        let mut builder = Builder::with_token(token, signature_method);
        builder.version(true).nonce(nonce).timestamp(timestamp);
        builder.authorize(&method.to_ascii_uppercase(), uri, &params)
    }
}

/// Separate `url` into the bare URI the signer expects and its query pairs.
fn split_query(url: &Url) -> (String, ParameterList<String, String>) {
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let mut uri = url.clone();
    uri.set_query(None);
    uri.set_fragment(None);
    (uri.to_string(), ParameterList::new(pairs))
}
