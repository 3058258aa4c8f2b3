//! Database search service.

use std::sync::Arc;

use tracing::field::Empty;
use tracing::instrument;

use super::failed;
use crate::error::Result;
use crate::models::{SearchRequest, SearchResults};
use crate::pagination::{self, Pagination};
use crate::transport::{Auth, Transport};

pub(crate) const SEARCH_URI: &str = "/database/search";

/// Search the Discogs database.
///
/// Discogs only answers search requests that carry a token, so build the
/// client with [`Options::with_token`](crate::Options::with_token).
#[derive(Debug, Clone)]
pub struct SearchService {
    transport: Arc<Transport>,
}

impl SearchService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Run a search and return one page of results.
    #[instrument(
        name = "discogs.SearchService.search",
        skip(self, request, pagination),
        fields(path = SEARCH_URI, query = ?request.q, error = Empty, status_code = Empty, status_message = Empty)
    )]
    pub async fn search(
        &self,
        request: &SearchRequest,
        pagination: Option<&Pagination>,
    ) -> Result<SearchResults> {
        let mut params = request.params();
        params.extend(pagination::params(pagination));

        self.transport
            .get(SEARCH_URI, &params, Auth::Static)
            .await
            .map_err(|err| {
                failed(
                    err,
                    "failed to search database",
                    vec![("query", request.q.clone().unwrap_or_default())],
                )
            })
    }
}
