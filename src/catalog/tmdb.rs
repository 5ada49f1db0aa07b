//! TMDB catalog implementation (API v3).
//!
//! Two endpoint shapes are used:
//! - `GET /search/movie?query=...` for a non-empty query
//! - `GET /discover/movie?sort_by=popularity.desc` for the default listing
//!
//! Both authenticate with a bearer token (TMDB "API Read Access Token").

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::provider::{CatalogError, CatalogQuery, MovieCatalog};
use super::types::{Movie, MoviePage};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB movie catalog over HTTP.
pub struct TmdbCatalog {
    api_token: Option<String>,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl TmdbCatalog {
    /// Creates a new TMDB catalog.
    ///
    /// # Arguments
    /// * `api_token` - Bearer token. A missing token is sent as no header at all,
    ///   and TMDB answers 401.
    /// * `base_url` - Optional custom base URL (defaults to TMDB's API)
    /// * `timeout` - Overall per-request timeout
    pub fn new(api_token: Option<String>, base_url: Option<String>, timeout: Duration) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            api_token,
            base_url,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    fn build_request(&self, query: &CatalogQuery) -> reqwest::RequestBuilder {
        let request = match query {
            CatalogQuery::Search(text) => self
                .client
                .get(format!("{}/search/movie", self.base_url))
                .query(&[("query", text.as_str())]),
            CatalogQuery::Discover => self
                .client
                .get(format!("{}/discover/movie", self.base_url))
                .query(&[("sort_by", "popularity.desc")]),
        };

        let request = request
            .header("accept", "application/json")
            .timeout(self.timeout);

        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl MovieCatalog for TmdbCatalog {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Movie>, CatalogError> {
        let request = self
            .build_request(query)
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;
        info!("TMDB request: {} {}", request.method(), request.url());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("TMDB response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("TMDB API error: {} - {}", status, err_body);
            return Err(CatalogError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let page: MoviePage =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        if let Some(message) = page.rejection() {
            warn!("TMDB rejected request: {:?}", message);
            return Err(CatalogError::Rejected(message));
        }

        let movies = page.into_movies();
        info!("TMDB returned {} movies", movies.len());
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(token: Option<&str>) -> TmdbCatalog {
        TmdbCatalog::new(
            token.map(str::to_string),
            Some("https://tmdb.test/3/".to_string()),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn test_search_request_escapes_query() {
        let request = catalog(Some("tok"))
            .build_request(&CatalogQuery::Search("fast & furious".to_string()))
            .build()
            .unwrap();
        assert_eq!(request.url().path(), "/3/search/movie");
        assert_eq!(request.url().query(), Some("query=fast+%26+furious"));
    }

    #[test]
    fn test_discover_request_sorts_by_popularity() {
        let request = catalog(Some("tok"))
            .build_request(&CatalogQuery::Discover)
            .build()
            .unwrap();
        assert_eq!(request.url().path(), "/3/discover/movie");
        assert_eq!(request.url().query(), Some("sort_by=popularity.desc"));
    }

    #[test]
    fn test_request_headers() {
        let request = catalog(Some("secret"))
            .build_request(&CatalogQuery::Discover)
            .build()
            .unwrap();
        assert_eq!(request.headers()["authorization"], "Bearer secret");
        assert_eq!(request.headers()["accept"], "application/json");
    }

    #[test]
    fn test_missing_token_sends_no_authorization() {
        let request = catalog(None)
            .build_request(&CatalogQuery::Discover)
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }
}
