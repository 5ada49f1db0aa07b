use std::fmt;

use async_trait::async_trait;

use super::types::Movie;

/// Errors that can occur while fetching from a movie catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog misconfigured (bad base URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The catalog answered with a non-success HTTP status.
    Api { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
    /// HTTP succeeded but the body itself reports a failure.
    /// Carries the body's own message when it provides one.
    Rejected(Option<String>),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Config(msg) => write!(f, "config error: {msg}"),
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
            CatalogError::Rejected(Some(msg)) => write!(f, "request rejected: {msg}"),
            CatalogError::Rejected(None) => write!(f, "request rejected"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The two request shapes a catalog understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Default listing, sorted by popularity.
    Discover,
    /// Free-text title search.
    Search(String),
}

impl CatalogQuery {
    /// An empty committed query means "show the default listing".
    pub fn from_query(query: &str) -> Self {
        if query.is_empty() {
            CatalogQuery::Discover
        } else {
            CatalogQuery::Search(query.to_string())
        }
    }
}

#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Returns the name of the catalog.
    fn name(&self) -> &str;

    /// Issues exactly one request for `query` and returns the listed movies.
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Movie>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_discover() {
        assert_eq!(CatalogQuery::from_query(""), CatalogQuery::Discover);
    }

    #[test]
    fn test_non_empty_query_is_search() {
        assert_eq!(
            CatalogQuery::from_query("batman"),
            CatalogQuery::Search("batman".to_string())
        );
        // Whitespace is still a search, the way the text was typed
        assert_eq!(
            CatalogQuery::from_query(" "),
            CatalogQuery::Search(" ".to_string())
        );
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): boom");
        assert_eq!(
            CatalogError::Rejected(Some("Invalid API key".to_string())).to_string(),
            "request rejected: Invalid API key"
        );
        assert_eq!(CatalogError::Rejected(None).to_string(), "request rejected");
    }
}
