//! Appwrite Databases REST implementation of `TrendingStore`.
//!
//! All calls go to `{endpoint}/databases/{db}/collections/{collection}/documents`.
//! Queries are JSON strings passed as repeated `queries[]` parameters, e.g.
//! `{"method":"equal","attribute":"searchTerm","values":["batman"]}`.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::store::{NewTrendingEntry, StoreError, TrendingEntry, TrendingStore};

pub const DEFAULT_APPWRITE_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

/// Connection settings for one Appwrite collection.
#[derive(Debug, Clone, PartialEq)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    /// Server API key. Optional: a collection with public permissions needs none.
    pub api_key: Option<String>,
}

#[derive(Deserialize, Debug)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingEntry>,
}

#[derive(Serialize, Debug)]
struct DocumentData<'a> {
    #[serde(rename = "searchTerm")]
    search_term: &'a str,
    count: u64,
    movie_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    poster_url: Option<&'a str>,
    title: &'a str,
}

#[derive(Serialize, Debug)]
struct CreateDocument<'a> {
    #[serde(rename = "documentId")]
    document_id: String,
    data: DocumentData<'a>,
}

fn equal_query(attribute: &str, value: &str) -> String {
    json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
}

fn order_desc_query(attribute: &str) -> String {
    json!({ "method": "orderDesc", "attribute": attribute }).to_string()
}

fn limit_query(limit: usize) -> String {
    json!({ "method": "limit", "values": [limit] }).to_string()
}

/// Trending counters in an Appwrite collection.
pub struct AppwriteStore {
    config: AppwriteConfig,
    client: reqwest::Client,
}

impl AppwriteStore {
    pub fn new(config: AppwriteConfig) -> Self {
        let config = AppwriteConfig {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            ..config
        };
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint, self.config.database_id, self.config.collection_id
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("X-Appwrite-Project", &self.config.project_id);
        match &self.config.api_key {
            Some(key) => request.header("X-Appwrite-Key", key),
            None => request,
        }
    }

    /// Sends a request and returns the response if the status is a success.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        debug!("Appwrite response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Appwrite API error: {} - {}", status, err_body);
            return Err(StoreError::Api {
                status,
                message: err_body,
            });
        }

        Ok(response)
    }

    async fn list(&self, queries: &[String]) -> Result<Vec<TrendingEntry>, StoreError> {
        let params: Vec<(&str, &str)> = queries.iter().map(|q| ("queries[]", q.as_str())).collect();
        let response = self
            .send(self.client.get(self.documents_url()).query(&params))
            .await?;
        let list: DocumentList = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        Ok(list.documents)
    }
}

#[async_trait]
impl TrendingStore for AppwriteStore {
    fn name(&self) -> &str {
        "appwrite"
    }

    async fn find_by_term(&self, term: &str) -> Result<Option<TrendingEntry>, StoreError> {
        let documents = self
            .list(&[equal_query("searchTerm", term), limit_query(1)])
            .await?;
        Ok(documents.into_iter().next())
    }

    async fn create(&self, entry: &NewTrendingEntry) -> Result<TrendingEntry, StoreError> {
        let body = CreateDocument {
            document_id: uuid::Uuid::new_v4().simple().to_string(),
            data: DocumentData {
                search_term: &entry.search_term,
                count: 1,
                movie_id: entry.movie_id,
                poster_url: entry.poster_url.as_deref(),
                title: &entry.title,
            },
        };
        info!(
            "Creating trending document {} for '{}'",
            body.document_id, entry.search_term
        );
        let response = self
            .send(self.client.post(self.documents_url()).json(&body))
            .await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))
    }

    async fn increment(&self, entry: &TrendingEntry) -> Result<(), StoreError> {
        let count = entry.count + 1;
        info!(
            "Incrementing trending document {} ('{}') to {}",
            entry.id, entry.search_term, count
        );
        let body = json!({ "data": { "count": count } });
        self.send(
            self.client
                .patch(format!("{}/{}", self.documents_url(), entry.id))
                .json(&body),
        )
        .await?;
        Ok(())
    }

    async fn top_by_count(&self, limit: usize) -> Result<Vec<TrendingEntry>, StoreError> {
        let documents = self
            .list(&[limit_query(limit), order_desc_query("count")])
            .await?;
        info!("Loaded {} trending documents", documents.len());
        Ok(documents)
    }
}
