//! HTTP client for the REST document store.
//!
//! The store exposes each collection at `{base}/{collection}` and each
//! document at `{base}/{collection}/{id}`, with JSON bodies throughout.

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use super::PersistenceError;

/// JSON client bound to one document store base URL.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    client: Client,
    base_url: String,
}

impl DocumentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    /// POST /{collection} - Create a document and return what the store saved.
    pub async fn create<B, T>(&self, collection: &str, body: &B) -> Result<T, PersistenceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.collection_url(collection))
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// PATCH /{collection}/{id} - Merge fields into an existing document.
    ///
    /// Any success status counts; the reply body (if there is one) is not read.
    pub async fn patch<B>(&self, collection: &str, id: &str, body: &B) -> Result<(), PersistenceError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .patch(self.document_url(collection, id))
            .json(body)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PersistenceError> {
        let text = Self::ensure_success(response).await?.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PersistenceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        Err(PersistenceError::Status {
            status: status.as_u16(),
            body: response.text().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let client = DocumentClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.collection_url("sessions"),
            "http://localhost:3000/sessions"
        );
        assert_eq!(
            client.document_url("sessions", "17"),
            "http://localhost:3000/sessions/17"
        );
    }

    #[tokio::test]
    async fn test_unreachable_store_is_transport_error() {
        // Port 9 (discard) is not expected to run an HTTP server.
        let client = DocumentClient::new("http://127.0.0.1:9");
        let result: Result<serde_json::Value, _> =
            client.create("sessions", &serde_json::json!({})).await;
        assert!(matches!(result, Err(PersistenceError::Transport(_))));
    }
}
