//! REST client for the `/records` endpoints.
//!
//! Success bodies are the bare record, record array or delete confirmation;
//! `{ "error", "code" }` bodies become [`ClientError::Api`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use watchlist_core::record::{CreateRecord, DeletedRecord, MovieRecord, UpdateRecord};
use watchlist_core::types::RecordId;

use crate::error::ClientError;

/// HTTP client for one watchlist server.
#[derive(Debug, Clone)]
pub struct WatchlistApi {
    client: reqwest::Client,
    records_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: Option<String>,
}

impl WatchlistApi {
    /// Create a client for the records collection URL, e.g.
    /// `http://localhost:5000/records`.
    pub fn new(records_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), records_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, records_url: impl Into<String>) -> Self {
        let records_url = records_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            records_url,
        }
    }

    pub fn records_url(&self) -> &str {
        &self.records_url
    }

    /// `GET /records`
    pub async fn list(&self) -> Result<Vec<MovieRecord>, ClientError> {
        let response = self.client.get(&self.records_url).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /records`
    pub async fn create(&self, input: &CreateRecord) -> Result<MovieRecord, ClientError> {
        let response = self
            .client
            .post(&self.records_url)
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /records/{id}`
    pub async fn update(
        &self,
        id: RecordId,
        input: &UpdateRecord,
    ) -> Result<MovieRecord, ClientError> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /records/{id}`
    pub async fn delete(&self, id: RecordId) -> Result<DeletedRecord, ClientError> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        Self::parse_response(response).await
    }

    fn record_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.records_url, id)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or an
    /// [`ClientError::Api`] built from the error body on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let (code, message) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => (body.code, body.error),
            Err(_) => (None, text),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }

    /// Parse a successful JSON response into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = WatchlistApi::new("http://localhost:5000/records/");
        assert_eq!(api.records_url(), "http://localhost:5000/records");
    }

    #[test]
    fn record_url_appends_id() {
        let api = WatchlistApi::new("http://localhost:5000/records");
        let id = uuid::Uuid::nil();
        assert_eq!(
            api.record_url(id),
            "http://localhost:5000/records/00000000-0000-0000-0000-000000000000"
        );
    }
}
