//! Shared HTTP client for the PackForm REST services.

use crate::error::{ServiceError, ServiceResult};
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Body shape the services use for error responses.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// One client shared by all service calls.
///
/// Holds the base URL and a pooled `reqwest::Client`; the per-resource
/// methods live in the resource modules (`templates`, `designs`, ...).
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client against a service base URL (e.g. `http://localhost:4100`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ServiceResult<T> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ServiceResult<T> {
        let response = self
            .http
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST/DELETE where only the status matters.
    pub(crate) async fn send_no_content(&self, method: Method, path: &str) -> ServiceResult<()> {
        let response = self.http.request(method, self.url(path)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ServiceResult<T> {
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Turn a non-success response into `ServiceError::Api`, pulling the
    /// message from the conventional `{"error": ...}` body when present.
    async fn check(response: Response) -> ServiceResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.text().await {
            Ok(text) => match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(body) => body.error,
                Err(_) if !text.is_empty() => text,
                Err(_) => status.to_string(),
            },
            Err(_) => status.to_string(),
        };
        log::warn!("request failed with {status}: {message}");
        Err(ServiceError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let client = ApiClient::new("http://localhost:4100///");
        assert_eq!(client.base_url(), "http://localhost:4100");
        assert_eq!(client.url("/api/templates"), "http://localhost:4100/api/templates");
    }
}
