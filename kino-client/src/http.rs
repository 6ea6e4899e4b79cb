//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ErrorDetail;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP transport used by the API layer.
///
/// Every call except [`HttpClient::get_anonymous`] carries the bearer token
/// when one is set. Callers that ignore the body should ask for
/// [`serde::de::IgnoredAny`]; an empty 2xx body decodes as JSON `null`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn get_anonymous<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_form<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        form: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    fn set_token(&mut self, token: Option<String>);
    fn token(&self) -> Option<&str>;
}

/// reqwest-backed HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Server base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: Method, path: &str, authorized: bool) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::trace!(%method, %url, authorized, "Sending request");
        let mut req = self.client.request(method, url);
        if authorized && let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }

    async fn send<T: DeserializeOwned + Send>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned + Send>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Structured `{detail}` when present, generic message otherwise
            let detail = ErrorDetail::extract(&text);
            tracing::debug!(status = status.as_u16(), detail = ?detail, "Request rejected");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(detail)),
                _ => Err(ClientError::Api {
                    status: status.as_u16(),
                    detail,
                }),
            };
        }

        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::GET, path, true)).await
    }

    async fn get_anonymous<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::GET, path, false)).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.request(Method::POST, path, true).json(body))
            .await
    }

    async fn post_form<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        form: &B,
    ) -> ClientResult<T> {
        self.send(self.request(Method::POST, path, true).form(form))
            .await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.request(Method::PUT, path, true).json(body))
            .await
    }

    async fn patch<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.request(Method::PATCH, path, true).json(body))
            .await
    }

    async fn patch_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::PATCH, path, true)).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::DELETE, path, true)).await
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let config = ClientConfig::new("http://localhost:8000/").unwrap();
        let mut client = NetworkHttpClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert!(client.token().is_none());

        client.set_token(Some("abc".into()));
        assert_eq!(client.token(), Some("abc"));
        assert_eq!(client.auth_header().as_deref(), Some("Bearer abc"));

        client.set_token(None);
        assert!(client.auth_header().is_none());
    }
}
