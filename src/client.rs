//! HTTP client wrapper for the API gateway.
//!
//! Every request goes through [`ApiClient`]: it attaches the bearer
//! token, decodes JSON bodies, and normalizes non-2xx responses into
//! [`PaisaError::Api`] using the backend's `{message}` error shape. A
//! 401 becomes [`PaisaError::Unauthorized`] so callers can route back
//! to the login screen. Endpoint paths live in [`crate::services`];
//! this module never hardcodes one.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{PaisaError, Result};

/// Error body returned by every backend service on failure.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// A bearer-token HTTP client bound to one gateway base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given gateway base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PaisaError::Http`] if the underlying client cannot be
    /// built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Sets the bearer token attached to subsequent requests.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Removes the bearer token (logged-out requests).
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// `GET path` decoded as JSON.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(self.request(Method::GET, path)).await
    }

    /// `GET path?query` decoded as JSON.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    /// `GET path` returning the raw body bytes (document download).
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// `POST path` with a JSON body, decoded as JSON.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    /// `POST path` with a JSON body, returning the raw response text
    /// (for endpoints that answer with a plain acknowledgement string).
    pub async fn post_for_text<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String> {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        Ok(response.text().await?)
    }

    /// `POST path` with a multipart form (document upload), returning
    /// the raw response text.
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<String> {
        let response = self
            .send(self.request(Method::POST, path).multipart(form))
            .await?;
        Ok(response.text().await?)
    }

    /// `PUT path` with a JSON body, decoded as JSON.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send_json(self.request(Method::PUT, path).json(body))
            .await
    }

    /// `PUT path` with no body, ignoring the response body.
    pub async fn put_empty(&self, path: &str) -> Result<()> {
        self.send(self.request(Method::PUT, path)).await?;
        Ok(())
    }

    /// `DELETE path`, ignoring the response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    /// Sends the request and maps non-2xx statuses to errors.
    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            debug!("gateway rejected bearer token");
            return Err(PaisaError::Unauthorized);
        }

        // Backend errors carry `{message}`; anything else gets a generic
        // status line.
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("http status {status}"),
        };
        Err(PaisaError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
