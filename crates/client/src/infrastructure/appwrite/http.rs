//! Shared HTTP plumbing for the platform REST API.
//!
//! One `PlatformHttp` is shared by the account, database and storage
//! adapters so they see the same session: the reqwest cookie jar plus the
//! fallback session header the platform hands out for cross-site clients.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use url::Url;

use quillpost_shared::headers::{FALLBACK_COOKIES_HEADER, PROJECT_HEADER};
use quillpost_shared::ErrorBody;

use crate::infrastructure::ports::PlatformError;

pub struct PlatformHttp {
    client: Client,
    endpoint: Url,
    project_id: String,
    fallback_cookies: RwLock<Option<String>>,
}

impl PlatformHttp {
    pub fn new(endpoint: Url, project_id: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint,
            project_id: project_id.into(),
            fallback_cookies: RwLock::new(None),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Endpoint URL extended with `segments`, each percent-encoded.
    pub fn url(&self, segments: &[&str]) -> Result<Url, PlatformError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| {
                PlatformError::transport("build_url", "endpoint cannot carry a path")
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Request with the project header and any cached session material.
    pub async fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header(PROJECT_HEADER, &self.project_id);

        match self.fallback_cookies.read().await.as_deref() {
            Some(cookies) => builder.header(FALLBACK_COOKIES_HEADER, cookies),
            None => builder,
        }
    }

    /// Send and decode a JSON success body.
    pub async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<T, PlatformError> {
        let response = self.execute(operation, builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| PlatformError::invalid_response(operation, e))
    }

    /// Send a request whose success body is irrelevant.
    pub async fn send_empty(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<(), PlatformError> {
        self.execute(operation, builder).await.map(|_| ())
    }

    /// Forget the fallback session material.
    pub async fn clear_session(&self) {
        *self.fallback_cookies.write().await = None;
    }

    async fn execute(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<Response, PlatformError> {
        let request = builder
            .build()
            .map_err(|e| PlatformError::transport(operation, e))?;
        tracing::debug!(
            operation,
            method = %request.method(),
            url = %request.url(),
            "Platform request"
        );

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| PlatformError::transport(operation, e))?;

        if let Some(cookies) = response
            .headers()
            .get(FALLBACK_COOKIES_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
        {
            *self.fallback_cookies.write().await = Some(cookies.to_string());
        }

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .map_err(|e| PlatformError::transport(operation, e))?;
        Err(match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => PlatformError::from_body(body),
            Err(_) => PlatformError::from_status(status.as_u16(), text),
        })
    }
}
