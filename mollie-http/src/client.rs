//! HTTP client implementation.

use http::Method;
use reqwest::Request;
use std::sync::Arc;
use tracing::debug;

use crate::{HttpClientConfig, HttpClientError, RequestBuilder, Response, Result};

/// HTTP client bound to a base URL, credentials and default headers.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<HttpClientConfig>,
    base_url: Option<url::Url>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    ///
    /// Fails if the configured base URL does not parse or the underlying
    /// `reqwest` client cannot be constructed.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let inner = builder
            .build()
            .map_err(|e| HttpClientError::RequestBuild(e.to_string()))?;

        let base_url = config
            .base_url
            .as_deref()
            .map(url::Url::parse)
            .transpose()
            .map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            base_url,
        })
    }

    /// Get the underlying reqwest client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Get the client configuration.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Get the parsed base URL, if one is configured.
    pub fn base_url(&self) -> Option<&url::Url> {
        self.base_url.as_ref()
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::GET, url.into())
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::POST, url.into())
    }

    /// Create a PATCH request builder.
    pub fn patch(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::PATCH, url.into())
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::DELETE, url.into())
    }

    /// Create a request builder with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, method, url.into())
    }

    /// Execute a request exactly once.
    pub(crate) async fn execute(&self, request: Request) -> Result<Response> {
        debug!(method = %request.method(), url = %request.url(), "Sending request");
        let response = self.inner.execute(request).await?;
        let response = Response::from_reqwest(response).await?;
        debug!(status = %response.status(), "Received response");
        Ok(response)
    }
}
