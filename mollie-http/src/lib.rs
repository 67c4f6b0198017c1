//! # Mollie HTTP
//!
//! A thin request builder over `reqwest` that every Mollie API call goes
//! through. A client is bound once to a base URL, a bearer token, a user
//! agent and any extra default headers; each request then only adds its
//! relative path, an optional query struct and an optional JSON body.
//!
//! The client performs exactly one round trip per [`RequestBuilder::send`].
//! It never retries, and only applies a timeout when one is configured.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mollie_http::{HttpClient, HttpClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpClientConfig::builder()
//!         .base_url("https://api.mollie.com/v2/")
//!         .bearer_token("test_xxx")
//!         .build();
//!
//!     let client = HttpClient::new(config)?;
//!     let response = client.get("methods").send().await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use request::RequestBuilder;
pub use response::Response;

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use url::Url;

/// Prelude for common imports.
///
/// ```
/// use mollie_http::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::HttpClient;
    pub use crate::config::{HttpClientConfig, HttpClientConfigBuilder};
    pub use crate::error::{HttpClientError, Result};
    pub use crate::request::RequestBuilder;
    pub use crate::response::Response;
    pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
}
