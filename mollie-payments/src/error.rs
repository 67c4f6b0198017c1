//! Error types for the Mollie API client
//!
//! Three kinds of failure share one channel:
//!
//! - transport failures (DNS, connect, TLS, timeout), surfaced verbatim
//! - bodies that match neither the success shape nor the error shape
//! - domain errors reported by Mollie in a completed HTTP exchange
//!
//! Mollie reports domain errors with this envelope:
//!
//! ```json
//! {
//!   "status": 422,
//!   "title": "Unprocessable Entity",
//!   "detail": "The amount is higher than the maximum",
//!   "field": "amount",
//!   "_links": {
//!     "documentation": { "href": "https://docs.mollie.com/overview/handling-errors", "type": "text/html" }
//!   }
//! }
//! ```

use crate::types::ListLinks;
use mollie_http::{HttpClientError, Response};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Mollie client error
#[derive(Debug, Error)]
pub enum Error {
    /// The round trip itself failed
    #[error(transparent)]
    Transport(#[from] HttpClientError),

    /// The response body matched neither the expected payload nor an error envelope
    #[error("Failed to decode response ({status}): {source}", status = .response.status())]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
        /// Raw response
        response: Box<Response>,
    },

    /// Mollie returned an error envelope
    #[error("{error}")]
    Api {
        /// Decoded error envelope
        error: ApiError,
        /// Raw response
        response: Box<Response>,
    },

    /// Amount could not be parsed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Client configuration is unusable
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Raw response, when the round trip completed
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Decode { response, .. } | Self::Api { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP status of the raw response, when the round trip completed
    pub fn status_code(&self) -> Option<u16> {
        self.response().map(|r| r.status().as_u16())
    }

    /// Decoded error envelope, for domain errors
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Check if this is a transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type for Mollie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Mollie error envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Mollie error {status} {title}: {detail}")]
pub struct ApiError {
    /// HTTP status reported in the envelope
    #[serde(default)]
    pub status: u16,
    /// Short, human-readable summary
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Human-readable explanation
    #[serde(default, deserialize_with = "null_as_default")]
    pub detail: String,
    /// Request field the error refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Documentation links
    #[serde(default, rename = "_links", deserialize_with = "null_as_default")]
    pub links: ListLinks,
}

/// Read an explicit JSON `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ApiError {
    /// Check if the envelope carries a real error
    pub fn is_error(&self) -> bool {
        self.status >= 300
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}
