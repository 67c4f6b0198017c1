//! Transport factory and the single request-execution path.
//!
//! Every service call ends in [`Transport::execute`]: one round trip, then
//! [`decode_envelope`] decides whether the body is the expected payload or a
//! Mollie error envelope.
//!
//! Mollie answers every call with one JSON envelope. The body is parsed
//! once; if it carries a numeric `status` of 300 or above it is an error,
//! whatever the HTTP status line said, and it replaces the successful
//! transport result.

use crate::config::ClientConfig;
use crate::error::{ApiError, Error, Result};
use mollie_http::{HttpClient, HttpClientConfig, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Outcome of decoding a response body.
#[derive(Debug)]
pub enum Envelope<T> {
    /// The body decoded into the expected payload
    Success(T),
    /// The body is an error envelope
    Failure(ApiError),
}

/// Decide between payload and error envelope.
///
/// An empty body on a 2xx `status` is read as JSON `null`, so endpoints
/// answering `204 No Content` decode into `()`. On any other status an empty
/// body is a decode error.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> serde_json::Result<Envelope<T>> {
    let blank = body.iter().all(u8::is_ascii_whitespace);
    let value: serde_json::Value = if blank && (200..300).contains(&status) {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(body)?
    };

    let is_error = value
        .get("status")
        .and_then(serde_json::Value::as_u64)
        .is_some_and(|status| status >= 300);

    if is_error {
        let error: ApiError = serde_json::from_value(value)?;
        return Ok(Envelope::Failure(error));
    }

    serde_json::from_value(value).map(Envelope::Success)
}

/// A decoded payload together with the raw response it came from.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Decoded payload
    pub data: T,
    /// Raw response (status, headers, body)
    pub response: Response,
}

impl<T> ApiResponse<T> {
    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    /// Take the payload
    pub fn into_data(self) -> T {
        self.data
    }

    /// Split into payload and raw response
    pub fn into_parts(self) -> (T, Response) {
        (self.data, self.response)
    }
}

impl<T> std::ops::Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// Preconfigured request builder bound to one access token.
#[derive(Debug, Clone)]
pub struct Transport {
    http: HttpClient,
}

impl Transport {
    /// Build a transport for `access_token`.
    ///
    /// The token is not validated; a bad token only shows up as an
    /// authentication error from Mollie.
    pub fn new(access_token: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let mut http_config = HttpClientConfig::builder()
            .base_url(config.endpoint())
            .bearer_token(access_token)
            .user_agent(&config.user_agent)
            .default_header("Accept", "application/json");

        if let Some(timeout) = config.timeout {
            http_config = http_config.timeout(timeout);
        }

        let http = HttpClient::new(http_config.build()).map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self { http })
    }

    /// Underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// GET a resource
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<ApiResponse<T>> {
        self.execute(self.http.get("").segments(path.iter().copied())).await
    }

    /// GET a resource, attaching `query` when present
    pub(crate) async fn get_query<T, Q>(&self, path: &[&str], query: Option<&Q>) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = self.http.get("").segments(path.iter().copied());
        if let Some(query) = query {
            request = request.query_struct(query);
        }
        self.execute(request).await
    }

    /// POST a JSON body
    pub(crate) async fn post<T, B>(&self, path: &[&str], body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.http.post("").segments(path.iter().copied()).json(body))
            .await
    }

    /// PATCH with a partial JSON body
    pub(crate) async fn patch<T, B>(&self, path: &[&str], body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.http.patch("").segments(path.iter().copied()).json(body))
            .await
    }

    /// DELETE a resource
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &[&str]) -> Result<ApiResponse<T>> {
        self.execute(self.http.delete("").segments(path.iter().copied())).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder<'_>) -> Result<ApiResponse<T>> {
        let response = request.send().await?;

        match decode_envelope::<T>(response.status().as_u16(), response.bytes()) {
            Ok(Envelope::Success(data)) => Ok(ApiResponse { data, response }),
            Ok(Envelope::Failure(error)) => {
                debug!(
                    status = error.status,
                    title = %error.title,
                    url = %response.url(),
                    "Mollie returned an error"
                );
                Err(Error::Api {
                    error,
                    response: Box::new(response),
                })
            }
            Err(source) => {
                debug!(error = %source, url = %response.url(), "Failed to decode Mollie response");
                Err(Error::Decode {
                    source,
                    response: Box::new(response),
                })
            }
        }
    }
}
