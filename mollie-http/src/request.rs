//! Request builder.

use crate::{HttpClient, HttpClientError, Response, Result};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;

/// HTTP request builder.
///
/// Builder errors (an unencodable body or query struct) are held back and
/// returned from [`RequestBuilder::send`], so chaining never panics.
pub struct RequestBuilder<'a> {
    client: &'a HttpClient,
    method: Method,
    url: String,
    segments: Vec<String>,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
    error: Option<HttpClientError>,
}

impl<'a> RequestBuilder<'a> {
    /// Create a new request builder.
    pub(crate) fn new(client: &'a HttpClient, method: Method, url: String) -> Self {
        Self {
            client,
            method,
            url,
            segments: Vec::new(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            timeout: None,
            error: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Append path segments to the request URL.
    ///
    /// Each segment is percent-encoded on its own, so `/`, `?` and `#` inside
    /// a segment stay part of it. Empty, `.` and `..` segments are rejected
    /// when the request is sent.
    pub fn segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for segment in segments {
            let segment = segment.into();
            if matches!(segment.as_str(), "" | "." | "..") && self.error.is_none() {
                self.error = Some(HttpClientError::InvalidPathSegment(segment.clone()));
            }
            self.segments.push(segment);
        }
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add every field of a serializable struct as query parameters.
    ///
    /// Fields skipped by serde (e.g. `None` with `skip_serializing_if`) are
    /// left out of the query string entirely.
    pub fn query_struct<T: Serialize + ?Sized>(mut self, params: &T) -> Self {
        let encoded = serde_urlencoded::to_string(params)
            .map_err(|e| HttpClientError::Encode(e.to_string()))
            .and_then(|encoded| {
                serde_urlencoded::from_str::<Vec<(String, String)>>(&encoded)
                    .map_err(|e| HttpClientError::Encode(e.to_string()))
            });
        match encoded {
            Ok(pairs) => self.query.extend(pairs),
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, json: &T) -> Self {
        match serde_json::to_vec(json) {
            Ok(bytes) => {
                self.headers.insert(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                );
                self.body = Some(bytes);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize JSON body");
                self.error = Some(HttpClientError::Encode(e.to_string()));
            }
        }
        self
    }

    /// Set a custom timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the URL with path segments and query parameters.
    fn build_url(&self) -> Result<url::Url> {
        let mut url = match self.client.base_url() {
            Some(base) => base.join(&self.url)?,
            None => url::Url::parse(&self.url)?,
        };

        if !self.segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| HttpClientError::InvalidUrl("URL cannot have path segments".to_string()))?
                .pop_if_empty()
                .extend(&self.segments);
        }

        if !self.query.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Send the request.
    pub async fn send(self) -> Result<Response> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let url = self.build_url()?;
        let config = self.client.config();

        let mut request = self.client.inner().request(self.method.clone(), url);

        if let Some(token) = &config.bearer_token {
            request = request.bearer_auth(token.expose_secret());
        }

        for (name, value) in &config.default_headers {
            request = request.header(name.as_str(), value.as_str());
        }

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        if let Some(body) = self.body {
            request = request.body(body);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        self.client.execute(request.build()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HttpClientConfig;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Params {
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    }

    fn client() -> HttpClient {
        HttpClient::new(
            HttpClientConfig::builder()
                .base_url("https://api.mollie.com/v2/")
                .build(),
        )
        .unwrap()
    }

    #[test]
    fn test_relative_path_joins_base() {
        let client = client();
        let url = client.get("payments/tr_123").build_url().unwrap();
        assert_eq!(url.as_str(), "https://api.mollie.com/v2/payments/tr_123");
    }

    #[test]
    fn test_segments_are_encoded_one_by_one() {
        let client = client();
        let url = client
            .delete("")
            .segments(["payments", "../customers/cst_victim", "refunds", "re_1"])
            .build_url()
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.mollie.com/v2/payments/..%2Fcustomers%2Fcst_victim/refunds/re_1"
        );
    }

    #[test]
    fn test_segment_cannot_add_query_or_fragment() {
        let client = client();
        let url = client
            .get("")
            .segments(["payments", "tr_1?testmode=true#x"])
            .build_url()
            .unwrap();
        assert_eq!(url.path(), "/v2/payments/tr_1%3Ftestmode=true%23x");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_segments_keep_query_params() {
        let client = client();
        let url = client
            .get("")
            .segments(["orders", "ord_1"])
            .query("embed", "payments")
            .build_url()
            .unwrap();
        assert_eq!(url.as_str(), "https://api.mollie.com/v2/orders/ord_1?embed=payments");
    }

    #[tokio::test]
    async fn test_dot_and_empty_segments_are_rejected() {
        let client = client();
        for bad in ["", ".", ".."] {
            let err = client.get("").segments(["payments", bad]).send().await.unwrap_err();
            assert!(matches!(err, HttpClientError::InvalidPathSegment(ref s) if s == bad));
        }
    }

    #[test]
    fn test_unparseable_url_without_base() {
        let client = HttpClient::new(HttpClientConfig::default()).unwrap();
        let err = client.get("not a url").build_url().unwrap_err();
        assert!(matches!(err, HttpClientError::UrlParse(_)));
    }

    #[test]
    fn test_query_struct_skips_unset_fields() {
        let client = client();
        let params = Params {
            from: None,
            limit: Some(5),
        };
        let url = client.get("payments").query_struct(&params).build_url().unwrap();
        assert_eq!(url.as_str(), "https://api.mollie.com/v2/payments?limit=5");
    }

    #[test]
    fn test_query_struct_all_fields() {
        let client = client();
        let params = Params {
            from: Some("tr_abc".to_string()),
            limit: Some(1),
        };
        let url = client.get("orders").query_struct(&params).build_url().unwrap();
        assert_eq!(url.query(), Some("from=tr_abc&limit=1"));
    }

    #[test]
    fn test_json_sets_content_type() {
        let client = client();
        let builder = client.post("payments").json(&serde_json::json!({"a": 1}));
        assert_eq!(
            builder.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(builder.body.as_deref(), Some(br#"{"a":1}"#.as_slice()));
    }
}
