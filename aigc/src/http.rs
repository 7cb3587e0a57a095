//! HTTP plumbing shared by all AIGC API services.
//!
//! Every operation funnels through [`HttpClient::post`] and the response
//! handling in [`normalize`], so all of them fail with the same error shape
//! regardless of how the backend chose to signal the failure.

use std::time::Duration;

use reqwest::Client as ReqwestClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Message extractors tried in order; the first non-empty string wins.
const MESSAGE_SOURCES: &[fn(&Value) -> Option<&str>] = &[
    |body| {
        body.pointer("/ResponseMetadata/Error/Message")
            .and_then(Value::as_str)
    },
    |body| body.get("message").and_then(Value::as_str),
    |body| body.get("error").and_then(Value::as_str),
];

/// HTTP client for the AIGC API.
#[derive(Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs a JSON body and normalizes the response.
    ///
    /// `action` becomes an `Action` query parameter when present. The request
    /// is built fresh on every call; nothing is retried or cached.
    pub async fn post<T>(
        &self,
        path: &str,
        action: Option<&str>,
        api_key: Option<&str>,
        body: &T,
    ) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .post(&url)
            .headers(build_headers(api_key))
            .json(body);

        if let Some(action) = action {
            request = request.query(&[("Action", action)]);
        }

        debug!(%url, action = action.unwrap_or(""), "sending AIGC request");

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        normalize(status, &bytes)
    }
}

/// Builds the headers for one request.
///
/// `Content-Type: application/json` is always present; `X-API-Key` only when
/// a non-empty key is supplied. A key that cannot be encoded as a header
/// value is treated as absent.
pub fn build_headers(api_key: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        if let Ok(value) = HeaderValue::from_str(key) {
            headers.insert(API_KEY_HEADER, value);
        }
    }

    headers
}

/// Collapses transport status and the application error envelope into one
/// success-or-error outcome.
///
/// An unparseable body counts as an empty object, so a 2xx response with a
/// garbage payload still succeeds (with `{}` as the payload), while a non-2xx
/// response with a garbage payload falls back to the status-code message.
/// A truthy `ResponseMetadata.Error` field marks even a 2xx response as
/// failed.
pub(crate) fn normalize(status: u16, body: &[u8]) -> Result<Value> {
    let data: Value =
        serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()));

    let transport_ok = (200..300).contains(&status);
    if transport_ok && !is_truthy(data.pointer("/ResponseMetadata/Error")) {
        return Ok(data);
    }

    let message = MESSAGE_SOURCES
        .iter()
        .filter_map(|extract| extract(&data))
        .find(|m| !m.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("HTTP error {status}"));

    Err(Error::api(message, status, data))
}

// The original wire contract treats the envelope field as a loose boolean:
// null, false, 0 and "" all mean "no error".
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
