use std::collections::HashMap;
use std::ops::Deref;

use reqwest::header::HeaderMap;
use serde::Deserialize;

/// Conventional Cexplorer response body: API-level status in `code`, the
/// resource payload in `data`, plus accounting fields.
///
/// The API reports its own failures through `code` (mirroring the HTTP
/// status) instead of relying on the transport status line, which is why
/// the pipeline hands non-200 bodies back to the caller undisturbed.
#[derive(Clone, Debug, Deserialize)]
pub struct ResponseCore<T> {
    /// API-level status code, mirroring HTTP semantics (200 on success).
    #[serde(default)]
    pub code: u16,
    /// Resource payload; `None`-capable types survive error bodies where
    /// `data` is `null`.
    pub data: T,
    /// Request tokens charged against the API key.
    #[serde(default)]
    pub tokens: Option<u64>,
    /// Server-side execution time.
    #[serde(default)]
    pub ex: Option<f64>,
    #[serde(default)]
    pub debug: Option<bool>,
}

/// Decoded response body plus pipeline bookkeeping.
///
/// `prev_offset` echoes the offset the caller passed into the request,
/// present on every result (as `None` when the caller passed none) so
/// pagination state round-trips regardless of what the payload contains.
#[derive(Clone, Debug)]
pub struct Envelope<T> {
    /// The decoded JSON body.
    pub payload: T,
    /// The pagination offset supplied by the caller, echoed back.
    pub prev_offset: Option<u64>,
    /// Response headers flattened to a name → value map.
    pub response_headers: HashMap<String, String>,
}

impl<T> Deref for Envelope<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.payload
    }
}

impl<T> Envelope<T> {
    /// Consumes the envelope, returning the decoded payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// Flattens response headers into owned strings. Non-UTF-8 header bytes
/// are replaced lossily; duplicate names keep the last value seen.
pub(crate) fn flatten_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, HeaderValue};

    use super::{ResponseCore, flatten_headers};

    #[test]
    fn error_body_with_null_data_decodes() {
        let core: ResponseCore<Option<serde_json::Value>> =
            serde_json::from_str(r#"{"code":404,"data":null}"#).expect("decodes");
        assert_eq!(core.code, 404);
        assert!(core.data.is_none());
        assert_eq!(core.tokens, None);
    }

    #[test]
    fn headers_flatten_to_string_map() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("x-total-count", HeaderValue::from_static("128"));

        let flat = flatten_headers(&headers);
        assert_eq!(flat.get("content-type").map(String::as_str), Some("application/json"));
        assert_eq!(flat.get("x-total-count").map(String::as_str), Some("128"));
    }
}
