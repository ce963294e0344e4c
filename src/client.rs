use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::ClientError;
use crate::config::{ClientConfig, ConfigStore, ConfigUpdate};
use crate::envelope::{Envelope, flatten_headers};
use crate::query::{QueryPairs, build_url};
use crate::transport::{HttpTransport, Transport, TransportRequest, fetch_with_timeout};

/// Timeout window applied to each attempt unless overridden.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Retries after the initial attempt, so up to three attempts in total.
pub const DEFAULT_RETRY_COUNT: u32 = 2;

/// Per-request overrides for the pipeline.
///
/// Endpoints mostly set `params` only; non-GET calls override `method`
/// and `body`, and user-scoped endpoints add a `usertoken` header.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    pub params: QueryPairs,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    /// Attempt timeout in milliseconds; [`DEFAULT_TIMEOUT_MS`] when unset.
    pub timeout_ms: Option<u64>,
    /// Retries after the first attempt; [`DEFAULT_RETRY_COUNT`] when unset.
    pub retry_count: Option<u32>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            params: QueryPairs::new(),
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
            timeout_ms: None,
            retry_count: None,
        }
    }
}

impl RequestOptions {
    /// A GET request carrying only query parameters.
    pub fn get(params: QueryPairs) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Attaches a `usertoken` header for user-scoped endpoints.
    pub fn with_user_token(mut self, token: &str) -> Result<Self, ClientError> {
        let value = HeaderValue::from_str(token)
            .map_err(|_| ClientError::Unknown("user token is not a valid header value".into()))?;
        self.headers.insert(HeaderName::from_static("usertoken"), value);
        Ok(self)
    }
}

/// Client for the Cexplorer REST API.
///
/// Owns the active configuration; cloning shares it, so one configured
/// client can be handed around the application. Every endpoint method
/// funnels through [`fetch`](Self::fetch), which implements the shared
/// request pipeline: config read, URL construction, a timeout-bounded
/// attempt loop with immediate retries, and envelope normalization.
///
/// A deliberate asymmetry to be aware of: transport-level failures
/// (timeout, connection, undecodable body) are retried and ultimately
/// returned as `Err`, while API-level failures (a non-200 status with a
/// valid JSON body) come back as `Ok`, carrying their status in the
/// body's own `code` field. Callers are expected to inspect it.
#[derive(Clone, Debug)]
pub struct CexplorerClient<T: Transport = HttpTransport> {
    config: Arc<ConfigStore>,
    transport: T,
}

impl CexplorerClient {
    /// Creates a client over the production HTTP transport.
    ///
    /// The configuration must name a network; an API key, when given,
    /// must be non-empty.
    pub fn new(config: ConfigUpdate) -> Result<Self, ClientError> {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> CexplorerClient<T> {
    /// Creates a client over a custom transport implementation.
    pub fn with_transport(config: ConfigUpdate, transport: T) -> Result<Self, ClientError> {
        let store = ConfigStore::new();
        store.init(config)?;
        Ok(Self {
            config: Arc::new(store),
            transport,
        })
    }

    /// Merges additional configuration into the shared store.
    pub fn configure(&self, update: ConfigUpdate) -> Result<(), ClientError> {
        self.config.init(update)
    }

    /// Returns the currently resolved configuration.
    pub fn config(&self) -> Result<ClientConfig, ClientError> {
        self.config.get()
    }

    /// Sends one logical request through the pipeline.
    ///
    /// `prev_offset` is echoed back in the envelope untouched, so list
    /// callers can keep pagination state without re-deriving it from the
    /// payload.
    pub async fn fetch<P: DeserializeOwned>(
        &self,
        path: &str,
        prev_offset: Option<u64>,
        options: RequestOptions,
    ) -> Result<Envelope<P>, ClientError> {
        let config = self.config.get()?;
        let url = build_url(config.network, path, &options.params)?;
        let timeout_ms = options.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
        let retry_count = options.retry_count.unwrap_or(DEFAULT_RETRY_COUNT);

        let mut headers = options.headers;
        if let Some(api_key) = &config.api_key {
            let value =
                HeaderValue::from_str(api_key).map_err(|_| ClientError::InvalidApiKey)?;
            headers.insert(HeaderName::from_static("apikey"), value);
        }

        for attempt in 0..=retry_count {
            let request = TransportRequest {
                url: url.clone(),
                method: options.method.clone(),
                headers: headers.clone(),
                body: options.body.clone(),
            };

            match self.attempt(request, timeout_ms, prev_offset).await {
                Ok(envelope) => return Ok(envelope),
                Err(error) if attempt < retry_count => {
                    tracing::warn!(attempt, url = %url, error = %error, "attempt failed; retrying");
                }
                Err(error) => {
                    tracing::error!(attempt, url = %url, error = %error, "request failed; retries exhausted");
                    return Err(error);
                }
            }
        }

        // Unreachable: the final iteration always returns above.
        Err(ClientError::RetriesExhausted)
    }

    async fn attempt<P: DeserializeOwned>(
        &self,
        request: TransportRequest,
        timeout_ms: u64,
        prev_offset: Option<u64>,
    ) -> Result<Envelope<P>, ClientError> {
        let response = fetch_with_timeout(&self.transport, request, timeout_ms).await?;
        let payload: P = serde_json::from_slice(&response.body)?;

        if response.status != StatusCode::OK {
            tracing::debug!(
                status = response.status.as_u16(),
                "non-200 status; decoded body returned to caller"
            );
        }

        Ok(Envelope {
            payload,
            prev_offset,
            response_headers: flatten_headers(&response.headers),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use reqwest::StatusCode;
    use reqwest::header::{HeaderMap, HeaderValue};
    use serde_json::Value;

    use super::{CexplorerClient, RequestOptions};
    use crate::config::ConfigUpdate;
    use crate::envelope::ResponseCore;
    use crate::transport::{Transport, TransportRequest, TransportResponse};
    use crate::{ClientError, Network};

    /// Fails the first `failures` attempts, then answers with a fixed
    /// status and body. Counts every attempt it sees.
    #[derive(Clone, Debug)]
    struct ScriptedTransport {
        calls: Arc<AtomicUsize>,
        failures: usize,
        status: StatusCode,
        body: &'static str,
    }

    impl ScriptedTransport {
        fn new(failures: usize, status: StatusCode, body: &'static str) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                failures,
                status,
                body,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Transport for ScriptedTransport {
        async fn execute(
            &self,
            _request: TransportRequest,
        ) -> Result<TransportResponse, ClientError> {
            let attempt = self.calls.fetch_add(1, Ordering::SeqCst);
            if attempt < self.failures {
                return Err(ClientError::Unknown("simulated connection reset".into()));
            }
            let mut headers = HeaderMap::new();
            headers.insert("x-total-count", HeaderValue::from_static("3"));
            Ok(TransportResponse {
                status: self.status,
                headers,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    /// Records every request it receives and answers 200 with a fixed body.
    #[derive(Clone, Default)]
    struct CapturingTransport {
        seen: Arc<Mutex<Vec<TransportRequest>>>,
    }

    impl CapturingTransport {
        fn requests(&self) -> Vec<TransportRequest> {
            self.seen.lock().expect("not poisoned").clone()
        }
    }

    impl Transport for CapturingTransport {
        async fn execute(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, ClientError> {
            self.seen.lock().expect("not poisoned").push(request);
            Ok(TransportResponse {
                status: StatusCode::OK,
                headers: HeaderMap::new(),
                body: OK_BODY.as_bytes().to_vec(),
            })
        }
    }

    fn client(transport: ScriptedTransport) -> CexplorerClient<ScriptedTransport> {
        CexplorerClient::with_transport(ConfigUpdate::network(Network::PreviewStage), transport)
            .expect("valid config")
    }

    const OK_BODY: &str = r#"{"code":200,"data":{"count":1},"tokens":1,"ex":0.01,"debug":false}"#;

    #[tokio::test]
    async fn succeeds_on_third_attempt_with_default_retries() {
        let transport = ScriptedTransport::new(2, StatusCode::OK, OK_BODY);
        let client = client(transport.clone());

        let envelope = client
            .fetch::<ResponseCore<Value>>("/block/list", None, RequestOptions::default())
            .await
            .expect("third attempt succeeds");

        assert_eq!(transport.calls(), 3);
        assert_eq!(envelope.code, 200);
    }

    #[tokio::test]
    async fn exhaustion_surfaces_the_last_error_after_three_attempts() {
        let transport = ScriptedTransport::new(usize::MAX, StatusCode::OK, OK_BODY);
        let client = client(transport.clone());

        let error = client
            .fetch::<Value>("/block/list", None, RequestOptions::default())
            .await
            .expect_err("never succeeds");

        assert_eq!(transport.calls(), 3);
        assert!(matches!(error, ClientError::Unknown(_)), "got {error}");
    }

    #[tokio::test]
    async fn zero_retry_count_makes_exactly_one_attempt() {
        let transport = ScriptedTransport::new(usize::MAX, StatusCode::OK, OK_BODY);
        let client = client(transport.clone());

        let options = RequestOptions {
            retry_count: Some(0),
            ..RequestOptions::default()
        };
        let _ = client.fetch::<Value>("/block/list", None, options).await;

        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn undecodable_body_is_retried_like_a_transport_failure() {
        let transport = ScriptedTransport::new(0, StatusCode::OK, "not json");
        let client = client(transport.clone());

        let error = client
            .fetch::<Value>("/misc/basic", None, RequestOptions::default())
            .await
            .expect_err("body never decodes");

        assert_eq!(transport.calls(), 3);
        assert!(matches!(error, ClientError::Decode(_)), "got {error}");
    }

    #[tokio::test]
    async fn non_200_with_valid_body_resolves_with_merged_envelope() {
        let transport =
            ScriptedTransport::new(0, StatusCode::NOT_FOUND, r#"{"code":404,"data":null}"#);
        let client = client(transport.clone());

        let envelope = client
            .fetch::<ResponseCore<Option<Value>>>("/block/detail", Some(0), RequestOptions::default())
            .await
            .expect("API-level failure is returned, not thrown");

        assert_eq!(transport.calls(), 1);
        assert_eq!(envelope.code, 404);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.prev_offset, Some(0));
        assert_eq!(
            envelope.response_headers.get("x-total-count").map(String::as_str),
            Some("3")
        );
    }

    #[tokio::test]
    async fn prev_offset_is_echoed_back_verbatim() {
        let transport = ScriptedTransport::new(0, StatusCode::OK, OK_BODY);
        let client = client(transport);

        let envelope = client
            .fetch::<Value>("/block/list", Some(40), RequestOptions::default())
            .await
            .expect("success");

        assert_eq!(envelope.prev_offset, Some(40));
    }

    #[test]
    fn construction_without_network_fails_before_any_attempt() {
        let transport = ScriptedTransport::new(0, StatusCode::OK, OK_BODY);
        let error = CexplorerClient::with_transport(ConfigUpdate::default(), transport.clone())
            .expect_err("network is required");

        assert!(matches!(error, ClientError::MissingNetwork));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn configured_api_key_travels_as_the_apikey_header() {
        let transport = CapturingTransport::default();
        let client = CexplorerClient::with_transport(
            ConfigUpdate::network(Network::MainnetStage).with_api_key("secret"),
            transport.clone(),
        )
        .expect("valid config");

        client
            .fetch::<Value>("/misc/basic", None, RequestOptions::default())
            .await
            .expect("success");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].headers.get("apikey").map(|v| v.as_bytes()),
            Some(b"secret".as_slice())
        );
    }

    #[tokio::test]
    async fn no_api_key_means_no_apikey_header() {
        let transport = CapturingTransport::default();
        let client = CexplorerClient::with_transport(
            ConfigUpdate::network(Network::MainnetStage),
            transport.clone(),
        )
        .expect("valid config");

        client
            .fetch::<Value>("/misc/basic", None, RequestOptions::default())
            .await
            .expect("success");

        assert!(transport.requests()[0].headers.get("apikey").is_none());
    }

    #[tokio::test]
    async fn api_key_merged_after_construction_reaches_the_wire() {
        let transport = CapturingTransport::default();
        let client = CexplorerClient::with_transport(
            ConfigUpdate::network(Network::PreprodStage),
            transport.clone(),
        )
        .expect("valid config");

        client
            .configure(ConfigUpdate::default().with_api_key("merged-key"))
            .expect("merge");
        client
            .fetch::<Value>("/misc/basic", None, RequestOptions::default())
            .await
            .expect("success");

        assert_eq!(
            transport.requests()[0].headers.get("apikey").map(|v| v.as_bytes()),
            Some(b"merged-key".as_slice())
        );
    }

    #[tokio::test]
    async fn header_unsafe_api_key_fails_before_any_attempt() {
        let transport = CapturingTransport::default();
        let client = CexplorerClient::with_transport(
            ConfigUpdate::network(Network::MainnetStage).with_api_key("bad\nkey"),
            transport.clone(),
        )
        .expect("non-empty key passes init validation");

        let error = client
            .fetch::<Value>("/misc/basic", None, RequestOptions::default())
            .await
            .expect_err("newline is not header-safe");

        assert!(matches!(error, ClientError::InvalidApiKey), "got {error}");
        assert!(transport.requests().is_empty(), "no attempt should be made");
    }

    #[tokio::test]
    async fn configure_merges_an_api_key_onto_a_live_client() {
        let transport = ScriptedTransport::new(0, StatusCode::OK, OK_BODY);
        let client = client(transport);

        client
            .configure(ConfigUpdate::default().with_api_key("secret"))
            .expect("merge");

        let config = client.config().expect("configured");
        assert_eq!(config.network, Network::PreviewStage);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }
}
