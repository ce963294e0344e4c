use std::future::Future;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};

use crate::ClientError;

/// One fully resolved HTTP attempt, ready to send.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub url: Url,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Raw outcome of one attempt, before JSON decoding.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Seam between the request pipeline and the wire.
///
/// The pipeline applies its timeout around [`execute`](Self::execute), so
/// implementations should not add their own. Implementations outside this
/// crate can wrap foreign failures in [`ClientError::Unknown`].
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, ClientError>> + Send;
}

/// Production transport backed by a shared [`reqwest::Client`].
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, ClientError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

/// Races one attempt against a timer.
///
/// Exactly one side settles the attempt: either the transport result
/// (success or failure) arrives inside the window, or the timer fires and
/// the in-flight future is dropped, surfacing [`ClientError::Timeout`].
pub(crate) async fn fetch_with_timeout<T: Transport>(
    transport: &T,
    request: TransportRequest,
    timeout_ms: u64,
) -> Result<TransportResponse, ClientError> {
    let window = Duration::from_millis(timeout_ms);
    match tokio::time::timeout(window, transport.execute(request)).await {
        Ok(settled) => settled,
        Err(_) => Err(ClientError::Timeout { timeout_ms }),
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use reqwest::{Method, Url, header::HeaderMap};

    use super::{Transport, TransportRequest, TransportResponse, fetch_with_timeout};
    use crate::ClientError;

    struct NeverSettles;

    impl Transport for NeverSettles {
        fn execute(
            &self,
            _request: TransportRequest,
        ) -> impl Future<Output = Result<TransportResponse, ClientError>> + Send {
            std::future::pending()
        }
    }

    fn request() -> TransportRequest {
        TransportRequest {
            url: Url::parse("https://api-preview-stage.cexplorer.io/v1/misc/basic")
                .expect("valid url"),
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn timer_settles_a_hung_attempt() {
        let started = tokio::time::Instant::now();
        let outcome = fetch_with_timeout(&NeverSettles, request(), 50).await;

        let elapsed = started.elapsed();
        assert!(elapsed >= std::time::Duration::from_millis(50), "fired early: {elapsed:?}");
        assert!(elapsed < std::time::Duration::from_millis(150), "fired late: {elapsed:?}");
        match outcome {
            Err(ClientError::Timeout { timeout_ms }) => assert_eq!(timeout_ms, 50),
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
