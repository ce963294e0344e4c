//! Rust client library for the Cexplorer blockchain explorer REST API.
//!
//! Public API layers:
//! - [`CexplorerClient`]: configured client owning the network/API-key
//!   pair; all endpoint methods hang off it.
//! - [`endpoints`]: typed per-resource methods (blocks, transactions,
//!   addresses, pools, assets, governance, analytics, misc).
//! - [`Envelope`]/[`ResponseCore`]: decoded response body plus pipeline
//!   bookkeeping (`prev_offset`, `response_headers`).
//! - [`ClientError`]: unified error type used by all operations.
//!
//! Every call runs through one shared pipeline: resolve the configured
//! [`Network`] to its base URL, serialize a [`QueryPairs`] bag, race each
//! attempt against a 30-second timeout, and retry transport-level
//! failures immediately up to two more times.
//!
//! One contract worth calling out: a non-200 HTTP status with a valid
//! JSON body is **not** an error here. The API reports failures through
//! the body's `code` field, so such responses come back as `Ok` and the
//! caller inspects `code`. Only transport-level failures (timeouts,
//! connection errors, undecodable bodies) surface as `Err`.

mod client;
mod config;
mod envelope;
mod error;
mod network;
mod query;
mod transport;

pub mod endpoints;
pub mod models;

/// Configured API client; start here.
pub use client::{CexplorerClient, DEFAULT_RETRY_COUNT, DEFAULT_TIMEOUT_MS, RequestOptions};
/// Configuration lifecycle types.
pub use config::{ClientConfig, ConfigStore, ConfigUpdate};
/// Response envelope types shared by all endpoints.
pub use envelope::{Envelope, ResponseCore};
/// Error type returned by all client operations.
pub use error::ClientError;
/// Deployment stage selector.
pub use network::Network;
/// Ordered query parameter bag.
pub use query::QueryPairs;
/// Transport seam and the production HTTP implementation.
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
