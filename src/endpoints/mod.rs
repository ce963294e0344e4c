//! Typed per-resource wrappers over the request pipeline.
//!
//! Each method maps a parameter struct onto a fixed API path and a query
//! bag, then calls [`CexplorerClient::fetch`](crate::CexplorerClient::fetch).
//! List endpoints pass their resolved offset as `prev_offset` so it comes
//! back in the envelope.

pub mod account;
pub mod address;
pub mod analytics;
pub mod asset;
pub mod block;
pub mod drep;
pub mod governance;
pub mod misc;
pub mod policy;
pub mod pool;
pub mod tool;
pub mod tx;

use std::fmt;

use crate::ClientError;
use crate::envelope::{Envelope, ResponseCore};
use crate::query::QueryPairs;

/// Result shape shared by every endpoint method.
pub type ApiResult<T> = Result<Envelope<ResponseCore<T>>, ClientError>;

/// Pagination window common to list endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct Paging {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl Paging {
    /// Serializes `limit`/`offset` with the endpoint's default page size
    /// and returns the resolved offset for envelope echoing.
    pub(crate) fn apply(self, query: &mut QueryPairs, default_limit: u32) -> u64 {
        let offset = self.offset.unwrap_or(0);
        query.push("limit", self.limit.unwrap_or(default_limit));
        query.push("offset", offset);
        offset
    }
}

/// Sort direction accepted by list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Paging, SortOrder};
    use crate::query::QueryPairs;

    #[test]
    fn paging_defaults_apply_per_endpoint() {
        let mut query = QueryPairs::new();
        let offset = Paging::default().apply(&mut query, 20);
        assert_eq!(offset, 0);
        assert_eq!(query.to_query_string().as_deref(), Some("limit=20&offset=0"));
    }

    #[test]
    fn explicit_paging_overrides_defaults() {
        let mut query = QueryPairs::new();
        let paging = Paging {
            limit: Some(5),
            offset: Some(40),
        };
        let offset = paging.apply(&mut query, 20);
        assert_eq!(offset, 40);
        assert_eq!(query.to_query_string().as_deref(), Some("limit=5&offset=40"));
    }

    #[test]
    fn sort_order_serializes_lowercase() {
        assert_eq!(SortOrder::Asc.to_string(), "asc");
        assert_eq!(SortOrder::default().to_string(), "desc");
    }
}
