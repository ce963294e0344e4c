use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::{ApiResult, Paging};
use crate::models::PagedData;
use crate::query::QueryPairs;
use crate::transport::Transport;

impl<T: Transport> CexplorerClient<T> {
    /// Fetches one minting policy by its id.
    pub async fn policy_detail(&self, id: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("id", id);

        self.fetch("/policy/detail", None, RequestOptions::get(query))
            .await
    }

    /// Fetches aggregate statistics for one minting policy.
    pub async fn policy_stats(&self, id: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("id", id);

        self.fetch("/policy/stat", None, RequestOptions::get(query))
            .await
    }

    /// Lists holders of assets under one minting policy.
    pub async fn policy_owners(&self, id: &str, paging: Paging) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);
        query.push("id", id);

        self.fetch("/policy/owner", Some(offset), RequestOptions::get(query))
            .await
    }
}
