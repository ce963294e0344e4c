use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::{ApiResult, Paging};
use crate::models::{AccountReward, PagedData};
use crate::query::QueryPairs;
use crate::transport::Transport;

impl<T: Transport> CexplorerClient<T> {
    /// Lists staking rewards earned by one stake account.
    pub async fn account_rewards(
        &self,
        view: &str,
        paging: Paging,
    ) -> ApiResult<PagedData<AccountReward>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);
        query.push("view", view);

        self.fetch("/account/reward", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Checks whether a stake account has an active delegation.
    pub async fn check_delegation(&self, view: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("view", view);

        self.fetch("/account/has_delegation", None, RequestOptions::get(query))
            .await
    }

    /// Lists reward withdrawals made by one stake account.
    pub async fn withdrawals(&self, view: &str, paging: Paging) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);
        query.push("view", view);

        self.fetch("/account/withdrawal", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Lists governance vote delegations.
    pub async fn delegation_vote(&self, paging: Paging) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);

        self.fetch(
            "/account/delegation_vote",
            Some(offset),
            RequestOptions::get(query),
        )
        .await
    }
}
