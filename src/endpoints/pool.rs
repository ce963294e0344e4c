use std::fmt;

use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::{ApiResult, Paging, SortOrder};
use crate::models::{PagedData, PoolListItem};
use crate::query::QueryPairs;
use crate::transport::Transport;

/// Ranking column for [`CexplorerClient::pools_list`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PoolOrder {
    #[default]
    Ranking,
    LiveStake,
    ActiveStake,
    Delegators,
    Blocks,
    Pledge,
}

impl PoolOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ranking => "ranking",
            Self::LiveStake => "live_stake",
            Self::ActiveStake => "active_stake",
            Self::Delegators => "delegators",
            Self::Blocks => "blocks",
            Self::Pledge => "pledge",
        }
    }
}

impl fmt::Display for PoolOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for [`CexplorerClient::pools_list`].
#[derive(Clone, Debug, Default)]
pub struct PoolListParams {
    pub paging: Paging,
    pub sort: Option<SortOrder>,
    pub order: Option<PoolOrder>,
    /// Ticker or name substring.
    pub name: Option<String>,
    pub pool_id: Option<String>,
    pub watchlist_only: bool,
    pub gov_action: Option<String>,
    pub is_drep: Option<bool>,
    pub is_not_drep: Option<bool>,
    pub user_token: Option<String>,
}

impl<T: Transport> CexplorerClient<T> {
    /// Lists stake pools ranked by the requested column.
    pub async fn pools_list(&self, params: PoolListParams) -> ApiResult<PagedData<PoolListItem>> {
        let mut query = QueryPairs::new();
        let offset = params.paging.apply(&mut query, 20);
        query.push("sort", params.sort.unwrap_or_default());
        query.push("order", params.order.unwrap_or_default());
        query.push_opt("name", params.name);
        query.push_opt("pool_id", params.pool_id);
        query.push_opt("watchlist_only", params.watchlist_only.then_some("1"));
        query.push_opt("gov_action", params.gov_action);
        query.push_opt("is_drep", params.is_drep);
        query.push_opt("is_not_drep", params.is_not_drep);

        let mut options = RequestOptions::get(query);
        if let Some(token) = &params.user_token {
            options = options.with_user_token(token)?;
        }

        self.fetch("/pool/list", Some(offset), options).await
    }

    /// Fetches one pool's full detail record.
    pub async fn pool_detail(&self, pool_id: &str, hash_raw: Option<bool>) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("pool_id", pool_id);
        query.push_opt("hash_raw", hash_raw);

        self.fetch("/pool/detail", None, RequestOptions::get(query))
            .await
    }

    /// Lists blocks minted by one pool.
    pub async fn pool_blocks(&self, pool_id: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("pool_id", pool_id);

        self.fetch("/pool/block", None, RequestOptions::get(query))
            .await
    }

    /// Lists accounts delegating to one pool.
    pub async fn pool_delegators(&self, pool_id: &str, paging: Paging) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);
        query.push("pool_id", pool_id);

        self.fetch("/pool/delegator", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Delegator count distribution for one pool.
    pub async fn pool_delegator_stats(&self, pool_id: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("pool_id", pool_id);

        self.fetch("/pool/delegator_stats", None, RequestOptions::get(query))
            .await
    }

    /// Lists rewards paid out by pools, optionally filtered by pool.
    pub async fn pool_reward(
        &self,
        pool_id: Option<&str>,
        name: Option<&str>,
        paging: Paging,
    ) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);
        query.push_opt("name", name);
        query.push_opt("pool_id", pool_id);

        self.fetch("/pool/reward", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Lists registration certificate updates for one pool.
    pub async fn pool_update(&self, pool_id: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("pool_id", pool_id);

        self.fetch("/pool/update", None, RequestOptions::get(query))
            .await
    }

    /// Lists awards earned by one pool.
    pub async fn pool_awards(&self, pool_id: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("pool_id", pool_id);

        self.fetch("/pool/award", None, RequestOptions::get(query))
            .await
    }

    /// Lists awards across all pools.
    pub async fn global_pool_awards(&self, paging: Paging) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);

        self.fetch("/pool/award", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Fetches one pool's extended profile text.
    pub async fn pool_about(&self, pool_id: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("pool_id", pool_id);

        self.fetch("/pool/about", None, RequestOptions::get(query))
            .await
    }

    /// Fetches one pool's registration anniversary data.
    pub async fn pool_birthdays(&self, pool_id: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("pool_id", pool_id);

        self.fetch("/pool/birthday", None, RequestOptions::get(query))
            .await
    }
}
