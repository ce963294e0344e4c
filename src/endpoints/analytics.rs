use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::{ApiResult, Paging};
use crate::models::PagedData;
use crate::query::QueryPairs;
use crate::transport::Transport;

// Metric columns requested from the epoch/rate analytics endpoints; the
// server only computes what is asked for.
const EPOCH_DISPLAY: &str = "sum_fee,count_tx,avg_tx_fee,block_version,tx_composition,\
max_block_tx_count,count_block,count_tx_out,avg_block_size,max_block_size,\
count_tx_out_address,count_tx_out_stake,count_tx_out_address_not_yesterday,\
count_tx_out_stake_not_yesterday";

const RATE_DISPLAY: &str = "sum_fee,count_tx,avg_tx_fee,block_version,tx_composition,\
max_block_tx_count,count_tx_out,count_block,avg_block_size,max_block_size,\
count_tx_out_address,count_tx_out_stake,count_tx_out_address_not_yesterday,\
count_tx_out_stake_not_yesterday,count_pool_relay_uniq,count_pool";

impl<T: Transport> CexplorerClient<T> {
    /// Lists protocol hardforks.
    pub async fn hardforks(&self) -> ApiResult<Value> {
        self.fetch("/analytics/hardforks", None, RequestOptions::default())
            .await
    }

    /// Fetches per-epoch chain metrics.
    pub async fn epoch_analytics(&self) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("display", EPOCH_DISPLAY);

        self.fetch("/analytics/epoch", None, RequestOptions::get(query))
            .await
    }

    /// Fetches current chain throughput metrics.
    pub async fn analytics_rate(&self) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("display", RATE_DISPLAY);

        self.fetch("/analytics/rate", None, RequestOptions::get(query))
            .await
    }

    /// Fetches block production per pool for one epoch.
    pub async fn pool_block_analytics(&self, epoch_no: u32) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("epoch_no", epoch_no);

        self.fetch("/analytics/pool_block", None, RequestOptions::get(query))
            .await
    }

    /// Lists the largest staking accounts.
    pub async fn staking_accounts(&self, paging: Paging) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);

        self.fetch("/analytics/top_account", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Lists the richest addresses.
    pub async fn top_addresses(&self, paging: Paging) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);

        self.fetch("/analytics/top_address", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Lists top pools by the given ranking type.
    pub async fn top_pools(&self, ranking: Option<&str>, paging: Paging) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);
        query.push_opt("type", ranking);

        self.fetch("/analytics/top_pool", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Fetches the ada distribution across wealth bands.
    pub async fn wealth_composition(&self) -> ApiResult<Value> {
        self.fetch("/analytics/wealth", None, RequestOptions::default())
            .await
    }

    /// Fetches treasury/reserve pot balances.
    pub async fn ada_pots(&self) -> ApiResult<Value> {
        self.fetch("/analytics/ada_pot", None, RequestOptions::default())
            .await
    }

    /// Lists curated entity groups.
    pub async fn group_list(&self) -> ApiResult<Value> {
        self.fetch("/analytics/group_list", None, RequestOptions::default())
            .await
    }

    /// Fetches one curated entity group.
    pub async fn group_detail(&self, id: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("id", id);

        self.fetch("/analytics/group_detail", None, RequestOptions::get(query))
            .await
    }

    /// Fetches average pool composition metrics.
    pub async fn average_pool(&self) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("type", "avg_num_per_pool");

        self.fetch("/analytics/avg_pool", None, RequestOptions::get(query))
            .await
    }

    /// Lists genesis-era addresses still holding funds.
    pub async fn genesis_addr(&self) -> ApiResult<Value> {
        self.fetch("/analytics/genesis_addr", None, RequestOptions::default())
            .await
    }
}
