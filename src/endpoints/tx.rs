use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::{ApiResult, Paging};
use crate::models::{PagedData, Tx};
use crate::query::QueryPairs;
use crate::transport::Transport;

/// Filters for [`CexplorerClient::tx_list`].
#[derive(Clone, Debug, Default)]
pub struct TxListParams {
    pub paging: Paging,
    pub hash: Option<String>,
    pub address: Option<String>,
    pub stake: Option<String>,
    pub asset: Option<String>,
    pub script: Option<String>,
    pub policy: Option<String>,
    pub has_donation: Option<bool>,
}

/// Pre-canned filters for the `/tx/filter` endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxFilterKind {
    DrepRegistrations,
    DrepDeregistrations,
    DrepUpdates,
    PoolRegistrations,
    PoolDeregistrations,
    StakeRegistrations,
    StakeDeregistrations,
    ContractInteractions,
}

impl TxFilterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DrepRegistrations => "drep_registrations",
            Self::DrepDeregistrations => "drep_deregistrations",
            Self::DrepUpdates => "drep_updates",
            Self::PoolRegistrations => "pool_registrations",
            Self::PoolDeregistrations => "pool_deregistrations",
            Self::StakeRegistrations => "stake_registrations",
            Self::StakeDeregistrations => "stake_deregistrations",
            Self::ContractInteractions => "contract_interactions",
        }
    }
}

impl<T: Transport> CexplorerClient<T> {
    /// Fetches one transaction by its hash.
    pub async fn tx_detail(&self, hash: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("hash", hash);

        self.fetch("/tx/detail", None, RequestOptions::get(query))
            .await
    }

    /// Lists transactions with optional filters. Page size defaults to 10.
    pub async fn tx_list(&self, params: TxListParams) -> ApiResult<PagedData<Tx>> {
        let mut query = QueryPairs::new();
        let offset = params.paging.apply(&mut query, 10);
        query.push_opt("hash", params.hash);
        query.push_opt("address", params.address);
        query.push_opt("stake", params.stake);
        query.push_opt("asset", params.asset);
        query.push_opt("script", params.script);
        query.push_opt("has_donation", params.has_donation);
        query.push_opt("policy", params.policy);

        self.fetch("/tx/list", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Lists transactions of one registration/interaction kind.
    pub async fn tx_filter(
        &self,
        kind: TxFilterKind,
        paging: Paging,
    ) -> ApiResult<PagedData<Tx>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 10);
        query.push("type", kind.as_str());

        self.fetch("/tx/filter", Some(offset), RequestOptions::get(query))
            .await
    }
}
