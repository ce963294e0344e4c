use std::fmt;

use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::{ApiResult, Paging, SortOrder};
use crate::models::PagedData;
use crate::query::QueryPairs;
use crate::transport::Transport;

/// Governance role casting a vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoterRole {
    Drep,
    Spo,
}

impl VoterRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drep => "DRep",
            Self::Spo => "SPO",
        }
    }
}

impl fmt::Display for VoterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranking column for [`CexplorerClient::drep_delegators`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrepDelegatorOrder {
    #[default]
    LiveStake,
    SlotUpdate,
}

impl DrepDelegatorOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LiveStake => "live_stake",
            Self::SlotUpdate => "slot_update",
        }
    }
}

impl fmt::Display for DrepDelegatorOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delegator subset for [`CexplorerClient::drep_delegators`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrepDelegatorFilter {
    /// Currently delegating accounts.
    Live,
    /// Accounts that moved their delegation.
    Migrations,
}

impl DrepDelegatorFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Migrations => "migrations",
        }
    }
}

impl fmt::Display for DrepDelegatorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for [`CexplorerClient::drep_list`].
#[derive(Clone, Debug, Default)]
pub struct DrepListParams {
    pub paging: Paging,
    /// DRep view identifier to filter by.
    pub view: Option<String>,
    pub sort: Option<SortOrder>,
    /// Ranking column; server-defined set, passed through verbatim.
    pub order: Option<String>,
    pub gov_action: Option<String>,
    pub is_spo: Option<bool>,
    pub is_not_spo: Option<bool>,
    pub watchlist_only: bool,
    pub user_token: Option<String>,
}

impl<T: Transport> CexplorerClient<T> {
    /// Lists delegated representatives. Page size defaults to 10.
    pub async fn drep_list(&self, params: DrepListParams) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = params.paging.apply(&mut query, 10);
        query.push_opt("sort", params.sort);
        query.push_opt("order", params.order);
        query.push_opt("view", params.view);
        query.push_opt("watchlist_only", params.watchlist_only.then_some("1"));
        query.push_opt("gov_action", params.gov_action);
        query.push_opt("is_spo", params.is_spo);
        query.push_opt("is_not_spo", params.is_not_spo);

        let mut options = RequestOptions::get(query);
        if let Some(token) = &params.user_token {
            options = options.with_user_token(token)?;
        }

        self.fetch("/gov/drep_list", Some(offset), options).await
    }

    /// Fetches one DRep by its view identifier.
    pub async fn drep_detail(&self, view: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("view", view);

        self.fetch("/gov/drep_detail", None, RequestOptions::get(query))
            .await
    }

    /// Lists governance votes cast by the given role.
    pub async fn drep_votes(&self, role: VoterRole, paging: Paging) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 10);
        query.push("voter_role", role);

        self.fetch("/gov/vote", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Lists accounts delegating to one DRep.
    pub async fn drep_delegators(
        &self,
        view: &str,
        order: DrepDelegatorOrder,
        filter: Option<DrepDelegatorFilter>,
        paging: Paging,
    ) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 10);
        query.push("view", view);
        query.push_opt("filter", filter);
        query.push("order", order);

        self.fetch("/gov/drep_delegator", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Delegator count distribution for one DRep.
    pub async fn drep_delegator_stats(&self, view: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("view", view);

        self.fetch("/gov/drep_delegator_stats", None, RequestOptions::get(query))
            .await
    }

    /// Fetches aggregate DRep governance statistics.
    pub async fn drep_stat(&self) -> ApiResult<Value> {
        self.fetch("/gov/stat", None, RequestOptions::default())
            .await
    }

    /// Fetches DRep participation analytics.
    pub async fn drep_analytics(&self) -> ApiResult<Value> {
        self.fetch("/gov/drep_analytics", None, RequestOptions::default())
            .await
    }

    /// Fetches stake held by retired DReps.
    pub async fn stake_drep_retired(&self) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("type", "stake_drep_retired");

        self.fetch("/analytics/stake", None, RequestOptions::get(query))
            .await
    }
}
