use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::{ApiResult, Paging};
use crate::models::PagedData;
use crate::query::QueryPairs;
use crate::transport::Transport;

/// Filters for [`CexplorerClient::gov_action_proposal_list`].
#[derive(Clone, Debug, Default)]
pub struct GovProposalListParams {
    pub paging: Paging,
    /// Proposal lifecycle state (for example `active`, `ratified`).
    pub state: Option<String>,
    /// Free-text search over proposal titles.
    pub search: Option<String>,
    /// Governance action type filter.
    pub action_type: Option<String>,
}

impl<T: Transport> CexplorerClient<T> {
    /// Lists governance action proposals.
    pub async fn gov_action_proposal_list(
        &self,
        params: GovProposalListParams,
    ) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = params.paging.apply(&mut query, 20);
        query.push_opt("state", params.state);
        query.push_opt("search", params.search);
        query.push_opt("type", params.action_type);

        self.fetch(
            "/gov/gov_action_proposal_list",
            Some(offset),
            RequestOptions::get(query),
        )
        .await
    }

    /// Fetches one governance action proposal by id.
    pub async fn gov_action_proposal_detail(&self, id: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("id", id);

        self.fetch(
            "/gov/gov_action_proposal_detail",
            None,
            RequestOptions::get(query),
        )
        .await
    }

    /// Lists constitutional committees.
    pub async fn committee_list(&self) -> ApiResult<Value> {
        self.fetch(
            "/gov/committee_list/",
            None,
            RequestOptions::default(),
        )
        .await
    }

    /// Fetches one committee, or the current one when `id` is absent.
    pub async fn committee_detail(&self, id: Option<u64>) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push_opt("id", id);

        self.fetch("/gov/committee_detail", None, RequestOptions::get(query))
            .await
    }

    /// Fetches one committee member by identifier.
    pub async fn committee_member(&self, ident: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("ident", ident);

        self.fetch("/gov/committee_member", None, RequestOptions::get(query))
            .await
    }

    /// Lists constitution versions.
    pub async fn constitution_list(&self, limit: Option<u32>) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push_opt("limit", limit);

        self.fetch("/gov/constitution_list", None, RequestOptions::get(query))
            .await
    }

    /// Fetches current governance voting thresholds.
    pub async fn thresholds(&self) -> ApiResult<Value> {
        self.fetch("/gov/thresholds", None, RequestOptions::default())
            .await
    }
}
