use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::{ApiResult, Paging, SortOrder};
use crate::models::{AssetInfo, PagedData};
use crate::query::QueryPairs;
use crate::transport::Transport;

/// Filters for [`CexplorerClient::asset_list`].
#[derive(Clone, Debug, Default)]
pub struct AssetListParams {
    pub paging: Paging,
    /// Substring filter over asset names.
    pub filter: Option<String>,
    pub name: Option<String>,
    pub policy: Option<String>,
    /// Ranking column; server-defined set, passed through verbatim.
    pub order: Option<String>,
    pub sort: Option<SortOrder>,
    pub watchlist_only: bool,
    pub user_token: Option<String>,
}

impl<T: Transport> CexplorerClient<T> {
    /// Lists native assets matching the given filters.
    pub async fn asset_list(&self, params: AssetListParams) -> ApiResult<PagedData<AssetInfo>> {
        let mut query = QueryPairs::new();
        let offset = params.paging.apply(&mut query, 20);
        query.push_opt("filter", params.filter);
        query.push_opt("name", params.name);
        query.push_opt("policy", params.policy);
        query.push_opt("order", params.order);
        query.push_opt("sort", params.sort);
        query.push_opt("watchlist", params.watchlist_only.then_some("1"));

        let mut options = RequestOptions::get(query);
        if let Some(token) = &params.user_token {
            options = options.with_user_token(token)?;
        }

        self.fetch("/asset/list", Some(offset), options).await
    }

    /// Fetches one asset by its CIP-14 fingerprint.
    pub async fn asset_detail(&self, fingerprint: &str) -> ApiResult<AssetInfo> {
        let mut query = QueryPairs::new();
        query.push("fingerprint", fingerprint);

        self.fetch("/asset/detail", None, RequestOptions::get(query))
            .await
    }

    /// Lists current holders of one asset.
    pub async fn asset_owners(&self, assetname: &str, paging: Paging) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);
        query.push("assetname", assetname);

        self.fetch("/asset/owner", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Lists historical holders of one asset (NFT provenance).
    pub async fn asset_owner_history(
        &self,
        assetname: &str,
        paging: Paging,
    ) -> ApiResult<PagedData<Value>> {
        let mut query = QueryPairs::new();
        let offset = paging.apply(&mut query, 20);
        query.push("assetname", assetname);

        self.fetch("/asset/owner_history", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Fetches registry/on-chain metadata for one asset.
    pub async fn asset_metadata(&self, assetname: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("assetname", assetname);

        self.fetch("/asset/metadata", None, RequestOptions::get(query))
            .await
    }

    /// Lists mint/burn events for one asset or policy.
    pub async fn asset_mint(
        &self,
        assetname: Option<&str>,
        id: Option<&str>,
    ) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push_opt("assetname", assetname);
        query.push_opt("id", id);

        self.fetch("/policy/mint", None, RequestOptions::get(query))
            .await
    }

    /// Fetches trading/holder statistics for one asset.
    pub async fn asset_stats(
        &self,
        assetname: Option<&str>,
        fingerprint: Option<&str>,
    ) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push_opt("assetname", assetname);
        query.push_opt("fingerprint", fingerprint);

        self.fetch("/asset/stat", None, RequestOptions::get(query))
            .await
    }
}
