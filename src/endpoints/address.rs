use std::fmt;

use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::ApiResult;
use crate::models::{AddressInfo, PagedData, Utxo};
use crate::query::QueryPairs;
use crate::transport::Transport;

/// Sorting method for address lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressOrder {
    Balance,
    LastActivity,
}

impl AddressOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::LastActivity => "last",
        }
    }
}

impl fmt::Display for AddressOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for [`CexplorerClient::address_list`].
#[derive(Clone, Debug, Default)]
pub struct AddressListParams {
    /// Stake key or payment credential to filter by.
    pub payment_cred: Option<String>,
    /// Specific address to filter by.
    pub view: Option<String>,
    pub order: Option<AddressOrder>,
    /// Restrict results to the user's watchlist.
    pub watchlist_only: bool,
    /// User token for watchlist and other user-scoped data.
    pub user_token: Option<String>,
}

impl<T: Transport> CexplorerClient<T> {
    /// Fetches balance, activity, and metadata for one address.
    pub async fn address_detail(&self, view: &str) -> ApiResult<AddressInfo> {
        let mut query = QueryPairs::new();
        query.push("view", view);

        self.fetch("/address/detail", None, RequestOptions::get(query))
            .await
    }

    /// Lists addresses matching the given filters.
    pub async fn address_list(
        &self,
        params: AddressListParams,
    ) -> ApiResult<PagedData<AddressInfo>> {
        let mut query = QueryPairs::new();
        query.push_opt("payment_cred", params.payment_cred);
        query.push_opt("view", params.view);
        query.push_opt("order", params.order);
        query.push_opt("watchlist_only", params.watchlist_only.then_some("1"));

        let mut options = RequestOptions::get(query);
        if let Some(token) = &params.user_token {
            options = options.with_user_token(token)?;
        }

        self.fetch("/address/list", None, options).await
    }

    /// Lists unspent outputs held by one address.
    pub async fn address_utxo(&self, view: &str) -> ApiResult<PagedData<Utxo>> {
        let mut query = QueryPairs::new();
        query.push("view", view);

        self.fetch("/address/utxo", None, RequestOptions::get(query))
            .await
    }

    /// Decomposes an address into its credentials and components.
    pub async fn inspect_address(&self, view: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("view", view);

        self.fetch("/address/extract", None, RequestOptions::get(query))
            .await
    }
}
