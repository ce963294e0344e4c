use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::ApiResult;
use crate::query::QueryPairs;
use crate::transport::Transport;

impl<T: Transport> CexplorerClient<T> {
    /// Fetches API deployment information.
    pub async fn misc_api(&self) -> ApiResult<Value> {
        self.fetch("/misc/api", None, RequestOptions::default())
            .await
    }

    /// Fetches basic chain state (tip, epoch, supply).
    pub async fn misc_basic(&self) -> ApiResult<Value> {
        self.fetch("/misc/basic", None, RequestOptions::default())
            .await
    }

    /// Fetches current exchange rates.
    pub async fn misc_rate(&self) -> ApiResult<Value> {
        self.fetch("/misc/rate", None, RequestOptions::default())
            .await
    }

    /// Fetches chain constants.
    pub async fn misc_const(&self) -> ApiResult<Value> {
        self.fetch("/misc/const", None, RequestOptions::default())
            .await
    }

    /// Fetches market data for one epoch or calendar date.
    pub async fn misc_market(
        &self,
        epoch_no: Option<u32>,
        date: Option<&str>,
    ) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push_opt("epoch_no", epoch_no);
        query.push_opt("date", date);

        self.fetch("/misc/market", None, RequestOptions::get(query))
            .await
    }

    /// Searches across resources, optionally scoped to one category.
    pub async fn misc_search(
        &self,
        text: &str,
        category: Option<&str>,
        locale: Option<&str>,
    ) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("query", text);
        query.push_opt("category", category);
        query.push_opt("lng", locale);

        self.fetch("/misc/search", None, RequestOptions::get(query))
            .await
    }

    /// Validates an identifier against a group type (address, policy, ...).
    pub async fn misc_validate(&self, group_type: Option<&str>, ident: &str) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push_opt("type", group_type);
        query.push("ident", ident);

        self.fetch("/misc/validate", None, RequestOptions::get(query))
            .await
    }

    /// Fetches API health status.
    pub async fn misc_health(&self) -> ApiResult<Value> {
        self.fetch("/misc/health", None, RequestOptions::default())
            .await
    }

    /// Fetches current protocol parameters.
    pub async fn protocol_parameters(&self) -> ApiResult<Value> {
        self.fetch("/misc/protocol_parameters", None, RequestOptions::default())
            .await
    }

    /// Lists governance polls; user-scoped when a token is supplied.
    pub async fn poll_list(&self, user_token: Option<&str>) -> ApiResult<Value> {
        let path = if user_token.is_some() {
            "/user/gov"
        } else {
            "/misc/gw/gov"
        };

        let mut options = RequestOptions::default();
        if let Some(token) = user_token {
            options = options.with_user_token(token)?;
        }

        self.fetch(path, None, options).await
    }
}
