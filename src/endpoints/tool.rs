use reqwest::Method;
use serde_json::Value;

use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::ApiResult;
use crate::query::QueryPairs;
use crate::transport::Transport;

/// Campaign transaction kind reported through [`CexplorerClient::tx_sent`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TxSentKind {
    #[default]
    Delegation,
    Donation,
}

impl TxSentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delegation => "delegation",
            Self::Donation => "donate",
        }
    }
}

impl<T: Transport> CexplorerClient<T> {
    /// Reports a submitted delegation or donation transaction hash for
    /// campaign tracking.
    pub async fn tx_sent(
        &self,
        hash: &str,
        campaign: &str,
        kind: TxSentKind,
    ) -> ApiResult<Value> {
        let mut query = QueryPairs::new();
        query.push("id", hash);
        query.push("type", kind.as_str());
        query.push("campaign", campaign);

        let options = RequestOptions {
            method: Method::POST,
            ..RequestOptions::get(query)
        };

        self.fetch("/tool/tx_sent", None, options).await
    }
}
