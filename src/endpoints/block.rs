use crate::client::{CexplorerClient, RequestOptions};
use crate::endpoints::{ApiResult, Paging};
use crate::models::{Block, PagedData};
use crate::query::QueryPairs;
use crate::transport::Transport;

/// Filters for [`CexplorerClient::block_list`].
#[derive(Clone, Debug, Default)]
pub struct BlockListParams {
    pub paging: Paging,
    pub pool_id: Option<String>,
    pub epoch_no: Option<u32>,
    pub hash: Option<String>,
    pub slot_no: Option<u64>,
    pub block_no: Option<u64>,
}

impl<T: Transport> CexplorerClient<T> {
    /// Lists blocks, newest first, with optional filters.
    pub async fn block_list(&self, params: BlockListParams) -> ApiResult<PagedData<Block>> {
        let mut query = QueryPairs::new();
        let offset = params.paging.apply(&mut query, 20);
        query.push_opt("pool_id", params.pool_id);
        query.push_opt("epoch_no", params.epoch_no);
        query.push_opt("hash", params.hash);
        query.push_opt("slot_no", params.slot_no);
        query.push_opt("block_no", params.block_no);

        self.fetch("/block/list", Some(offset), RequestOptions::get(query))
            .await
    }

    /// Fetches one block by its hash.
    pub async fn block_detail(&self, hash: &str) -> ApiResult<Block> {
        let mut query = QueryPairs::new();
        query.push("hash", hash);

        self.fetch("/block/detail", None, RequestOptions::get(query))
            .await
    }
}
