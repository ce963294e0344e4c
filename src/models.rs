//! Response data models for the shipped endpoints.
//!
//! Fields mirror the API's JSON field names. Values the API omits on
//! older rows or error paths are `Option`; looser analytics and misc
//! payloads are returned as [`serde_json::Value`] by their endpoints.

use serde::Deserialize;

/// Paginated list payload: total row count plus the requested page.
#[derive(Clone, Debug, Deserialize)]
pub struct PagedData<T> {
    pub count: u64,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Registered pool metadata, when the pool has published any.
#[derive(Clone, Debug, Deserialize)]
pub struct PoolMeta {
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
}

/// Minimal pool reference embedded in other resources.
#[derive(Clone, Debug, Deserialize)]
pub struct PoolInfo {
    pub id: String,
    pub meta: Option<PoolMeta>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Block {
    pub block_no: u64,
    pub hash: String,
    pub time: String,
    pub epoch_no: u32,
    pub slot_no: u64,
    pub epoch_slot_no: Option<u64>,
    pub size: Option<u64>,
    pub proto_major: Option<u32>,
    pub proto_minor: Option<u32>,
    pub op_cert_counter: Option<u64>,
    pub vrf_key: Option<String>,
    pub tx_count: Option<u64>,
    pub pool: Option<PoolInfo>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Tx {
    pub hash: String,
    pub block_no: Option<u64>,
    pub epoch_no: Option<u32>,
    pub slot_no: Option<u64>,
    pub time: Option<String>,
    pub fee: Option<u64>,
    pub out_sum: Option<u64>,
    pub size: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Utxo {
    pub tx_hash: Option<String>,
    pub index: Option<u32>,
    pub value: Option<u64>,
    pub datum_hash: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AddressInfo {
    pub view: Option<String>,
    pub payment_cred: Option<String>,
    pub stake: Option<String>,
    pub balance: Option<u64>,
    pub tx_count: Option<u64>,
    pub first_activity: Option<String>,
    pub last_activity: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AccountReward {
    #[serde(rename = "type")]
    pub reward_type: Option<String>,
    pub earned_epoch: Option<u32>,
    pub spendable_epoch: Option<u32>,
    pub amount: Option<u64>,
    pub pool: Option<PoolInfo>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AssetInfo {
    pub fingerprint: Option<String>,
    pub name: Option<String>,
    pub policy: Option<String>,
    pub quantity: Option<u64>,
    pub mint_count: Option<u64>,
    pub first_mint: Option<String>,
    pub last_mint: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PoolListItem {
    pub pool_id: Option<String>,
    pub meta: Option<PoolMeta>,
    pub ranking: Option<u64>,
    pub live_stake: Option<u64>,
    pub active_stake: Option<u64>,
    pub delegators: Option<u64>,
    pub blocks_total: Option<u64>,
    pub margin: Option<f64>,
    pub fixed_cost: Option<u64>,
    pub pledge: Option<u64>,
    pub saturation: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::{Block, PagedData};

    #[test]
    fn block_list_page_decodes_with_sparse_fields() {
        let body = r#"{
            "count": 2,
            "data": [
                {"block_no": 100, "hash": "aa", "time": "2024-01-01T00:00:00Z",
                 "epoch_no": 5, "slot_no": 1234, "tx_count": 3,
                 "pool": {"id": "pool1xyz", "meta": {"ticker": "TCK", "name": null,
                          "description": null, "homepage": null}}},
                {"block_no": 101, "hash": "bb", "time": "2024-01-01T00:00:20Z",
                 "epoch_no": 5, "slot_no": 1254}
            ]
        }"#;

        let page: PagedData<Block> = serde_json::from_str(body).expect("decodes");
        assert_eq!(page.count, 2);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].pool.as_ref().map(|p| p.id.as_str()), Some("pool1xyz"));
        assert!(page.data[1].pool.is_none());
    }
}
