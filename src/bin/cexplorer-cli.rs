use std::str::FromStr;

use anyhow::{Context, Result};
use cexplorer_client::endpoints::Paging;
use cexplorer_client::endpoints::block::BlockListParams;
use cexplorer_client::{CexplorerClient, ConfigUpdate, Network, QueryPairs, RequestOptions};
use clap::{Args, Parser, Subcommand};
use reqwest::Method;
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(
    name = "cexplorer-cli",
    version,
    about = "Small async CLI for querying the Cexplorer API"
)]
struct Cli {
    /// Target network: mainnet-stage, preprod-stage, or preview-stage.
    #[arg(long, env = "CEXPLORER_NETWORK", default_value = "mainnet-stage")]
    network: String,

    /// API key sent with every request.
    #[arg(long, env = "CEXPLORER_API_KEY")]
    api_key: Option<String>,

    /// Emit compact JSON instead of pretty-printed output.
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send a raw request using method + path.
    Request(RequestArgs),
    /// List recent blocks.
    Blocks(BlocksArgs),
    /// Search across resources.
    Search {
        /// Text to search for.
        query: String,

        /// Restrict the search to one category.
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Debug, Args)]
struct RequestArgs {
    /// HTTP method (GET, POST, ...).
    method: String,

    /// Request path (for example: /misc/basic).
    path: String,

    /// Query parameter in form key=value. Repeat as needed.
    #[arg(long = "query", value_name = "KEY=VALUE")]
    query: Vec<String>,

    /// Pagination offset echoed back in the envelope.
    #[arg(long)]
    offset: Option<u64>,

    /// Per-attempt timeout in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Retries after the first attempt.
    #[arg(long)]
    retries: Option<u32>,
}

#[derive(Debug, Args)]
struct BlocksArgs {
    /// Page size.
    #[arg(long)]
    limit: Option<u32>,

    /// Pagination offset.
    #[arg(long)]
    offset: Option<u64>,

    /// Filter by epoch number.
    #[arg(long)]
    epoch_no: Option<u32>,

    /// Filter by minting pool id.
    #[arg(long)]
    pool_id: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let network = Network::from_str(&cli.network)
        .with_context(|| format!("unsupported network '{}'", cli.network))?;
    let mut config = ConfigUpdate::network(network);
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key.clone());
    }
    let client = CexplorerClient::new(config).context("failed to create client")?;

    match &cli.command {
        Command::Request(args) => {
            let value = send_request(&client, args)
                .await
                .with_context(|| format!("request failed: {} {}", args.method, args.path))?;
            print_json(&value, cli.compact)?;
        }
        Command::Blocks(args) => {
            let envelope = client
                .block_list(BlockListParams {
                    paging: Paging {
                        limit: args.limit,
                        offset: args.offset,
                    },
                    epoch_no: args.epoch_no,
                    pool_id: args.pool_id.clone(),
                    ..BlockListParams::default()
                })
                .await
                .context("block list request failed")?;

            for block in &envelope.data.data {
                println!(
                    "{:>10}  {}  {}  txs={}",
                    block.block_no,
                    block.time,
                    block.hash,
                    block.tx_count.unwrap_or(0)
                );
            }
        }
        Command::Search { query, category } => {
            let envelope = client
                .misc_search(query, category.as_deref(), None)
                .await
                .context("search request failed")?;
            print_json(&envelope.data, cli.compact)?;
        }
    }

    Ok(())
}

/// Sends a raw request, returning the full decoded body.
async fn send_request(client: &CexplorerClient, args: &RequestArgs) -> Result<Value> {
    // Validate method eagerly so CLI errors are explicit before any network call.
    let method = Method::from_str(&args.method)
        .with_context(|| format!("invalid HTTP method '{}'", args.method))?;

    let mut params = QueryPairs::new();
    for pair in &args.query {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("expected key=value in --query, got '{pair}'"))?;
        params.push(key.to_owned(), value);
    }

    let options = RequestOptions {
        method,
        params,
        timeout_ms: args.timeout_ms,
        retry_count: args.retries,
        ..RequestOptions::default()
    };

    let envelope = client.fetch::<Value>(&args.path, args.offset, options).await?;
    Ok(envelope.into_payload())
}

fn print_json(value: &Value, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}
