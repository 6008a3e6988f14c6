use crate::client::client::NodeClient;
use crate::populate::populate::Populator;
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use tracing_subscriber;

mod account;
mod client;
mod populate;
mod transfer;

use alloy::primitives::U256;
use anyhow::Result;
use tracing::info;

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8546";
const DEV_SEED_PHRASE: &str = "test test test test test test test test test test test junk";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    dotenv().ok();
    let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
    info!("connecting to node at {}", rpc_url);

    let client = Arc::new(NodeClient::builder().endpoint(&rpc_url).build()?);

    let accounts = client.accounts().await?;
    info!("node manages {} unlocked accounts", accounts.len());

    println!("latest block {}", client.block_height().await?);

    let populator = Populator::builder()
        .client(Arc::clone(&client))
        .recipient_phrase(DEV_SEED_PHRASE)
        .recipient_count(2)
        .transfer_count(5)
        .transfer_value(U256::from(12345u64))
        .gas_limit(21_000)
        .max_fee_per_gas(20_000_000_000)
        .max_priority_fee_per_gas(1_000_000_000)
        .build()?;

    let hashes = populator.run().await?;
    info!("submitted {} transfers", hashes.len());

    println!("latest block {}", client.block_height().await?);

    Ok(())
}
