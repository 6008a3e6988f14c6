use crate::transfer::transfer::TransferRequest;
use alloy::primitives::{Address, B256};
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use alloy::transports::http::{Client, Http};
use anyhow::{Context, Result};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::rpc_params;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};

/// Connection to the local dev node: an alloy provider for the typed query
/// surface and a raw RPC client for the node-signed submission path.
#[derive(Debug)]
pub struct NodeClient {
    provider: RootProvider<Http<Client>>,
    rpc: HttpClient,
}

impl NodeClient {
    pub fn builder() -> NodeClientBuilder {
        NodeClientBuilder::default()
    }

    pub async fn block_height(&self) -> Result<u64> {
        self.provider
            .get_block_number()
            .await
            .context("Failed to fetch block number")
    }

    /// Addresses the node manages and can sign for.
    pub async fn accounts(&self) -> Result<Vec<Address>> {
        self.provider
            .get_accounts()
            .await
            .context("Failed to fetch node accounts")
    }

    pub async fn coinbase(&self) -> Result<Address> {
        let coinbase: Address = self
            .rpc
            .request("eth_coinbase", rpc_params![])
            .await
            .context("Failed to fetch coinbase account")?;

        Ok(coinbase)
    }

    /// Hands the transfer to the node for signing and pooling. Returns the
    /// pending transaction hash.
    pub async fn submit_transfer(&self, transfer: &TransferRequest) -> Result<B256> {
        let tx = transfer.to_rpc_request();

        let hash: B256 = self
            .rpc
            .request("eth_sendTransaction", rpc_params![tx])
            .await
            .context("Node rejected transfer submission")?;

        Ok(hash)
    }
}

#[derive(Default)]
pub struct NodeClientBuilder {
    endpoint: Option<String>,
}

impl NodeClientBuilder {
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    pub fn build(self) -> Result<NodeClient> {
        let endpoint = self.endpoint.context("Endpoint not provided")?;

        let url = endpoint.parse().context("Invalid RPC endpoint URL")?;
        let provider = ProviderBuilder::new().on_http(url);

        let rpc = HttpClientBuilder::default()
            .build(&endpoint)
            .context("Failed to build RPC client")?;

        Ok(NodeClient { provider, rpc })
    }
}
