use crate::account::account::DevAccount;
use crate::client::client::NodeClient;
use crate::transfer::transfer::TransferRequest;
use alloy::primitives::{Address, B256, U256};
use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Submits a fixed batch of value transfers from the node's coinbase account
/// to a set of generated throwaway recipients.
#[derive(Debug)]
pub struct Populator {
    client: Arc<NodeClient>,
    recipients: Vec<DevAccount>,
    transfer_count: usize,
    transfer_value: U256,
    gas_limit: Option<u128>,
    max_fee_per_gas: Option<u128>,
    max_priority_fee_per_gas: Option<u128>,
}

impl Populator {
    pub fn builder() -> PopulatorBuilder {
        PopulatorBuilder::default()
    }

    /// The transfers one run submits. Recipients are assigned round-robin;
    /// every other parameter is fixed across the batch.
    pub fn plan(&self, from: Address) -> Vec<TransferRequest> {
        (0..self.transfer_count)
            .map(|i| {
                let to = self.recipients[i % self.recipients.len()].address();
                let mut transfer = TransferRequest::new(from, to, self.transfer_value);
                if let Some(gas_limit) = self.gas_limit {
                    transfer = transfer.with_gas_limit(gas_limit);
                }
                if let Some(max_fee) = self.max_fee_per_gas {
                    transfer = transfer.with_max_fee_per_gas(max_fee);
                }
                if let Some(max_priority) = self.max_priority_fee_per_gas {
                    transfer = transfer.with_max_priority_fee_per_gas(max_priority);
                }
                transfer
            })
            .collect()
    }

    /// Submits the planned transfers sequentially, blocking on each until
    /// the node accepts or rejects it.
    pub async fn run(&self) -> Result<Vec<B256>> {
        let coinbase = self.client.coinbase().await?;
        info!("funding transfers from coinbase {}", coinbase);

        let mut hashes = Vec::with_capacity(self.transfer_count);
        for transfer in self.plan(coinbase) {
            debug!(
                "submitting transfer: {}",
                serde_json::to_string(&transfer).context("Failed to serialize transfer")?
            );

            let hash = self.client.submit_transfer(&transfer).await?;
            info!(
                "transfer of {} wei to {} accepted: {:x}",
                transfer.value, transfer.to, hash
            );
            hashes.push(hash);
        }

        Ok(hashes)
    }
}

#[derive(Default)]
pub struct PopulatorBuilder {
    client: Option<Arc<NodeClient>>,
    recipient_phrase: Option<String>,
    recipient_count: Option<usize>,
    transfer_count: Option<usize>,
    transfer_value: Option<U256>,
    gas_limit: Option<u128>,
    max_fee_per_gas: Option<u128>,
    max_priority_fee_per_gas: Option<u128>,
}

impl PopulatorBuilder {
    pub fn client(mut self, client: Arc<NodeClient>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn recipient_phrase(mut self, phrase: &str) -> Self {
        self.recipient_phrase = Some(phrase.to_string());
        self
    }

    pub fn recipient_count(mut self, count: usize) -> Self {
        self.recipient_count = Some(count);
        self
    }

    pub fn transfer_count(mut self, count: usize) -> Self {
        self.transfer_count = Some(count);
        self
    }

    pub fn transfer_value(mut self, value: U256) -> Self {
        self.transfer_value = Some(value);
        self
    }

    pub fn gas_limit(mut self, gas_limit: u128) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn max_fee_per_gas(mut self, max_fee: u128) -> Self {
        self.max_fee_per_gas = Some(max_fee);
        self
    }

    pub fn max_priority_fee_per_gas(mut self, max_priority: u128) -> Self {
        self.max_priority_fee_per_gas = Some(max_priority);
        self
    }

    pub fn build(self) -> Result<Populator> {
        let client = self.client.context("Client not provided")?;
        let recipient_phrase = self.recipient_phrase.context("Recipient phrase not provided")?;
        let recipient_count = self.recipient_count.context("Recipient count not provided")?;
        let transfer_count = self.transfer_count.context("Transfer count not provided")?;
        let transfer_value = self.transfer_value.context("Transfer value not provided")?;

        if recipient_count == 0 {
            bail!("Recipient count must be at least 1");
        }

        let recipients = (0..recipient_count as u32)
            .map(|index| DevAccount::derive(&recipient_phrase, index))
            .collect::<Result<Vec<_>>>()?;

        for recipient in &recipients {
            debug!(
                "derived recipient {} (key {:x})",
                recipient.address(),
                recipient.private_key()
            );
        }

        Ok(Populator {
            client,
            recipients,
            transfer_count,
            transfer_value,
            gas_limit: self.gas_limit,
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
        })
    }
}
