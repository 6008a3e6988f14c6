use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;
use serde::{Deserialize, Serialize};

/// A single value transfer to submit via `eth_sendTransaction`. The node
/// holds the sender's key, so the request goes out unsigned.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransferRequest {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub gas_limit: Option<u128>,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
}

impl TransferRequest {
    pub fn new(from: Address, to: Address, value: U256) -> Self {
        TransferRequest {
            from,
            to,
            value,
            gas_limit: None,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
        }
    }

    pub fn with_gas_limit(mut self, gas_limit: u128) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn with_max_fee_per_gas(mut self, max_fee: u128) -> Self {
        self.max_fee_per_gas = Some(max_fee);
        self
    }

    pub fn with_max_priority_fee_per_gas(mut self, max_priority: u128) -> Self {
        self.max_priority_fee_per_gas = Some(max_priority);
        self
    }

    /// Wire shape for submission. Unset fee fields stay absent so the node
    /// fills its own defaults.
    pub fn to_rpc_request(&self) -> TransactionRequest {
        let mut tx = TransactionRequest::default()
            .with_from(self.from)
            .with_to(self.to)
            .with_value(self.value);

        if let Some(gas_limit) = self.gas_limit {
            tx = tx.with_gas_limit(gas_limit as u64);
        }
        if let Some(max_fee) = self.max_fee_per_gas {
            tx = tx.with_max_fee_per_gas(max_fee);
        }
        if let Some(max_priority) = self.max_priority_fee_per_gas {
            tx = tx.with_max_priority_fee_per_gas(max_priority);
        }

        tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, TxKind};

    fn sample() -> TransferRequest {
        TransferRequest::new(
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            U256::from(12345u64),
        )
    }

    #[test]
    fn rpc_request_carries_transfer_fields() {
        let tx = sample().to_rpc_request();
        assert_eq!(
            tx.from,
            Some(address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"))
        );
        assert_eq!(
            tx.to,
            Some(TxKind::Call(address!(
                "70997970C51812dc3A010C7d01b50e0d17dc79C8"
            )))
        );
        assert_eq!(tx.value, Some(U256::from(12345u64)));
        assert_eq!(tx.gas, None);
        assert_eq!(tx.max_fee_per_gas, None);
        assert_eq!(tx.max_priority_fee_per_gas, None);
    }

    #[test]
    fn fee_overrides_are_applied() {
        let tx = sample()
            .with_gas_limit(21_000)
            .with_max_fee_per_gas(20_000_000_000)
            .with_max_priority_fee_per_gas(1_000_000_000)
            .to_rpc_request();
        assert_eq!(tx.gas, Some(21_000));
        assert_eq!(tx.max_fee_per_gas, Some(20_000_000_000));
        assert_eq!(tx.max_priority_fee_per_gas, Some(1_000_000_000));
    }

    #[test]
    fn unset_fees_stay_off_the_wire() {
        let json = serde_json::to_value(sample().to_rpc_request()).unwrap();
        assert_eq!(json["value"], "0x3039");
        assert!(json.get("gas").is_none());
        assert!(json.get("maxFeePerGas").is_none());
        assert!(json.get("maxPriorityFeePerGas").is_none());
    }
}
