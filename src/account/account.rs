use alloy::primitives::{Address, B256};
use alloy::signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use anyhow::{Context, Result};

/// Throwaway account derived from a seed phrase, held in memory for the
/// lifetime of the run and never persisted.
#[derive(Debug)]
pub struct DevAccount {
    signer: PrivateKeySigner,
}

impl DevAccount {
    /// Derives the account at `m/44'/60'/0'/0/{index}`. Same phrase and
    /// index always yield the same key pair.
    pub fn derive(phrase: &str, index: u32) -> Result<Self> {
        let signer = MnemonicBuilder::<English>::default()
            .phrase(phrase)
            .index(index)
            .context("Invalid derivation index")?
            .build()
            .context("Failed to derive account from seed phrase")?;

        Ok(DevAccount { signer })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn private_key(&self) -> B256 {
        self.signer.to_bytes()
    }
}
