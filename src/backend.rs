use crate::balance::{AccountDetails, BalanceSnapshot, UtxoCounts};
use anyhow::anyhow;
use async_trait::async_trait;
use log::{info, trace};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;

pub const WALLET_FILE_NAME: &str = "wallet.json";

/// Whatever actually holds the wallet. The core only ever talks to this.
#[async_trait]
pub trait WalletBackend {
    async fn balances(&self) -> anyhow::Result<BalanceSnapshot>;

    async fn utxo_counts(&self) -> anyhow::Result<UtxoCounts>;

    // None when the wallet isn't tied to an account
    async fn account_details(&self) -> anyhow::Result<Option<AccountDetails>>;

    async fn has_synced(&self) -> anyhow::Result<bool>;

    // Merges the `other` outputs together
    async fn consolidate(&self) -> anyhow::Result<()>;

    // Moves every received tip into the spendable balance
    async fn unlock_tips(&self) -> anyhow::Result<()>;
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletState {
    pub balances: BalanceSnapshot,
    pub utxo_counts: UtxoCounts,
    pub account_details: Option<AccountDetails>,
    pub has_synced: bool,
}

/// Wallet state kept in memory, seeded from a JSON file in the data dir.
#[derive(Debug, Default)]
pub struct LocalWalletBackend {
    state: RwLock<WalletState>,
}

impl LocalWalletBackend {
    pub fn new(state: WalletState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let path = root.join(WALLET_FILE_NAME);
        if !path.exists() {
            info!("No wallet file at {path:?}, starting empty");
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(&path)?;
        let state: WalletState = serde_json::from_str(&data)?;
        info!("Loaded wallet from {path:?}");
        Ok(Self::new(state))
    }
}

#[async_trait]
impl WalletBackend for LocalWalletBackend {
    async fn balances(&self) -> anyhow::Result<BalanceSnapshot> {
        Ok(self.state.read().await.balances)
    }

    async fn utxo_counts(&self) -> anyhow::Result<UtxoCounts> {
        Ok(self.state.read().await.utxo_counts.clone())
    }

    async fn account_details(&self) -> anyhow::Result<Option<AccountDetails>> {
        Ok(self.state.read().await.account_details)
    }

    async fn has_synced(&self) -> anyhow::Result<bool> {
        Ok(self.state.read().await.has_synced)
    }

    async fn consolidate(&self) -> anyhow::Result<()> {
        let mut state = self.state.write().await;
        let other = state.utxo_counts.other();
        if other == 0 {
            return Err(anyhow!("Nothing to consolidate"));
        }

        trace!("Consolidating {other} outputs");
        state.utxo_counts.set(UtxoCounts::OTHER, 1);
        Ok(())
    }

    async fn unlock_tips(&self) -> anyhow::Result<()> {
        let mut state = self.state.write().await;
        let tips = state.balances.tips_balance;
        if tips <= 0. {
            return Err(anyhow!("No tips to unlock"));
        }

        trace!("Unlocking {tips} in tips");
        state.balances.balance += tips;
        state.balances.tips_balance = 0.;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    fn state() -> WalletState {
        let mut utxo_counts = UtxoCounts::default();
        utxo_counts.set(UtxoCounts::OTHER, 512);
        utxo_counts.set("support", 3);

        WalletState {
            balances: BalanceSnapshot {
                balance: 120.,
                claims_balance: 2.,
                supports_balance: 1.,
                tips_balance: 7.5,
            },
            utxo_counts,
            account_details: Some(AccountDetails {
                total_tipped: 31_300,
                total_withdrawn: 10_000,
            }),
            has_synced: true,
        }
    }

    #[tokio::test]
    async fn test_unlock_tips_keeps_total() {
        let backend = LocalWalletBackend::new(state());
        let before = backend.balances().await.unwrap();

        backend.unlock_tips().await.unwrap();

        let after = backend.balances().await.unwrap();
        assert_eq!(after.tips_balance, 0.);
        assert_eq!(after.balance, 127.5);
        assert_eq!(after.total_balance(), before.total_balance());

        assert!(backend.unlock_tips().await.is_err());
    }

    #[tokio::test]
    async fn test_consolidate_collapses_other() {
        let backend = LocalWalletBackend::new(state());

        backend.consolidate().await.unwrap();

        let counts = backend.utxo_counts().await.unwrap();
        assert_eq!(counts.other(), 1);
        assert_eq!(counts.get("support"), 3);
    }

    #[tokio::test]
    async fn test_consolidate_empty_wallet_fails() {
        let backend = LocalWalletBackend::default();
        assert!(backend.consolidate().await.is_err());
        assert!(!backend.has_synced().await.unwrap());
        assert!(backend.account_details().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_from_data_dir() {
        let tmp_dir = TempDir::new("fiat-balance").expect("Could not create temp dir");

        let empty = LocalWalletBackend::load(tmp_dir.path()).unwrap();
        assert_eq!(empty.balances().await.unwrap(), BalanceSnapshot::default());

        std::fs::write(
            tmp_dir.path().join(WALLET_FILE_NAME),
            serde_json::to_string(&state()).unwrap(),
        )
        .unwrap();

        let backend = LocalWalletBackend::load(tmp_dir.path()).unwrap();
        assert_eq!(backend.balances().await.unwrap().balance, 120.);
        assert_eq!(backend.utxo_counts().await.unwrap().other(), 512);
        assert!(backend.has_synced().await.unwrap());
    }
}
