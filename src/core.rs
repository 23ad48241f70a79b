use crate::backend::WalletBackend;
use crate::balance::{AccountDetails, BalanceSnapshot, UtxoCounts};
use iced::futures::{channel::mpsc::Sender, SinkExt};
use log::{debug, error};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// The directory where all application data is stored, ~/.fiat-balance
pub fn data_dir() -> PathBuf {
    match home::home_dir() {
        Some(home) => home.join(".fiat-balance"),
        None => PathBuf::from(".fiat-balance"),
    }
}

#[derive(Debug, Clone)]
pub struct UICoreMsgPacket {
    pub id: Uuid,
    pub msg: UICoreMsg,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UICoreMsg {
    RefreshWallet,
    FetchUtxoCounts,
    UtxoConsolidate,
    MassUnlockTips,
}

#[derive(Debug, Clone)]
pub struct CoreUIMsgPacket {
    pub id: Option<Uuid>,
    pub msg: CoreUIMsg,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoreUIMsg {
    BalanceUpdated(BalanceSnapshot),
    AccountDetailsUpdated(Option<AccountDetails>),
    SyncStatus(bool),
    UtxoCountsUpdated(UtxoCounts),
    UtxoCountsFailed(String),
    ConsolidatePending,
    Consolidating,
    ConsolidateSuccess,
    ConsolidateFailed(String),
    MassClaimPending,
    MassClaimingTips,
    MassClaimSuccess,
    MassClaimFailed(String),
}

#[derive(Clone)]
pub struct WalletCore {
    pub tx: Sender<CoreUIMsgPacket>,
    pub backend: Arc<dyn WalletBackend + Send + Sync>,
}

impl WalletCore {
    // Initial setup messages that don't have an id
    async fn send_system_msg(&self, msg: CoreUIMsg) {
        self.send(CoreUIMsgPacket { id: None, msg }).await;
    }

    // Standard core->ui communication with an id
    pub async fn msg(&self, id: Uuid, msg: CoreUIMsg) {
        self.send(CoreUIMsgPacket { id: Some(id), msg }).await;
    }

    async fn send(&self, packet: CoreUIMsgPacket) {
        if let Err(e) = self.tx.clone().send(packet).await {
            error!("Could not communicate with the UI: {e}");
        }
    }

    // Sends updates to the UI to reflect the initial state
    pub async fn init_ui_state(&self) -> anyhow::Result<()> {
        let balances = self.backend.balances().await?;
        self.send_system_msg(CoreUIMsg::BalanceUpdated(balances))
            .await;

        let details = self.backend.account_details().await?;
        self.send_system_msg(CoreUIMsg::AccountDetailsUpdated(details))
            .await;

        let synced = self.backend.has_synced().await?;
        self.send_system_msg(CoreUIMsg::SyncStatus(synced)).await;

        Ok(())
    }

    pub async fn refresh_wallet(&self, msg_id: Uuid) -> anyhow::Result<()> {
        let balances = self.backend.balances().await?;
        self.msg(msg_id, CoreUIMsg::BalanceUpdated(balances)).await;

        let details = self.backend.account_details().await?;
        self.msg(msg_id, CoreUIMsg::AccountDetailsUpdated(details))
            .await;

        let synced = self.backend.has_synced().await?;
        self.msg(msg_id, CoreUIMsg::SyncStatus(synced)).await;

        Ok(())
    }

    pub async fn fetch_utxo_counts(&self, msg_id: Uuid) -> anyhow::Result<()> {
        let counts = self.backend.utxo_counts().await?;
        debug!("Fetched utxo counts: {counts:?}");
        self.msg(msg_id, CoreUIMsg::UtxoCountsUpdated(counts)).await;
        Ok(())
    }

    pub async fn consolidate(&self, msg_id: Uuid) -> anyhow::Result<()> {
        self.msg(msg_id, CoreUIMsg::ConsolidatePending).await;
        self.backend.consolidate().await?;
        self.msg(msg_id, CoreUIMsg::Consolidating).await;

        let counts = self.backend.utxo_counts().await?;
        self.msg(msg_id, CoreUIMsg::UtxoCountsUpdated(counts)).await;
        self.msg(msg_id, CoreUIMsg::ConsolidateSuccess).await;
        Ok(())
    }

    pub async fn mass_unlock_tips(&self, msg_id: Uuid) -> anyhow::Result<()> {
        self.msg(msg_id, CoreUIMsg::MassClaimPending).await;
        self.msg(msg_id, CoreUIMsg::MassClaimingTips).await;
        self.backend.unlock_tips().await?;

        let balances = self.backend.balances().await?;
        self.msg(msg_id, CoreUIMsg::BalanceUpdated(balances)).await;
        self.msg(msg_id, CoreUIMsg::MassClaimSuccess).await;
        Ok(())
    }
}
