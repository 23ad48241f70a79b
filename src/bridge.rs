use crate::backend::LocalWalletBackend;
use crate::config::read_config;
use crate::core::{data_dir, CoreUIMsg, CoreUIMsgPacket, UICoreMsg, UICoreMsgPacket, WalletCore};
use crate::Message;
use iced::futures::channel::mpsc::Sender;
use iced::futures::{SinkExt, Stream, StreamExt};
use log::{debug, error, info};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

#[derive(Debug)]
pub struct UIHandle {
    ui_to_core_tx: mpsc::Sender<UICoreMsgPacket>,
}

impl UIHandle {
    pub async fn send_msg(&self, id: Uuid, msg: UICoreMsg) {
        if let Err(e) = self.ui_to_core_tx.send(UICoreMsgPacket { msg, id }).await {
            error!("Core is gone, dropping message: {e}");
        }
    }
}

#[derive(Debug)]
pub struct CoreHandle {
    core_from_ui_rx: mpsc::Receiver<UICoreMsgPacket>,
}

impl CoreHandle {
    pub async fn recv(&mut self) -> Option<UICoreMsgPacket> {
        self.core_from_ui_rx.recv().await
    }
}

pub fn create_handles() -> (UIHandle, CoreHandle) {
    let (ui_to_core_tx, core_from_ui_rx) = mpsc::channel::<UICoreMsgPacket>(50);

    let ui_handle = UIHandle { ui_to_core_tx };

    let core_handle = CoreHandle { core_from_ui_rx };

    (ui_handle, core_handle)
}

async fn forward(tx: &mut Sender<Message>, msg: Message) {
    if let Err(e) = tx.send(msg).await {
        error!("Could not reach the UI: {e}");
    }
}

pub fn run_core() -> impl Stream<Item = Message> {
    iced::stream::channel(100, |mut tx: Sender<Message>| async move {
        let (ui_handle, mut core_handle) = create_handles();
        forward(&mut tx, Message::UIHandlerLoaded(Arc::new(ui_handle))).await;

        let config = match read_config() {
            Ok(config) => config,
            Err(e) => {
                error!("Could not read config: {e}");
                forward(&mut tx, Message::InitError(e.to_string())).await;
                return;
            }
        };
        forward(&mut tx, Message::ConfigLoaded(config)).await;

        let path = data_dir();
        info!("Using datadir: {path:?}");

        let backend = match LocalWalletBackend::load(&path) {
            Ok(backend) => backend,
            Err(e) => {
                error!("Could not load wallet: {e}");
                forward(&mut tx, Message::InitError(e.to_string())).await;
                return;
            }
        };

        let (core_tx, mut core_rx) = iced::futures::channel::mpsc::channel::<CoreUIMsgPacket>(128);
        let mut tx_clone = tx.clone();
        tokio::spawn(async move {
            while let Some(rev) = core_rx.next().await {
                forward(&mut tx_clone, Message::CoreMessage(rev)).await;
            }
        });

        let core = WalletCore {
            tx: core_tx,
            backend: Arc::new(backend),
        };

        process_core(&mut core_handle, &core).await;
    })
}

/// Handles one request from the UI, reporting failures back as messages.
pub async fn handle_ui_msg(core: &WalletCore, msg: UICoreMsgPacket) {
    let UICoreMsgPacket { id, msg } = msg;
    debug!("Core got {msg:?}");

    match msg {
        UICoreMsg::RefreshWallet => {
            if let Err(e) = core.refresh_wallet(id).await {
                error!("Error refreshing wallet: {e}");
            }
        }
        UICoreMsg::FetchUtxoCounts => {
            if let Err(e) = core.fetch_utxo_counts(id).await {
                error!("Error fetching utxo counts: {e}");
                core.msg(id, CoreUIMsg::UtxoCountsFailed(e.to_string()))
                    .await;
            }
        }
        UICoreMsg::UtxoConsolidate => {
            if let Err(e) = core.consolidate(id).await {
                error!("Error consolidating: {e}");
                core.msg(id, CoreUIMsg::ConsolidateFailed(e.to_string()))
                    .await;
            }
        }
        UICoreMsg::MassUnlockTips => {
            if let Err(e) = core.mass_unlock_tips(id).await {
                error!("Error unlocking tips: {e}");
                core.msg(id, CoreUIMsg::MassClaimFailed(e.to_string()))
                    .await;
            }
        }
    }
}

async fn process_core(core_handle: &mut CoreHandle, core: &WalletCore) {
    // Initialize the ui's state
    if let Err(e) = core.init_ui_state().await {
        error!("Could not init ui state: {e}");
    }

    while let Some(msg) = core_handle.recv().await {
        let core = core.clone();
        tokio::spawn(async move {
            handle_ui_msg(&core, msg).await;
        });
    }

    info!("UI handle dropped, stopping core");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::WalletState;
    use crate::balance::UtxoCounts;
    use iced::futures::channel::mpsc as futures_mpsc;

    fn setup_core(state: WalletState) -> (WalletCore, futures_mpsc::Receiver<CoreUIMsgPacket>) {
        let (tx, rx) = futures_mpsc::channel::<CoreUIMsgPacket>(32);
        let core = WalletCore {
            tx,
            backend: Arc::new(LocalWalletBackend::new(state)),
        };
        (core, rx)
    }

    #[tokio::test]
    async fn test_handles_deliver_in_order() {
        let (ui_handle, mut core_handle) = create_handles();

        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        ui_handle.send_msg(first, UICoreMsg::FetchUtxoCounts).await;
        ui_handle.send_msg(second, UICoreMsg::UtxoConsolidate).await;

        let got = core_handle.recv().await.unwrap();
        assert_eq!(got.id, first);
        assert_eq!(got.msg, UICoreMsg::FetchUtxoCounts);

        let got = core_handle.recv().await.unwrap();
        assert_eq!(got.id, second);
        assert_eq!(got.msg, UICoreMsg::UtxoConsolidate);

        drop(ui_handle);
        assert!(core_handle.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_consolidation_is_reported_with_id() {
        let (core, mut rx) = setup_core(WalletState::default());
        let id = Uuid::new_v4();

        handle_ui_msg(
            &core,
            UICoreMsgPacket {
                id,
                msg: UICoreMsg::UtxoConsolidate,
            },
        )
        .await;
        drop(core);

        let mut msgs = vec![];
        while let Some(packet) = rx.next().await {
            assert_eq!(packet.id, Some(id));
            msgs.push(packet.msg);
        }

        assert_eq!(msgs.first(), Some(&CoreUIMsg::ConsolidatePending));
        assert!(matches!(
            msgs.last(),
            Some(CoreUIMsg::ConsolidateFailed(reason)) if reason == "Nothing to consolidate"
        ));
    }

    #[tokio::test]
    async fn test_fetch_utxo_counts() {
        let mut state = WalletState::default();
        state.utxo_counts.set(UtxoCounts::OTHER, 401);
        let (core, mut rx) = setup_core(state);

        handle_ui_msg(
            &core,
            UICoreMsgPacket {
                id: Uuid::new_v4(),
                msg: UICoreMsg::FetchUtxoCounts,
            },
        )
        .await;

        match rx.next().await.map(|p| p.msg) {
            Some(CoreUIMsg::UtxoCountsUpdated(counts)) => assert_eq!(counts.other(), 401),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
