use crate::bridge::run_core;
use crate::components::{
    format_credits, BasicModalState, ConfirmModalState, FiatBalanceMessage, FiatBalanceProps,
    ModalId, WalletActions, WalletFiatBalance, ACCENT_GREEN, ACCENT_RED, BACKGROUND_GREY,
    CREDIT_PRECISION,
};
use crate::config::{write_config, BuildTarget, Config};
use crate::core::{data_dir, CoreUIMsg, CoreUIMsgPacket, UICoreMsg};
use crate::i18n::I18n;
use balance::{AccountDetails, BalanceSnapshot, PendingOperations, UtxoCounts};
use iced::Color;
use iced::Element;
use iced::Subscription;
use iced::Task;
use log::{debug, error, info};
use routes::Route;
use std::sync::Arc;
use uuid::Uuid;

pub mod backend;
pub mod balance;
pub mod bridge;
pub mod components;
mod config;
pub mod core;
pub mod i18n;
pub mod routes;

// This starts the program. Importantly, it registers the update and view methods, along with a subscription.
pub fn main() -> iced::Result {
    pretty_env_logger::init();

    iced::application(
        "Wallet Balance",
        FiatBalanceWallet::update,
        FiatBalanceWallet::view,
    )
    .theme(FiatBalanceWallet::theme)
    .window_size((720., 860.))
    .subscription(FiatBalanceWallet::subscription)
    .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    // Setup
    UIHandlerLoaded(Arc<bridge::UIHandle>),
    ConfigLoaded(Config),
    InitError(String),
    // Local state changes
    Navigate(Route),
    FiatBalance(FiatBalanceMessage),
    SetConfirmModal(Option<ConfirmModalState>),
    SetBasicModal(Option<BasicModalState>),
    UrlClicked(String),
    OpenUrl(String),
    OpenDataDirectory,
    // Config commands
    SetShowSyncNotice(bool),
    // Async commands we fire from the UI to core
    Noop,
    MassUnlockTips,
    // Core messages we get from core
    CoreMessage(CoreUIMsgPacket),
}

/// Turns the balance card's requests into core messages and modals.
#[derive(Default)]
struct Dispatcher {
    ui_handle: Option<Arc<bridge::UIHandle>>,
    modals: Vec<ModalId>,
    tasks: Vec<Task<Message>>,
}

impl WalletActions for Dispatcher {
    fn open_modal(&mut self, modal: ModalId) {
        self.modals.push(modal);
    }

    fn fetch_utxo_counts(&mut self) {
        self.tasks
            .push(send_to_core(self.ui_handle.clone(), UICoreMsg::FetchUtxoCounts));
    }

    fn utxo_consolidate(&mut self) {
        self.tasks
            .push(send_to_core(self.ui_handle.clone(), UICoreMsg::UtxoConsolidate));
    }
}

fn send_to_core(ui_handle: Option<Arc<bridge::UIHandle>>, msg: UICoreMsg) -> Task<Message> {
    let Some(ui_handle) = ui_handle else {
        error!("Core isn't running, dropping {msg:?}");
        return Task::none();
    };

    let id = Uuid::new_v4();
    debug!("Sending {msg:?} to core as {id}");
    Task::perform(
        async move { ui_handle.send_msg(id, msg).await },
        |_| Message::Noop,
    )
}

// This is the UI state. It should only contain data that is directly rendered by the UI
// More complicated state should be in Core, and bridged to the UI in a UI-friendly format.
#[derive(Default, Debug)]
pub struct FiatBalanceWallet {
    ui_handle: Option<Arc<bridge::UIHandle>>,
    // bumped every time we get a new handle to the core
    fetcher_generation: u64,
    config: Config,
    i18n: I18n,
    active_route: Route,
    // Wallet
    balances: BalanceSnapshot,
    account_details: Option<AccountDetails>,
    utxo_counts: Option<UtxoCounts>,
    has_synced: bool,
    pending: PendingOperations,
    // Balance card
    fiat_balance: WalletFiatBalance,
    // Modal
    confirm_modal: Option<ConfirmModalState>,
    basic_modal: Option<BasicModalState>,
}

impl FiatBalanceWallet {
    fn subscription(&self) -> Subscription<Message> {
        Subscription::run(run_core)
    }

    fn fiat_balance_props(&self) -> FiatBalanceProps<'_> {
        FiatBalanceProps {
            snapshot: self.balances,
            pending: self.pending,
            utxo_counts: self.utxo_counts.as_ref(),
            account_details: self.account_details.as_ref(),
            has_synced: self.has_synced,
            show_sync_notice: self.config.shows_sync_notice(),
            currency: &self.config.currency,
            credit_symbol: &self.config.credit_symbol,
            fetcher_generation: self.fetcher_generation,
        }
    }

    /// Feeds a message to the balance card, or just re-runs its effects.
    fn drive_fiat_balance(&mut self, message: Option<FiatBalanceMessage>) -> Task<Message> {
        if self.active_route != Route::Home {
            return Task::none();
        }

        let mut card = std::mem::take(&mut self.fiat_balance);
        let mut dispatcher = Dispatcher {
            ui_handle: self.ui_handle.clone(),
            ..Default::default()
        };

        let props = self.fiat_balance_props();
        match message {
            Some(message) => card.update(message, &props, &mut dispatcher),
            None => {
                card.run_effects(&props, &mut dispatcher);
            }
        }
        self.fiat_balance = card;

        for modal in dispatcher.modals {
            self.open_modal(modal);
        }

        Task::batch(dispatcher.tasks)
    }

    fn open_modal(&mut self, modal: ModalId) {
        match modal {
            ModalId::MassTipUnlock => {
                let tips = format_credits(
                    self.balances.tips_balance,
                    CREDIT_PRECISION,
                    &self.config.credit_symbol,
                );
                self.confirm_modal = Some(ConfirmModalState {
                    title: self.i18n.tr("Unlock Tips"),
                    description: format!(
                        "{} {tips}",
                        self.i18n.tr("Move every tip you've received into your spendable balance:")
                    ),
                    confirm_action: Box::new(Message::MassUnlockTips),
                    cancel_action: Box::new(Message::SetConfirmModal(None)),
                    confirm_button_text: self.i18n.tr("Unlock"),
                });
            }
        }
    }

    fn show_error(&mut self, title: &str, reason: String) {
        self.basic_modal = Some(BasicModalState {
            title: self.i18n.tr(title),
            description: reason,
            ..Default::default()
        });
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = self.handle_message(message);
        // Props may have changed, let the card decide whether to fetch
        Task::batch([task, self.drive_fiat_balance(None)])
    }

    fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            // Setup
            Message::UIHandlerLoaded(ui_handle) => {
                info!("Core loaded");
                self.ui_handle = Some(ui_handle);
                self.fetcher_generation += 1;
                Task::none()
            }
            Message::ConfigLoaded(config) => {
                info!("Config loaded: {config:?}");
                self.i18n = I18n::load_or_default(config.locale_file.as_deref());
                self.config = config;
                Task::none()
            }
            Message::InitError(reason) => {
                self.show_error("Could not start the wallet", reason);
                Task::none()
            }
            // Internal app state stuff like navigation
            Message::Navigate(route) => {
                info!("Navigating to {}", route.path());
                if route == Route::Home && self.active_route != Route::Home {
                    // the card remounts, its local state starts over
                    self.fiat_balance = WalletFiatBalance::default();
                }
                self.active_route = route;
                Task::none()
            }
            Message::FiatBalance(msg) => self.drive_fiat_balance(Some(msg)),
            Message::SetConfirmModal(modal_state) => {
                self.confirm_modal = modal_state;
                Task::none()
            }
            Message::SetBasicModal(modal_state) => {
                self.basic_modal = modal_state;
                Task::none()
            }
            Message::UrlClicked(url) => {
                info!("Url clicked: {url}");
                self.confirm_modal = Some(ConfirmModalState {
                    title: self.i18n.tr("Open External Link?"),
                    description: format!("{} {url}", self.i18n.tr("This will open in your browser:")),
                    confirm_action: Box::new(Message::OpenUrl(url)),
                    cancel_action: Box::new(Message::SetConfirmModal(None)),
                    confirm_button_text: self.i18n.tr("Open Link"),
                });
                Task::none()
            }
            Message::OpenUrl(url) => {
                if let Err(e) = opener::open(&url) {
                    error!("Failed to open URL: {e}");
                }
                self.confirm_modal = None;
                Task::none()
            }
            Message::OpenDataDirectory => {
                let path = data_dir();
                if let Err(e) = opener::open(&path) {
                    error!("Failed to open data directory {path:?}: {e}");
                }
                Task::none()
            }
            Message::SetShowSyncNotice(show) => {
                self.config.target = if show {
                    BuildTarget::App
                } else {
                    BuildTarget::Web
                };
                if let Err(e) = write_config(&self.config) {
                    error!("Could not save config: {e}");
                }
                Task::none()
            }
            // Async commands we fire from the UI to core
            Message::Noop => Task::none(),
            Message::MassUnlockTips => {
                self.confirm_modal = None;
                send_to_core(self.ui_handle.clone(), UICoreMsg::MassUnlockTips)
            }
            // Handle any messages we get from core
            Message::CoreMessage(packet) => self.handle_core_msg(packet.msg),
        }
    }

    fn handle_core_msg(&mut self, msg: CoreUIMsg) -> Task<Message> {
        match msg {
            CoreUIMsg::BalanceUpdated(balances) => {
                self.balances = balances;
            }
            CoreUIMsg::AccountDetailsUpdated(details) => {
                self.account_details = details;
            }
            CoreUIMsg::SyncStatus(synced) => {
                self.has_synced = synced;
            }
            CoreUIMsg::UtxoCountsUpdated(counts) => {
                self.utxo_counts = Some(counts);
            }
            CoreUIMsg::UtxoCountsFailed(reason) => {
                error!("Could not fetch utxo counts: {reason}");
            }
            CoreUIMsg::ConsolidatePending => {
                self.pending.consolidate_is_pending = true;
            }
            CoreUIMsg::Consolidating => {
                self.pending.consolidate_is_pending = false;
                self.pending.consolidating_utxos = true;
            }
            CoreUIMsg::ConsolidateSuccess => {
                info!("Consolidation done");
                self.pending.consolidate_is_pending = false;
                self.pending.consolidating_utxos = false;
                return send_to_core(self.ui_handle.clone(), UICoreMsg::RefreshWallet);
            }
            CoreUIMsg::ConsolidateFailed(reason) => {
                self.pending.consolidate_is_pending = false;
                self.pending.consolidating_utxos = false;
                self.show_error("Consolidation failed", reason);
            }
            CoreUIMsg::MassClaimPending => {
                self.pending.mass_claim_is_pending = true;
            }
            CoreUIMsg::MassClaimingTips => {
                self.pending.mass_claim_is_pending = false;
                self.pending.mass_claiming_tips = true;
            }
            CoreUIMsg::MassClaimSuccess => {
                info!("Tips unlocked");
                self.pending.mass_claim_is_pending = false;
                self.pending.mass_claiming_tips = false;
                return send_to_core(self.ui_handle.clone(), UICoreMsg::RefreshWallet);
            }
            CoreUIMsg::MassClaimFailed(reason) => {
                self.pending.mass_claim_is_pending = false;
                self.pending.mass_claiming_tips = false;
                self.show_error("Unlocking tips failed", reason);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<Message> {
        let active_route = match self.active_route {
            Route::Home => crate::routes::home(self),
            Route::Send => crate::routes::send(self),
            Route::Backup => crate::routes::backup(self),
            Route::Settings => crate::routes::settings(self),
        };

        let content_with_confirm =
            crate::components::confirm_modal(active_route, self.confirm_modal.as_ref());

        crate::components::basic_modal(content_with_confirm, self.basic_modal.as_ref())
    }

    fn theme(&self) -> iced::Theme {
        iced::Theme::custom(
            String::from("Custom"),
            iced::theme::Palette {
                background: BACKGROUND_GREY,
                primary: ACCENT_RED,
                text: Color::WHITE,
                success: ACCENT_GREEN,
                danger: ACCENT_RED,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_msg(wallet: &mut FiatBalanceWallet, msg: CoreUIMsg) {
        let _ = wallet.update(Message::CoreMessage(CoreUIMsgPacket { id: None, msg }));
    }

    #[test]
    fn test_consolidation_flags_follow_core() {
        let mut wallet = FiatBalanceWallet::default();

        core_msg(&mut wallet, CoreUIMsg::ConsolidatePending);
        assert!(wallet.pending.consolidate_is_pending);
        assert!(wallet.pending.operation_pending());

        core_msg(&mut wallet, CoreUIMsg::Consolidating);
        assert!(!wallet.pending.consolidate_is_pending);
        assert!(wallet.pending.consolidating_utxos);

        core_msg(&mut wallet, CoreUIMsg::ConsolidateSuccess);
        assert!(!wallet.pending.operation_pending());
        assert!(wallet.basic_modal.is_none());
    }

    #[test]
    fn test_failed_claim_shows_error() {
        let mut wallet = FiatBalanceWallet::default();

        core_msg(&mut wallet, CoreUIMsg::MassClaimPending);
        core_msg(&mut wallet, CoreUIMsg::MassClaimingTips);
        assert!(wallet.pending.mass_claiming_tips);

        core_msg(
            &mut wallet,
            CoreUIMsg::MassClaimFailed("No tips to unlock".to_string()),
        );
        assert!(!wallet.pending.operation_pending());
        let modal = wallet.basic_modal.as_ref().expect("should show an error");
        assert_eq!(modal.description, "No tips to unlock");
    }

    #[test]
    fn test_unlock_tips_opens_modal() {
        let mut wallet = FiatBalanceWallet::default();
        core_msg(
            &mut wallet,
            CoreUIMsg::BalanceUpdated(BalanceSnapshot {
                balance: 1.,
                tips_balance: 2.5,
                ..Default::default()
            }),
        );

        let _ = wallet.update(Message::FiatBalance(FiatBalanceMessage::UnlockTips));

        let modal = wallet.confirm_modal.as_ref().expect("should ask first");
        assert!(modal.description.ends_with("2.5000 LBC"));
        assert!(matches!(*modal.confirm_action, Message::MassUnlockTips));

        let _ = wallet.update(Message::MassUnlockTips);
        assert!(wallet.confirm_modal.is_none());
    }

    #[test]
    fn test_unlock_ignored_while_pending() {
        let mut wallet = FiatBalanceWallet::default();
        core_msg(&mut wallet, CoreUIMsg::ConsolidatePending);

        let _ = wallet.update(Message::FiatBalance(FiatBalanceMessage::UnlockTips));
        assert!(wallet.confirm_modal.is_none());
    }

    #[test]
    fn test_card_remounts_when_returning_home() {
        let mut wallet = FiatBalanceWallet::default();

        let _ = wallet.update(Message::FiatBalance(FiatBalanceMessage::ToggleDetails));
        assert!(wallet.fiat_balance.details_expanded());

        // staying home keeps the card as is
        let _ = wallet.update(Message::Navigate(Route::Home));
        assert!(wallet.fiat_balance.details_expanded());

        let _ = wallet.update(Message::Navigate(Route::Settings));
        // the card isn't mounted, its messages go nowhere
        let _ = wallet.update(Message::FiatBalance(FiatBalanceMessage::ToggleDetails));
        assert!(wallet.fiat_balance.details_expanded());

        let _ = wallet.update(Message::Navigate(Route::Home));
        assert!(!wallet.fiat_balance.details_expanded());
    }

    #[test]
    fn test_wallet_state_from_core() {
        let mut wallet = FiatBalanceWallet::default();

        let details = AccountDetails {
            total_tipped: 500,
            total_withdrawn: 0,
        };
        core_msg(&mut wallet, CoreUIMsg::AccountDetailsUpdated(Some(details)));
        core_msg(&mut wallet, CoreUIMsg::SyncStatus(true));
        let mut counts = UtxoCounts::default();
        counts.set(UtxoCounts::OTHER, 401);
        core_msg(&mut wallet, CoreUIMsg::UtxoCountsUpdated(counts));

        let props = wallet.fiat_balance_props();
        assert_eq!(props.account_details, Some(&details));
        assert!(props.has_synced);
        assert_eq!(props.utxo_counts.map(UtxoCounts::other), Some(401));

        let model = wallet.fiat_balance.model(&props, &wallet.i18n);
        assert_eq!(model.title, "5.00 USD");
        assert!(model.consolidation.is_some());
    }
}
