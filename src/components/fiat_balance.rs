//! The wallet's fiat balance card.
//!
//! Rendering goes through [`FiatBalanceModel`], a plain description of what
//! the card shows for a given set of props, so the conditional parts of the
//! card can be checked without a renderer.

use iced::widget::{column, container, horizontal_space, row, text, Column};
use iced::{Alignment, Element, Length};
use log::{debug, info, warn};

use crate::balance::{
    other_count, should_prompt_consolidation, AccountDetails, BalanceSnapshot, PendingOperations,
    UtxoCounts,
};
use crate::i18n::I18n;
use crate::routes::Route;
use crate::Message;

use super::{
    bold_text, format_credits, format_fiat, h_button, h_icon_button, h_link_button,
    light_container_style, map_icon, subtitle, warning_text, SvgIcon,
};

pub const ACCOUNT_SYNC_HELP_URL: &str = "https://lbry.com/faq/account-sync";
pub const TRANSACTION_TYPES_HELP_URL: &str = "https://lbry.com/faq/transaction-types";

/// Locked amounts are shown to this many decimal places.
pub const CREDIT_PRECISION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    MassTipUnlock,
}

/// Things the card asks the rest of the wallet to do. None of these report
/// back, results arrive later as new props.
pub trait WalletActions {
    fn open_modal(&mut self, modal: ModalId);

    fn fetch_utxo_counts(&mut self);

    fn utxo_consolidate(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiatBalanceMessage {
    ToggleDetails,
    UnlockTips,
    ConsolidateNow,
}

#[derive(Debug, Clone, Copy)]
pub struct FiatBalanceProps<'a> {
    pub snapshot: BalanceSnapshot,
    pub pending: PendingOperations,
    pub utxo_counts: Option<&'a UtxoCounts>,
    pub account_details: Option<&'a AccountDetails>,
    pub has_synced: bool,
    pub show_sync_notice: bool,
    pub currency: &'a str,
    pub credit_symbol: &'a str,
    /// Bumped whenever the fetch collaborator is replaced.
    pub fetcher_generation: u64,
}

impl Default for FiatBalanceProps<'_> {
    fn default() -> Self {
        Self {
            snapshot: BalanceSnapshot::default(),
            pending: PendingOperations::default(),
            utxo_counts: None,
            account_details: None,
            has_synced: false,
            show_sync_notice: true,
            currency: "USD",
            credit_symbol: "LBC",
            fetcher_generation: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectDeps {
    balance_bits: u64,
    details_expanded: bool,
    fetcher_generation: u64,
}

/// Per-instance state of the card. Build a fresh one on every mount.
#[derive(Default, Debug)]
pub struct WalletFiatBalance {
    details_expanded: bool,
    last_effect: Option<EffectDeps>,
}

impl WalletFiatBalance {
    pub fn details_expanded(&self) -> bool {
        self.details_expanded
    }

    pub fn update(
        &mut self,
        message: FiatBalanceMessage,
        props: &FiatBalanceProps,
        actions: &mut dyn WalletActions,
    ) {
        match message {
            FiatBalanceMessage::ToggleDetails => {
                self.details_expanded = !self.details_expanded;
                debug!("Balance details expanded: {}", self.details_expanded);
            }
            FiatBalanceMessage::UnlockTips => {
                if props.pending.operation_pending() {
                    warn!("Ignoring tip unlock while another operation is pending");
                    return;
                }
                actions.open_modal(ModalId::MassTipUnlock);
            }
            FiatBalanceMessage::ConsolidateNow => {
                if props.pending.operation_pending() {
                    warn!("Ignoring consolidate while another operation is pending");
                    return;
                }
                info!("Consolidating utxos");
                actions.utxo_consolidate();
            }
        }

        self.run_effects(props, actions);
    }

    /// Fetches utxo counts for large wallets once the details are open.
    ///
    /// Runs again only when the balance, the toggle or the fetcher changed
    /// since the last run. Returns whether a fetch was requested.
    pub fn run_effects(&mut self, props: &FiatBalanceProps, actions: &mut dyn WalletActions) -> bool {
        let deps = EffectDeps {
            balance_bits: props.snapshot.balance.to_bits(),
            details_expanded: self.details_expanded,
            fetcher_generation: props.fetcher_generation,
        };

        if self.last_effect == Some(deps) {
            return false;
        }
        self.last_effect = Some(deps);

        if props.snapshot.is_large_wallet() && self.details_expanded {
            debug!("Fetching utxo counts for balance {}", props.snapshot.balance);
            actions.fetch_utxo_counts();
            return true;
        }

        false
    }

    pub fn model(&self, props: &FiatBalanceProps, i18n: &I18n) -> FiatBalanceModel {
        FiatBalanceModel::new(props, self.details_expanded, i18n)
    }

    pub fn view<'a>(&self, props: &FiatBalanceProps, i18n: &I18n) -> Element<'a, Message> {
        fiat_balance_card(self.model(props, i18n))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtitle {
    /// Some of the balance is locked, what's shown can still be withdrawn.
    Withdrawable,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockedKind {
    Tips,
    Claims,
    Supports,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LockedLineItem {
    pub kind: LockedKind,
    pub label: String,
    pub hint: String,
    pub amount: String,
    /// `Some(enabled)` when the line has an unlock button.
    pub unlock: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncNotice {
    BackedUp { message: String, help_url: String },
    NotBackedUp { message: String, backup: Route },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidationPrompt {
    pub message: String,
    pub action_label: String,
    pub enabled: bool,
    pub help_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FiatBalanceModel {
    pub title: String,
    pub subtitle: Subtitle,
    pub subtitle_text: String,
    pub received_total: String,
    pub withdrawn_total: String,
    pub toggle_label: String,
    pub toggle_icon: SvgIcon,
    pub details: Option<Vec<LockedLineItem>>,
    pub sync_notice: Option<SyncNotice>,
    pub receive_payout_label: String,
    pub account_configuration_label: String,
    pub consolidation: Option<ConsolidationPrompt>,
    pub operation_pending: bool,
}

impl FiatBalanceModel {
    pub fn new(props: &FiatBalanceProps, details_expanded: bool, i18n: &I18n) -> Self {
        let snapshot = &props.snapshot;
        let operation_pending = props.pending.operation_pending();

        let received = props.account_details.map(AccountDetails::total_received);
        let withdrawn = props.account_details.map(AccountDetails::total_withdrawn);

        let subtitle = if snapshot.total_locked() > 0. {
            Subtitle::Withdrawable
        } else {
            Subtitle::Total
        };
        let subtitle_text = match subtitle {
            Subtitle::Withdrawable => i18n.tr(
                "This is your remaining balance that can still be withdrawn to your bank account",
            ),
            Subtitle::Total => i18n.tr("Your total balance."),
        };

        let (toggle_label, toggle_icon) = if details_expanded {
            (i18n.tr("View less"), SvgIcon::ChevronUp)
        } else {
            (i18n.tr("View more"), SvgIcon::ChevronDown)
        };

        let details = details_expanded.then(|| {
            let amount = |value: f64| format_credits(value, CREDIT_PRECISION, props.credit_symbol);
            vec![
                LockedLineItem {
                    kind: LockedKind::Tips,
                    label: i18n.tr("...earned from others"),
                    hint: i18n.tr("Unlock to spend"),
                    amount: amount(snapshot.tips_balance),
                    unlock: (snapshot.tips_balance != 0.).then_some(!operation_pending),
                },
                LockedLineItem {
                    kind: LockedKind::Claims,
                    label: i18n.tr("...on initial publishes"),
                    hint: i18n.tr("Delete or edit past content to spend"),
                    amount: amount(snapshot.claims_balance),
                    unlock: None,
                },
                LockedLineItem {
                    kind: LockedKind::Supports,
                    label: i18n.tr("...supporting content"),
                    hint: i18n.tr("Delete supports to spend"),
                    amount: amount(snapshot.supports_balance),
                    unlock: None,
                },
            ]
        });

        let sync_notice = props.show_sync_notice.then(|| {
            if props.has_synced {
                SyncNotice::BackedUp {
                    message: i18n.tr("A backup of your wallet is synced with lbry.tv."),
                    help_url: ACCOUNT_SYNC_HELP_URL.to_string(),
                }
            } else {
                SyncNotice::NotBackedUp {
                    message: i18n.tr(
                        "Your wallet is not currently synced with lbry.tv. You are in control of backing up your wallet.",
                    ),
                    backup: Route::Backup,
                }
            }
        });

        let consolidation = should_prompt_consolidation(
            other_count(props.utxo_counts),
            &props.pending,
        )
        .then(|| ConsolidationPrompt {
            message: i18n.tr(
                "Your wallet has a lot of change lying around. Consolidating will speed up your transactions. This could take some time.",
            ),
            action_label: if props.pending.consolidation_active() {
                i18n.tr("Consolidating...")
            } else {
                i18n.tr("Consolidate Now")
            },
            enabled: !operation_pending,
            help_url: TRANSACTION_TYPES_HELP_URL.to_string(),
        });

        Self {
            title: format!("{} {}", format_fiat(received), props.currency),
            subtitle,
            subtitle_text,
            received_total: format!("${} {}", format_fiat(received), i18n.tr("Received Total")),
            withdrawn_total: format!("${} {}", format_fiat(withdrawn), i18n.tr("Withdrawn")),
            toggle_label,
            toggle_icon,
            details,
            sync_notice,
            receive_payout_label: i18n.tr("Receive Payout"),
            account_configuration_label: i18n.tr("Account Configuration"),
            consolidation,
            operation_pending,
        }
    }
}

fn locked_line<'a>(item: LockedLineItem) -> Element<'a, Message> {
    let label = column![
        text(item.label).size(16),
        text(format!("({})", item.hint)).size(14).style(subtitle),
    ]
    .spacing(2);

    let unlock = item.unlock.map(|enabled| {
        h_icon_button(SvgIcon::Unlock)
            .on_press_maybe(enabled.then_some(Message::FiatBalance(FiatBalanceMessage::UnlockTips)))
    });

    row![label, horizontal_space()]
        .push_maybe(unlock)
        .push(text(item.amount).size(16))
        .align_y(Alignment::Center)
        .spacing(8)
        .into()
}

fn sync_notice<'a>(notice: SyncNotice) -> Element<'a, Message> {
    match notice {
        SyncNotice::BackedUp { message, help_url } => row![
            map_icon(SvgIcon::Shield, 16., 16.),
            text(message).size(14).style(subtitle),
            h_link_button(String::new(), Some(SvgIcon::ExternalLink))
                .on_press(Message::UrlClicked(help_url)),
        ],
        SyncNotice::NotBackedUp { message, backup } => row![
            map_icon(SvgIcon::ShieldAlert, 16., 16.),
            text(message).size(14).style(warning_text),
            h_link_button(String::new(), Some(SvgIcon::ExternalLink))
                .on_press(Message::Navigate(backup)),
        ],
    }
    .align_y(Alignment::Center)
    .spacing(8)
    .into()
}

fn consolidation_prompt<'a>(prompt: ConsolidationPrompt) -> Element<'a, Message> {
    let action = h_link_button(prompt.action_label, None).on_press_maybe(
        prompt
            .enabled
            .then_some(Message::FiatBalance(FiatBalanceMessage::ConsolidateNow)),
    );
    let help = h_link_button(String::new(), Some(SvgIcon::ExternalLink))
        .on_press(Message::UrlClicked(prompt.help_url));

    column![
        text(prompt.message).size(14).style(subtitle),
        row![action, help].align_y(Alignment::Center).spacing(8),
    ]
    .spacing(4)
    .into()
}

fn fiat_balance_card<'a>(model: FiatBalanceModel) -> Element<'a, Message> {
    let title = row![
        map_icon(SvgIcon::Finance, 18., 18.),
        bold_text(model.title, 32)
    ]
    .align_y(Alignment::Center)
    .spacing(8);

    let toggle = h_link_button(model.toggle_label, Some(model.toggle_icon))
        .on_press(Message::FiatBalance(FiatBalanceMessage::ToggleDetails));

    let details = model.details.map(|items| {
        items
            .into_iter()
            .fold(Column::new().spacing(12), |col, item| {
                col.push(locked_line(item))
            })
    });

    let actions = row![
        h_button(&model.receive_payout_label, SvgIcon::UpRight)
            .on_press(Message::Navigate(Route::Send)),
        h_button(&model.account_configuration_label, SvgIcon::Settings)
            .on_press(Message::Navigate(Route::Settings)),
    ]
    .spacing(16);

    let content = column![
        title,
        text(model.subtitle_text).size(16).style(subtitle),
        text(model.received_total).size(18),
        row![text(model.withdrawn_total).size(18), toggle]
            .align_y(Alignment::Center)
            .spacing(12),
    ]
    .push_maybe(details)
    .push_maybe(model.sync_notice.map(sync_notice))
    .push(actions)
    .push_maybe(model.consolidation.map(consolidation_prompt))
    .spacing(16);

    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(light_container_style)
        .into()
}
