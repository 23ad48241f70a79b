use iced::widget::{checkbox, column, text};
use iced::Element;

use crate::components::{basic_layout, h_caption_text, h_screen_header};
use crate::config::BuildTarget;
use crate::{FiatBalanceWallet, Message};

pub fn settings(wallet: &FiatBalanceWallet) -> Element<Message> {
    let i18n = &wallet.i18n;
    let config = &wallet.config;

    let sync_notice = checkbox(
        i18n.tr("Show wallet backup status"),
        config.target == BuildTarget::App,
    )
    .on_toggle(Message::SetShowSyncNotice);

    let column = column![
        h_screen_header(i18n.tr("Account Configuration"), wallet.has_synced),
        sync_notice,
        text(format!("{}: {}", i18n.tr("Currency"), config.currency)).size(18),
        text(format!("{}: {}", i18n.tr("Credits"), config.credit_symbol)).size(18),
        h_caption_text(i18n.tr("Edit the config file in the wallet folder to change these.")),
    ]
    .spacing(16);

    basic_layout(column)
}
