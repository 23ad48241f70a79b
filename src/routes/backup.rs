use iced::widget::column;
use iced::Element;

use crate::components::{
    basic_layout, h_caption_text, h_link_button, h_screen_header, SvgIcon, ACCOUNT_SYNC_HELP_URL,
};
use crate::{FiatBalanceWallet, Message};

pub fn backup(wallet: &FiatBalanceWallet) -> Element<Message> {
    let i18n = &wallet.i18n;

    let status = if wallet.has_synced {
        i18n.tr("A backup of your wallet is synced with lbry.tv.")
    } else {
        i18n.tr("Your wallet is not currently synced with lbry.tv. You are in control of backing up your wallet.")
    };

    let open_data_dir = h_link_button(i18n.tr("Open wallet folder"), Some(SvgIcon::ExternalLink))
        .on_press(Message::OpenDataDirectory);
    let learn_more = h_link_button(i18n.tr("Learn more"), Some(SvgIcon::ExternalLink))
        .on_press(Message::UrlClicked(ACCOUNT_SYNC_HELP_URL.to_string()));

    let column = column![
        h_screen_header(i18n.tr("Backup"), wallet.has_synced),
        h_caption_text(status),
        h_caption_text(i18n.tr("Copy the wallet folder somewhere safe to back it up by hand.")),
        open_data_dir,
        learn_more,
    ]
    .spacing(16);

    basic_layout(column)
}
