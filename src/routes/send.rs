use iced::widget::{column, text};
use iced::Element;

use crate::components::{
    basic_layout, format_credits, format_fiat, h_caption_text, h_screen_header, CREDIT_PRECISION,
};
use crate::{FiatBalanceWallet, Message};

pub fn send(wallet: &FiatBalanceWallet) -> Element<Message> {
    let i18n = &wallet.i18n;
    let spendable = format_credits(
        wallet.balances.balance,
        CREDIT_PRECISION,
        &wallet.config.credit_symbol,
    );

    let remaining = wallet
        .account_details
        .map(|d| d.total_received() - d.total_withdrawn());

    let column = column![
        h_screen_header(i18n.tr("Receive Payout"), wallet.has_synced),
        text(format!("${} {}", format_fiat(remaining), wallet.config.currency)).size(32),
        h_caption_text(i18n.tr(
            "This is your remaining balance that can still be withdrawn to your bank account"
        )),
        text(spendable).size(18),
        h_caption_text(i18n.tr("Spendable now")),
    ]
    .spacing(16);

    basic_layout(column)
}
