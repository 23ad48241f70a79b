use iced::widget::column;
use iced::Element;

use crate::components::basic_layout;
use crate::{FiatBalanceWallet, Message};

pub fn home(wallet: &FiatBalanceWallet) -> Element<Message> {
    let card = wallet
        .fiat_balance
        .view(&wallet.fiat_balance_props(), &wallet.i18n);

    basic_layout(column![card].spacing(48))
}
