use iced::widget::{column, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::routes::Route;
use crate::Message;

use super::{gray, h_small_button, hr, map_icon, SvgIcon};

/// Title bar for the pages you reach from the balance card.
pub fn h_screen_header(title: String, has_synced: bool) -> Element<'static, Message> {
    let back = h_small_button("Back", SvgIcon::ArrowLeft).on_press(Message::Navigate(Route::Home));

    let sync_icon = if has_synced {
        SvgIcon::Shield
    } else {
        SvgIcon::ShieldAlert
    };
    let sync_label = if has_synced { "Backed up" } else { "Not backed up" };
    let sync = row![
        text(sync_label).size(14).color(gray()),
        map_icon(sync_icon, 16., 16.)
    ]
    .align_y(Alignment::Center)
    .spacing(8);

    column![
        row![back, text(title).size(24), horizontal_space(), sync]
            .align_y(Alignment::Center)
            .spacing(16)
            .height(Length::Shrink),
        hr()
    ]
    .spacing(16)
    .into()
}
