use iced::widget::container;
use iced::{widget::text::Style, Border, Color, Theme};

use super::{lighten, BACKGROUND_GREY, WARNING_YELLOW};

use iced::{
    font,
    widget::{text, Text},
    Font,
};

pub fn subtitle(theme: &Theme) -> Style {
    let gray = lighten(theme.palette().background, 0.5);
    Style { color: Some(gray) }
}

pub fn warning_text(_theme: &Theme) -> Style {
    Style {
        color: Some(WARNING_YELLOW),
    }
}

pub fn link() -> Color {
    // This is the same theme.palette().background just without needing `Theme`
    lighten(BACKGROUND_GREY, 0.5)
}

pub fn gray() -> Color {
    lighten(BACKGROUND_GREY, 0.5)
}

pub fn light_container_style(theme: &Theme) -> container::Style {
    let gray = lighten(theme.palette().background, 0.05);
    let border_gray = lighten(theme.palette().background, 0.1);

    container::Style {
        text_color: None,
        background: Some(gray.into()),
        border: Border {
            color: border_gray,
            width: 1.,
            radius: (8.).into(),
        },
        shadow: Default::default(),
    }
}

const BOLD_FONT: Font = Font {
    family: font::Family::SansSerif,
    weight: font::Weight::Bold,
    stretch: font::Stretch::Normal,
    style: font::Style::Normal,
};

pub fn bold_text(content: String, size: u16) -> Text<'static> {
    text(content).font(BOLD_FONT).size(size)
}
