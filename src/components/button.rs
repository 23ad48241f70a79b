use iced::{
    widget::{
        button::{self, Status},
        center, row, text, Button,
    },
    Border, Color, Length, Shadow, Theme,
};

use crate::Message;

use super::{darken, lighten, link, map_icon, SvgIcon};

pub fn h_button<'a>(text_str: impl Into<String>, icon: SvgIcon) -> Button<'a, Message, Theme> {
    let text_str: String = text_str.into();
    let svg = map_icon(icon, 24., 24.);
    let content = row![svg, text(text_str).size(20.)]
        .align_y(iced::Alignment::Center)
        .spacing(16);

    Button::new(center(content))
        .style(move |theme, status| {
            let gray = lighten(theme.palette().background, 0.5);

            let border_color = if matches!(status, Status::Disabled) {
                gray
            } else {
                Color::WHITE
            };

            let border = Border {
                color: border_color,
                width: 2.,
                radius: (8.).into(),
            };

            let background = match status {
                Status::Hovered => lighten(theme.palette().background, 0.1),
                Status::Pressed => darken(Color::BLACK, 0.1),
                _ => theme.palette().background,
            };

            let text_color = if matches!(status, Status::Disabled) {
                gray
            } else {
                Color::WHITE
            };

            button::Style {
                background: Some(background.into()),
                text_color,
                border,
                shadow: Shadow::default(),
            }
        })
        .width(Length::Fill)
        .height(Length::Fixed(56.))
}

pub fn h_small_button<'a>(text_str: impl Into<String>, icon: SvgIcon) -> Button<'a, Message, Theme> {
    let text_str: String = text_str.into();
    let svg = map_icon(icon, 16., 16.);
    let content = if text_str.is_empty() {
        row![svg].align_y(iced::Alignment::Center)
    } else {
        row![svg, text(text_str).size(16.)]
            .align_y(iced::Alignment::Center)
            .spacing(8)
    };

    Button::new(center(content))
        .style(|theme, status| {
            let border = Border {
                color: Color::WHITE,
                width: 1.,
                radius: (8.).into(),
            };

            let background = match status {
                Status::Hovered => lighten(theme.palette().background, 0.1),
                Status::Pressed => darken(Color::BLACK, 0.1),
                _ => theme.palette().background,
            };

            button::Style {
                background: Some(background.into()),
                text_color: Color::WHITE,
                border,
                shadow: Shadow::default(),
            }
        })
        .height(Length::Fixed(40.))
        .padding([0, 16])
}

pub fn h_icon_button<'a>(icon: SvgIcon) -> Button<'a, Message, Theme> {
    let svg = map_icon(icon, 16., 16.);

    Button::new(center(svg))
        .style(|theme, status| {
            let background = match status {
                Status::Hovered => lighten(theme.palette().background, 0.1),
                Status::Pressed => darken(Color::BLACK, 0.1),
                Status::Disabled => darken(theme.palette().background, 0.05),
                _ => theme.palette().background,
            };

            button::Style {
                background: Some(background.into()),
                text_color: Color::WHITE,
                border: Border {
                    color: Color::WHITE,
                    width: 0.,
                    radius: (4.).into(),
                },
                shadow: Shadow::default(),
            }
        })
        .width(Length::Fixed(28.))
        .height(Length::Fixed(28.))
}

/// Text that looks like a link. Pass an icon to show it after the label.
pub fn h_link_button<'a>(text_str: String, icon: Option<SvgIcon>) -> Button<'a, Message, Theme> {
    let content = row![text(text_str).size(16.)]
        .push_maybe(icon.map(|icon| map_icon(icon, 16., 16.)))
        .align_y(iced::Alignment::Center)
        .spacing(4);

    Button::new(content)
        .style(|_theme, status| {
            let text_color = match status {
                Status::Hovered | Status::Pressed => Color::WHITE,
                Status::Disabled => darken(link(), 0.2),
                Status::Active => lighten(link(), 0.2),
            };

            button::Style {
                background: None,
                text_color,
                border: Border::default(),
                shadow: Shadow::default(),
            }
        })
        .padding(0)
}
