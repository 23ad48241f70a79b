use iced::widget::{button, center, column, container, horizontal_space, row, stack, text};
use iced::{Color, Element, Length, Shadow, Theme, Vector};

use crate::Message;

use super::{h_small_button, light_container_style, SvgIcon};

#[derive(Debug, Clone)]
pub struct ConfirmModalState {
    pub title: String,
    pub description: String,
    pub confirm_action: Box<Message>,
    pub cancel_action: Box<Message>,
    pub confirm_button_text: String,
}

impl Default for ConfirmModalState {
    fn default() -> Self {
        Self {
            title: "Confirm Action".to_string(),
            description: "Are you sure you want to proceed?".to_string(),
            confirm_action: Box::new(Message::SetConfirmModal(None)),
            cancel_action: Box::new(Message::SetConfirmModal(None)),
            confirm_button_text: "Confirm".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BasicModalState {
    pub title: String,
    pub description: String,
    pub close_action: Box<Message>,
}

impl Default for BasicModalState {
    fn default() -> Self {
        Self {
            title: "Information".to_string(),
            description: String::new(),
            close_action: Box::new(Message::SetBasicModal(None)),
        }
    }
}

fn modal_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.palette().background.into()),
        text_color: Some(theme.palette().text),
        border: light_container_style(theme).border,
        shadow: Shadow {
            color: Color::from_rgba8(0, 0, 0, 0.5),
            offset: Vector::new(4.0, 4.0),
            blur_radius: 8.0,
        },
    }
}

fn with_overlay<'a>(
    content: Element<'a, Message>,
    modal_content: Element<'a, Message>,
    dismiss: Message,
) -> Element<'a, Message> {
    stack![
        content,
        // This layer blocks all pointer events from reaching the content below
        button(container(text("")).width(Length::Fill).height(Length::Fill))
            .on_press(dismiss)
            .style(|_theme: &Theme, _state| button::Style::default()),
        container(center(modal_content))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(
                    Color {
                        a: 0.8,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }),
    ]
    .into()
}

pub fn confirm_modal<'a>(
    content: Element<'a, Message>,
    state: Option<&'a ConfirmModalState>,
) -> Element<'a, Message> {
    let Some(state) = state else {
        return content;
    };

    let modal_content = container(
        column![
            text(&state.title).size(24),
            text(&state.description),
            row![
                h_small_button("Cancel", SvgIcon::SmallClose)
                    .on_press((*state.cancel_action).clone()),
                h_small_button(state.confirm_button_text.as_str(), SvgIcon::SmallCheck)
                    .on_press((*state.confirm_action).clone()),
            ]
            .spacing(10)
        ]
        .spacing(20),
    )
    .width(400)
    .padding(24)
    .style(modal_style);

    with_overlay(
        content,
        modal_content.into(),
        (*state.cancel_action).clone(),
    )
}

pub fn basic_modal<'a>(
    content: Element<'a, Message>,
    state: Option<&'a BasicModalState>,
) -> Element<'a, Message> {
    let Some(state) = state else {
        return content;
    };

    let header_row = row![
        text(&state.title).size(24),
        horizontal_space(),
        h_small_button("", SvgIcon::SmallClose).on_press((*state.close_action).clone())
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center);

    let modal_content = container(column![header_row, text(&state.description)].spacing(20))
        .width(400)
        .padding(24)
        .style(modal_style);

    with_overlay(
        content,
        modal_content.into(),
        (*state.close_action).clone(),
    )
}
