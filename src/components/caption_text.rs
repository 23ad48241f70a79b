use iced::widget::text;
use iced::Element;

use crate::Message;

use super::subtitle;

pub fn h_caption_text<'a>(string: impl Into<String>) -> Element<'a, Message> {
    let string: String = string.into();
    text(string).size(14).style(subtitle).into()
}
