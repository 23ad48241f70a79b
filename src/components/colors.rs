use iced::Color;

pub const BACKGROUND_GREY: Color = Color::from_rgb(23.0 / 255.0, 23.0 / 255.0, 25.0 / 255.0);
pub const ACCENT_GREEN: Color = Color::from_rgb(40.0 / 255.0, 164.0 / 255.0, 127.0 / 255.0);
pub const ACCENT_RED: Color = Color::from_rgb(250.0 / 255.0, 0.0 / 255.0, 80.0 / 255.0);
pub const WARNING_YELLOW: Color = Color::from_rgb(255.0 / 255.0, 165.0 / 255.0, 0.0 / 255.0);
