use iced::{
    widget::{svg::Handle, Svg},
    Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgIcon {
    ArrowLeft,
    ChevronDown,
    ChevronUp,
    ExternalLink,
    Finance,
    Settings,
    Shield,
    ShieldAlert,
    SmallCheck,
    SmallClose,
    Unlock,
    UpRight,
}

macro_rules! icon_handle {
    ($icon:expr) => {
        Svg::new(Handle::from_memory(include_bytes!(concat!(
            "../../assets/icons/",
            $icon
        ))))
    };
}

pub fn map_icon<'a>(icon: SvgIcon, width: f32, height: f32) -> Svg<'a, Theme> {
    match icon {
        SvgIcon::ArrowLeft => icon_handle!("arrow_left.svg"),
        SvgIcon::ChevronDown => icon_handle!("chevron_down.svg"),
        SvgIcon::ChevronUp => icon_handle!("chevron_up.svg"),
        SvgIcon::ExternalLink => icon_handle!("external_link.svg"),
        SvgIcon::Finance => icon_handle!("finance.svg"),
        SvgIcon::Settings => icon_handle!("settings.svg"),
        SvgIcon::Shield => icon_handle!("shield.svg"),
        SvgIcon::ShieldAlert => icon_handle!("shield_alert.svg"),
        SvgIcon::SmallCheck => icon_handle!("small_check.svg"),
        SvgIcon::SmallClose => icon_handle!("small_close.svg"),
        SvgIcon::Unlock => icon_handle!("unlock.svg"),
        SvgIcon::UpRight => icon_handle!("up_right.svg"),
    }
    .width(width)
    .height(height)
}
