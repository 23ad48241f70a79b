use iced::Color;
use palette::{FromColor, Hsl, Srgb};

/// Shown in place of a figure we don't have yet.
pub const MISSING_FIGURE: &str = "--";

pub fn darken(color: Color, amount: f32) -> Color {
    let mut hsl = to_hsl(color);

    hsl.lightness = if hsl.lightness - amount < 0.0 {
        0.0
    } else {
        hsl.lightness - amount
    };

    from_hsl(hsl, color.a)
}

pub fn lighten(color: Color, amount: f32) -> Color {
    let mut hsl = to_hsl(color);

    hsl.lightness = if hsl.lightness + amount > 1.0 {
        1.0
    } else {
        hsl.lightness + amount
    };

    from_hsl(hsl, color.a)
}

fn to_hsl(color: Color) -> Hsl {
    Hsl::from_color(Srgb::new(color.r, color.g, color.b))
}

fn from_hsl(hsl: Hsl, alpha: f32) -> Color {
    let rgb = Srgb::from_color(hsl);
    Color::from_rgba(rgb.red, rgb.green, rgb.blue, alpha)
}

/// Fixed precision with thousands separators, `1234.5` at 2 -> `1,234.50`.
pub fn format_number_with_commas(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = whole.chars().collect();
    let grouped = digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",");

    let sign = if value < 0. { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn format_credits(amount: f64, precision: usize, symbol: &str) -> String {
    format!("{} {symbol}", format_number_with_commas(amount, precision))
}

pub fn format_fiat(amount: Option<f64>) -> String {
    match amount {
        Some(amount) => format_number_with_commas(amount, 2),
        None => MISSING_FIGURE.to_string(),
    }
}
