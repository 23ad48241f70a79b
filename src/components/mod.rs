mod button;
pub use button::*;

mod util;
pub use util::*;

mod icon;
pub use icon::*;

mod caption_text;
pub use caption_text::*;

mod screen_header;
pub use screen_header::*;

mod rules;
pub use rules::*;

mod layout;
pub use layout::*;

mod colors;
pub use colors::*;

mod styles;
pub use styles::*;

mod confirm_modal;
pub use confirm_modal::*;

pub mod fiat_balance;
pub use fiat_balance::*;
