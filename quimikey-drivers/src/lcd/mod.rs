//! Character LCD drivers

pub mod display;
pub mod hd44780;
pub mod view;

pub use display::LcdDisplay;
pub use hd44780::{Hd44780, LcdError};
pub use view::{format_view, LcdLine, WELCOME};
