//! Design tokens for the Barkyard CLI.
//!
//! Design constraints:
//! - Only 4 semantic colors (`colors::*`)
//! - All icons must be sourced from this module

use crossterm::style::{Color, Stylize};

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const ARROW: &str = "↳";
}

/// Paint a success line.
pub fn success(text: &str) -> String {
    format!("{} {}", icons::SUCCESS.with(colors::SUCCESS), text)
}

/// Paint a failure line.
pub fn failure(text: &str) -> String {
    format!("{} {}", icons::ERROR.with(colors::ERROR), text)
}

/// Paint an informational line.
pub fn info(text: &str) -> String {
    format!("{} {}", icons::ARROW.with(colors::INFO), text)
}

/// Dim secondary text.
pub fn dim(text: &str) -> String {
    text.with(colors::DIM).to_string()
}
