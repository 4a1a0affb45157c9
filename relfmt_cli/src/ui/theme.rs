//! Color constants and styling utilities for the relfmt CLI
//! Defines the palette used for command output

use console::Style;
use relfmt_core::utils::color::Rgba;

/// Primary color - Golden yellow (#E8C547)
pub const PRIMARY_HEX: &str = "#E8C547";
pub const PRIMARY_ANSI: u8 = 214; // ANSI 256 color approximation

/// Label color - Steel blue (#5C80BC)
pub const LABEL_HEX: &str = "#5C80BC";
pub const LABEL_ANSI: u8 = 67;

/// Swatch text shown on top of the sampled color
const SWATCH: &str = "      ";

/// Styles for command output
pub struct ColorTheme;

impl ColorTheme {
    /// Main result of a command
    pub fn value() -> Style {
        Style::new().color256(PRIMARY_ANSI).bold()
    }

    /// Field names in multi-line output
    pub fn label() -> Style {
        Style::new().color256(LABEL_ANSI)
    }

    /// Dim/faded style
    pub fn dim() -> Style {
        Style::new().color256(244).dim()
    }

    /// Error style (red variant)
    pub fn error() -> Style {
        Style::new().color256(196).bold()
    }

    /// Success style (green variant)
    pub fn success() -> Style {
        Style::new().color256(46).bold()
    }

    /// A block of background color approximating `color`.
    pub fn swatch(color: Rgba) -> String {
        Style::new()
            .on_color256(color.to_ansi256())
            .apply_to(SWATCH)
            .to_string()
    }

    /// Swatch followed by the hex code.
    pub fn color_line(color: Rgba) -> String {
        format!("{} {}", Self::swatch(color), Self::value().apply_to(color))
    }
}
