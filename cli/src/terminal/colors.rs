use colored::Color;
use sweepr_common::probe::Classification;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const UNREACHABLE: Color = Color::Red;

/// Color of the status token for each classification.
pub fn for_class(class: Classification) -> Color {
    match class {
        Classification::Success => Color::Green,
        Classification::Redirect => Color::Blue,
        Classification::Forbidden => Color::Red,
        Classification::ServerError => Color::White,
        Classification::Other => Color::Yellow,
        Classification::Unreachable => UNREACHABLE,
    }
}
