use crossterm::style::Color;

/// Design tokens for the Cronbook CLI.
///
/// Only 5 semantic colors; icons have an ASCII fallback.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const SKIPPED: &str = "○";
    pub const POINTER: &str = "→";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
    pub const SKIPPED: &str = "[SKIP]";
    pub const POINTER: &str = ">";
}
