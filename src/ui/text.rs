//! Styled text and status icons
//!
//! Everything renders to a plain `String`; color is applied only when the
//! caller's stream supports it.

use crossterm::style::{Color, Stylize};

use crate::ui::theme::colors;

/// Text tagged with one of the theme colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Color,
    bold: bool,
}

impl ColoredText {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, colors::ERROR)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, colors::WARNING)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, colors::DIM)
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn render(&self, supports_color: bool) -> String {
        match (supports_color, self.bold) {
            (false, _) => self.text.clone(),
            (true, false) => self.text.as_str().with(self.color).to_string(),
            (true, true) => self.text.as_str().with(self.color).bold().to_string(),
        }
    }
}

/// Status icons with an ASCII fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Skipped,
    Pointer,
}

impl Icon {
    pub fn render(self, supports_unicode: bool) -> &'static str {
        use crate::ui::theme::{icons, icons_ascii};
        match (self, supports_unicode) {
            (Icon::Success, true) => icons::SUCCESS,
            (Icon::Success, false) => icons_ascii::SUCCESS,
            (Icon::Error, true) => icons::ERROR,
            (Icon::Error, false) => icons_ascii::ERROR,
            (Icon::Warning, true) => icons::WARNING,
            (Icon::Warning, false) => icons_ascii::WARNING,
            (Icon::Skipped, true) => icons::SKIPPED,
            (Icon::Skipped, false) => icons_ascii::SKIPPED,
            (Icon::Pointer, true) => icons::POINTER,
            (Icon::Pointer, false) => icons_ascii::POINTER,
        }
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        let color = match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Skipped => colors::DIM,
            Icon::Pointer => colors::INFO,
        };
        ColoredText::new(self.render(supports_unicode), color).render(supports_color)
    }
}
