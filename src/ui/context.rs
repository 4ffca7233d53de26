use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, Stream, TerminalCapabilities};
use cronbook::config::ColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &cronbook::Config) -> Self {
        Self::from_caps(json, cli_color, config, detect_capabilities(Stream::Stdout))
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &cronbook::Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = !json
            && match cli_color {
                Some(ColorWhen::Never) => false,
                Some(ColorWhen::Always) => true,
                Some(ColorWhen::Auto) | None => match config.output.color {
                    ColorMode::Never => false,
                    ColorMode::Always => true,
                    ColorMode::Auto => caps.supports_color,
                },
            };

        Self {
            json,
            color,
            unicode: caps.supports_unicode,
        }
    }
}
