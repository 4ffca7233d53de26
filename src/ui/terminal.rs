//! Terminal capability detection
//!
//! Decided per stream: reports go to stdout, errors and warnings to stderr,
//! and either one may be redirected on its own.

use is_terminal::IsTerminal;

/// Environment variables set by common CI services
const CI_MARKERS: &[&str] = &[
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
    "TEAMCITY_VERSION",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn is_terminal(self) -> bool {
        match self {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Color for `--color auto`
    pub supports_color: bool,
    pub supports_unicode: bool,
}

pub fn detect_capabilities(stream: Stream) -> TerminalCapabilities {
    detect_with(|key| std::env::var(key).ok(), stream.is_terminal())
}

/// `NO_COLOR` and `TERM=dumb` always win; `CLICOLOR_FORCE` colors pipes and
/// CI logs; otherwise color needs a terminal outside CI.
fn detect_with(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> TerminalCapabilities {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.is_empty());

    let term_is_dumb = non_empty("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let no_color = non_empty("NO_COLOR").is_some();
    let forced = non_empty("CLICOLOR_FORCE").is_some_and(|v| v != "0");
    let in_ci = non_empty("CI").is_some_and(|v| v != "false" && v != "0")
        || CI_MARKERS.iter().any(|key| non_empty(key).is_some());

    TerminalCapabilities {
        supports_color: !no_color && !term_is_dumb && (forced || (is_tty && !in_ci)),
        supports_unicode: !term_is_dumb && locale_is_utf8(&get_env),
    }
}

/// The first non-empty of `LC_ALL`, `LC_CTYPE`, `LANG` decides. With none
/// set the terminal is assumed to handle UTF-8.
fn locale_is_utf8(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| get_env(key).filter(|v| !v.is_empty()))
        .map_or(true, |locale| {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        })
}
