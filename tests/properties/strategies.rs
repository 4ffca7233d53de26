//! Generators for crontab text.

use proptest::prelude::*;

/// One generated job block, before rendering
#[derive(Debug, Clone)]
pub struct JobParts {
    pub title: String,
    pub env: Vec<(String, String)>,
    pub schedules: Vec<(Vec<String>, String)>,
}

/// How a generated job block is followed
#[derive(Debug, Clone, Copy)]
pub enum Separator {
    None,
    Blank,
    Comment,
}

pub fn title() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ]{1,16}").unwrap()
}

fn env_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z_][A-Z0-9_]{0,8}").unwrap()
}

fn env_value() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[a-z0-9/:.@]{1,12}").unwrap(),
        proptest::string::string_regex("[a-z ]{0,10}").unwrap().prop_map(|v| format!("\"{}\"", v)),
    ]
}

/// Cron field tokens, plus name-like and `=`-led tokens that can make a
/// schedule line look like a `NAME = VALUE` assignment
fn field() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(vec!["*", "*/5", "0", "15", "1-5", "MON", "1,2,3", "JAN"])
            .prop_map(str::to_string),
        1 => prop::sample::select(vec!["A", "PATH", "_x", "=", "=x", "a=b"])
            .prop_map(str::to_string),
    ]
}

fn is_name(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A schedule line whose first `=` follows a lone name reads as an
/// assignment, whatever separates the fields.
fn reads_as_assignment(timing: &[String]) -> bool {
    match timing {
        [first, second, ..] => {
            (is_name(first) && second.starts_with('='))
                || first.split_once('=').is_some_and(|(name, _)| is_name(name))
        }
        _ => false,
    }
}

fn shorthand() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["@reboot", "@yearly", "@monthly", "@weekly", "@daily", "@hourly"])
        .prop_map(str::to_string)
}

pub fn command() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z/][a-z0-9 ./=\"'-]{0,24}").unwrap()
}

/// Timing tokens: five fields, or a single shorthand
fn timing() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        3 => proptest::collection::vec(field(), 5),
        1 => shorthand().prop_map(|s| vec![s]),
    ]
}

/// Any schedule line, including ones the model must refuse
pub fn schedule_line() -> impl Strategy<Value = String> {
    (timing(), command()).prop_map(|(timing, command)| format!("{} {}", timing.join(" "), command))
}

pub fn job_parts() -> impl Strategy<Value = JobParts> {
    (
        title(),
        proptest::collection::vec((env_name(), env_value()), 0..=3),
        proptest::collection::vec(
            (timing(), command()).prop_filter("schedule reads as an assignment", |(timing, _)| {
                !reads_as_assignment(timing)
            }),
            1..=3,
        ),
    )
        .prop_map(|(title, env, schedules)| {
            let mut seen = std::collections::HashSet::new();
            let env = env
                .into_iter()
                .filter(|(name, _)| seen.insert(name.clone()))
                .collect();
            JobParts {
                title,
                env,
                schedules,
            }
        })
}

pub fn separator() -> impl Strategy<Value = Separator> {
    prop_oneof![Just(Separator::None), Just(Separator::Blank), Just(Separator::Comment)]
}

/// Jobs with distinct titles, each with the separator that follows it
pub fn job_blocks() -> impl Strategy<Value = Vec<(JobParts, Separator)>> {
    proptest::collection::vec((job_parts(), separator()), 0..=5).prop_map(|blocks| {
        let mut seen = std::collections::HashSet::new();
        blocks
            .into_iter()
            .filter(|(job, _)| seen.insert(job.title.clone()))
            .collect()
    })
}

/// Lines that may appear before the first titled job
pub fn preamble() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        prop::sample::select(vec![
            "SHELL=/bin/sh",
            "MAILTO=root",
            "# written by hand",
            "0 0 * * * untitled",
            "@reboot  start-agent",
            "",
            "   ",
        ])
        .prop_map(str::to_string),
        0..=4,
    )
}

/// Render blocks with canonical spacing, the way the serializer writes them
pub fn render(preamble: &[String], blocks: &[(JobParts, Separator)]) -> String {
    render_with(preamble, blocks, " ", "=")
}

/// Render blocks with the given field separator and assignment operator
pub fn render_with(
    preamble: &[String],
    blocks: &[(JobParts, Separator)],
    field_sep: &str,
    assign: &str,
) -> String {
    let mut out = String::new();
    for line in preamble {
        out.push_str(line);
        out.push('\n');
    }
    if !preamble.is_empty() && !blocks.is_empty() {
        out.push('\n');
    }
    for (job, separator) in blocks {
        out.push_str(&format!("# [{}]\n", job.title));
        for (name, value) in &job.env {
            out.push_str(&format!("{}{}{}\n", name, assign, value));
        }
        for (timing, command) in &job.schedules {
            out.push_str(&format!("{}{}{}\n", timing.join(field_sep), field_sep, command));
        }
        match separator {
            Separator::None => {}
            Separator::Blank => out.push('\n'),
            Separator::Comment => out.push_str("# note\n"),
        }
    }
    out
}
