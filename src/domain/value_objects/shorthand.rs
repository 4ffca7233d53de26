//! Shorthand value object - the `@keyword` schedule forms cron accepts
//!
//! `@yearly` and `@annually` are distinct keywords (they mean the same
//! thing to cron) so that the spelling a user wrote survives a round-trip.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cron shorthand keyword used in place of the five timing fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shorthand {
    Reboot,
    Yearly,
    Annually,
    Monthly,
    Weekly,
    Daily,
    Midnight,
    Hourly,
}

impl Shorthand {
    /// All keywords, in the order they are documented
    pub const ALL: [Shorthand; 8] = [
        Shorthand::Reboot,
        Shorthand::Yearly,
        Shorthand::Annually,
        Shorthand::Monthly,
        Shorthand::Weekly,
        Shorthand::Daily,
        Shorthand::Midnight,
        Shorthand::Hourly,
    ];

    /// Keyword as written in a crontab, including the leading `@`
    pub fn keyword(&self) -> &'static str {
        match self {
            Shorthand::Reboot => "@reboot",
            Shorthand::Yearly => "@yearly",
            Shorthand::Annually => "@annually",
            Shorthand::Monthly => "@monthly",
            Shorthand::Weekly => "@weekly",
            Shorthand::Daily => "@daily",
            Shorthand::Midnight => "@midnight",
            Shorthand::Hourly => "@hourly",
        }
    }
}

impl FromStr for Shorthand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shorthand::ALL
            .iter()
            .copied()
            .find(|sh| sh.keyword() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Shorthand::ALL.iter().map(|sh| sh.keyword()).collect();
                format!(
                    "unknown schedule shorthand '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                )
            })
    }
}

impl std::fmt::Display for Shorthand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
