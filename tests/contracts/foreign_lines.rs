//! CONTRACT: Lines Cronbook did not write are never changed.
//!
//! Untitled jobs, comments, blank lines and odd spacing outside of job
//! blocks survive every command byte for byte.

use crate::common::*;

const FOREIGN: &str = "# Edit this file to introduce tasks to be run by cron.
MAILTO=\"root\"
*/15 *  * * *    /usr/bin/check   --quiet
\t
# [Managed]
@daily managed

  # indented comment
@reboot /usr/bin/agent
";

fn foreign_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| {
            !line.starts_with("# [")
                && !["managed", "added", "entered"]
                    .iter()
                    .any(|w| line.ends_with(w))
        })
        .collect()
}

#[test]
fn contract_every_command_keeps_foreign_lines() {
    let env = TestEnv::with_crontab(FOREIGN);
    let fragment = env.write_file("extra.cron", "# [Added]\n@hourly added\n");
    let saved = env.path("saved.tab");

    let runs: Vec<Vec<&str>> = vec![
        vec!["enter", "Entered", "0 0 * * * entered"],
        vec!["add", fragment.to_str().unwrap()],
        vec!["enter", "Managed", "@weekly managed", "--overwrite"],
        vec!["remove", "Entered"],
        vec!["save", saved.to_str().unwrap()],
        vec!["jobs"],
        vec!["list", "--full"],
    ];

    for args in runs {
        let result = env.run(&args);
        assert!(result.success, "{:?}: {}", args, result.combined_output());
        assert_eq!(
            foreign_lines(&env.crontab()),
            foreign_lines(FOREIGN),
            "{:?} changed foreign lines",
            args
        );
    }
    assert!(env.crontab().starts_with(
        "# Edit this file to introduce tasks to be run by cron.\nMAILTO=\"root\"\n*/15 *  * * *    /usr/bin/check   --quiet\n\t\n"
    ));
}

#[test]
fn contract_removing_all_jobs_restores_foreign_text() {
    let env = TestEnv::with_crontab(FOREIGN);
    env.run(&["enter", "Temporary", "@hourly tmp"]);

    let result = env.run(&["remove", "Temporary", "Managed"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.crontab(),
        FOREIGN.replace("# [Managed]\n@daily managed\n", "")
    );
}
