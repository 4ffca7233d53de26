//! Scenario: day-to-day use of the command line
//!
//! Journey: enter a job, inspect it, back the crontab up, wipe it and
//! restore from the backup.

use crate::common::*;

#[test]
fn scenario_enter_inspect_backup_restore() {
    let env = TestEnv::new();

    // Step 1: enter two jobs
    let result = env.run(&[
        "enter",
        "Backup",
        "0 3 * * * backup --full",
        "--mailto",
        "ops@example.com",
    ]);
    assert!(result.success, "{}", result.combined_output());
    let result = env.run(&["enter", "Cleanup", "@daily cleanup"]);
    assert!(result.success, "{}", result.combined_output());

    // Step 2: inspect
    assert_eq!(env.run(&["jobs"]).stdout, "Backup\nCleanup\n");
    assert_eq!(
        env.run(&["view", "Backup", "--full"]).stdout,
        "# [Backup]\nMAILTO=ops@example.com\n0 3 * * * backup --full\n"
    );

    // Step 3: save a copy
    let saved = env.path("crontab.bak");
    let result = env.run(&["save", saved.to_str().unwrap()]);
    assert!(result.success, "{}", result.combined_output());
    let before = env.crontab();

    // Step 4: wipe
    let result = env.run(&["clear"]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.crontab(), "");

    // Step 5: restore from the copy
    let result = env.run(&["add", saved.to_str().unwrap()]);
    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.crontab(), before);
}

#[test]
fn scenario_retitle_a_job() {
    let env = TestEnv::with_crontab(TWO_JOBS);

    // Export one job, put it back under a new name, drop the old one
    let block = env.run(&["view", "Cleanup", "--full"]).stdout;
    let exported = env.write_file("cleanup.cron", &block);
    let result = env.run(&["add", exported.to_str().unwrap(), "--title", "Tmp cleanup"]);
    assert!(result.success, "{}", result.combined_output());
    let result = env.run(&["remove", "Cleanup"]);
    assert!(result.success, "{}", result.combined_output());

    assert_eq!(env.run(&["jobs"]).stdout, "Backup\nTmp cleanup\n");
    assert_eq!(
        env.run(&["view", "Tmp cleanup"]).stdout,
        "@daily find /tmp -mtime +7 -delete\n"
    );
}
