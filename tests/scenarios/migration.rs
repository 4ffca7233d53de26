//! Scenario: adopting an existing hand-written crontab
//!
//! Journey: a crontab full of untitled lines gets titled jobs added next to
//! it, one job is edited, and the hand-written part never changes.

use cronbook::application::{AddOptions, EnterOptions, RemoveOptions};
use cronbook::{parse, CrontabStore, CrontabSync, MemoryCrontab};

const HAND_WRITTEN: &str = "# m h dom mon dow command
MAILTO=admin@example.com
*/10 * * * * /usr/local/bin/poll
0 1 * * * /usr/local/bin/nightly   --quiet

";

#[test]
fn scenario_adopt_hand_written_crontab() {
    let sync = CrontabSync::new(MemoryCrontab::with_text(HAND_WRITTEN));

    // Step 1: a titled job lands after the untouched lines
    let options = EnterOptions::default().with_env("MAILTO", "");
    sync.enter("Reports", "30 6 * * 1 weekly-report", &options)
        .unwrap();
    let text = sync.store().read().unwrap();
    assert!(text.starts_with(HAND_WRITTEN));
    assert!(text.ends_with("# [Reports]\nMAILTO=\"\"\n30 6 * * 1 weekly-report\n"));

    // Step 2: a fragment adds two more jobs
    let fragment = parse("# [Sync]\n@hourly sync\n# [Prune]\n@weekly prune\n").unwrap();
    sync.add_fragment(&fragment, &AddOptions::default()).unwrap();
    assert_eq!(sync.load().unwrap().titles(), ["Reports", "Sync", "Prune"]);

    // Step 3: Sync is replaced, keeping its place
    let replacement = parse("# [Sync]\n*/30 * * * * sync --fast\n").unwrap();
    sync.add_fragment(&replacement, &AddOptions::default().with_overwrite(true))
        .unwrap();
    assert_eq!(sync.load().unwrap().titles(), ["Reports", "Sync", "Prune"]);

    // Step 4: removing every titled job restores the original text
    let titles = ["Reports", "Sync", "Prune"].map(String::from);
    sync.remove(&titles, &RemoveOptions::default()).unwrap();
    assert_eq!(sync.store().read().unwrap(), HAND_WRITTEN);
}

#[test]
fn scenario_dry_runs_never_write() {
    let store = MemoryCrontab::with_text(HAND_WRITTEN);
    let sync = CrontabSync::new(store);

    let report = sync
        .enter("Preview", "@daily preview", &EnterOptions::default().with_dry_run(true))
        .unwrap();
    assert!(!report.written);
    assert!(report.after.contains("# [Preview]"));

    sync.clear(true).unwrap();

    assert_eq!(sync.store().read().unwrap(), HAND_WRITTEN);
    assert_eq!(sync.store().write_count(), 0);
}
