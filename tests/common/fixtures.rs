//! Test fixtures - reusable crontab content.

/// Two jobs, one with environment, separated by a blank line
pub const TWO_JOBS: &str = "# [Backup]
MAILTO=ops@example.com
0 3 * * * /usr/local/bin/backup --full
30 3 * * 0 /usr/local/bin/backup --verify

# [Cleanup]
@daily find /tmp -mtime +7 -delete
";

/// A crontab that was partly written by hand
pub const MIXED: &str = "SHELL=/bin/bash
# managed by hand
0 0 * * * /usr/bin/untitled-job

# [Report]
PATH=\"/usr/local/bin:/usr/bin\"
15 8 * * 1-5 report --mail
";

/// A fragment file with two jobs
pub const FRAGMENT: &str = "# jobs for the metrics host
# [Metrics]
*/5 * * * * collect-metrics
# [Rotate]
CRON_TZ=UTC
0 0 * * * rotate-logs
";

/// Structurally broken: the block has no schedule line
pub const BROKEN: &str = "# [Fine]
@hourly fine

# [Broken]
MAILTO=root
";

/// Fake `crontab` binary: stores the table next to itself
pub const FAKE_CRONTAB_SH: &str = r#"store="$(dirname "$0")/system.tab"
if [ "$1" = "-u" ]; then echo "$2" > "$(dirname "$0")/user"; shift 2; fi
case "$1" in
  -l) if [ -f "$store" ]; then cat "$store"; else echo "no crontab for tester" >&2; exit 1; fi ;;
  -) cat > "$store" ;;
  *) echo "unexpected arguments: $*" >&2; exit 2 ;;
esac
"#;
