//! Scenario: working with a document in memory
//!
//! Parse, query, enter, remove and replace jobs without touching any
//! crontab.

use cronbook::{parse, serialize, Document, Environment, Job, ScheduleEntry};
use cronbook::{AddOutcome, CronbookError};

#[test]
fn scenario_parse_single_job() {
    let doc = parse("# [Frequent Job]\n* * * * * echo \"hi\"\n").unwrap();

    let job = doc.job("Frequent Job").unwrap();
    assert_eq!(job.schedules().len(), 1);
    let entry = &job.schedules()[0];
    assert_eq!(
        entry.fields().map(|f| f.to_vec()),
        Some(vec!["*".to_string(); 5])
    );
    assert_eq!(entry.command(), "echo \"hi\"");
    assert!(job.environment().is_empty());
}

#[test]
fn scenario_enter_job_into_empty_document() {
    let mut doc = Document::new();

    doc.enter_job("Manual", "5 4 3 2 1 echo hi", Environment::new())
        .unwrap();

    assert_eq!(serialize(&doc), "# [Manual]\n5 4 3 2 1 echo hi\n");
}

#[test]
fn scenario_remove_first_of_two_jobs() {
    let text = "# [A]\nMAILTO=a@example.com\n1 * * * * a\n# [B]\nPATH=/bin\n2 * * * * b\n3 * * * * b2\n";
    let mut doc = parse(text).unwrap();
    let b_block = cronbook::serializer::render_job(doc.job("B").unwrap());

    doc.remove_job("A").unwrap();

    assert_eq!(serialize(&doc), b_block);
    assert_eq!(b_block, "# [B]\nPATH=/bin\n2 * * * * b\n3 * * * * b2\n");
}

#[test]
fn scenario_add_existing_title() {
    let mut doc = parse("# [A]\n1 * * * * a\n\n# [B]\n2 * * * * b\n").unwrap();
    let replacement = Job::new(
        "A",
        Environment::new(),
        vec![ScheduleEntry::parse("@hourly new-a").unwrap()],
    )
    .unwrap();

    let err = doc.add_job(replacement.clone(), false).unwrap_err();
    assert!(matches!(err, CronbookError::TitleCollision { ref title } if title == "A"));
    assert_eq!(serialize(&doc), "# [A]\n1 * * * * a\n\n# [B]\n2 * * * * b\n");

    assert_eq!(doc.add_job(replacement, true).unwrap(), AddOutcome::Replaced);
    assert_eq!(serialize(&doc), "# [A]\n@hourly new-a\n\n# [B]\n2 * * * * b\n");
}
