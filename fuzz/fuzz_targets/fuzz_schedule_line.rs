#![no_main]

use libfuzzer_sys::fuzz_target;

use cronbook::{EnvVar, ScheduleEntry};

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        if let Ok(entry) = ScheduleEntry::parse(line) {
            let rendered = entry.to_string();
            assert_eq!(ScheduleEntry::parse(&rendered).as_ref(), Ok(&entry));
        }
        let _ = EnvVar::parse(line);
        let _ = EnvVar::quoted("FUZZ", line);
    }
});
