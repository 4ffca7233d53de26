#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Anything that parses must survive one normalization unchanged
        if let Ok(doc) = cronbook::parse(content) {
            let once = cronbook::serialize(&doc);
            let reparsed = cronbook::parse(&once).expect("serialized crontab must parse");
            assert_eq!(cronbook::serialize(&reparsed), once);
        }
    }
});
