//! The parser never panics.

use proptest::prelude::*;

use cronbook::{parse, serialize};

fn crontab_line() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("# \\[[^\\n\\]]{0,10}\\]").unwrap(),
        proptest::string::string_regex("[A-Z_]{1,6} ?= ?[a-z\" ]{0,8}").unwrap(),
        proptest::string::string_regex("([*0-9/,-]{1,4}[ \\t]){0,6}[a-z ]{0,10}").unwrap(),
        proptest::string::string_regex("@[a-z]{0,8} [a-z]{0,6}").unwrap(),
        proptest::string::string_regex("#[^\\n]{0,12}").unwrap(),
        Just(String::new()),
        Just("\r".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse` never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(text in "(?s).{0,256}") {
        let _ = parse(&text);
    }

    /// PROPERTY: Whatever parses from crontab-shaped lines also round-trips
    /// through one normalization.
    #[test]
    fn property_crontab_shaped_input_is_stable(
        lines in proptest::collection::vec(crontab_line(), 0..=12),
    ) {
        let text = lines.join("\n");
        if let Ok(doc) = parse(&text) {
            let once = serialize(&doc);
            let again = parse(&once);
            prop_assert!(again.is_ok(), "normalized text failed to parse:\n{}", once);
            prop_assert_eq!(serialize(&again.unwrap()), once);
        }
    }
}
