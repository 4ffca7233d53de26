//! Round-trip properties of the parser and serializer.

use proptest::prelude::*;

use cronbook::{parse, serialize};

use crate::strategies::{job_blocks, preamble, render, render_with};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Canonically spaced crontab text serializes back byte for byte.
    #[test]
    fn property_canonical_text_round_trips(
        pre in preamble(),
        blocks in job_blocks(),
    ) {
        let text = render(&pre, &blocks);

        let doc = parse(&text).expect("generated text should parse");

        prop_assert_eq!(serialize(&doc), text);
        prop_assert_eq!(doc.job_count(), blocks.len());
    }

    /// PROPERTY: Serializing a parsed document is a fixed point.
    #[test]
    fn property_serialize_is_idempotent(
        pre in preamble(),
        blocks in job_blocks(),
        field_sep in prop::sample::select(vec![" ", "  ", "\t", " \t "]),
        assign in prop::sample::select(vec!["=", " = ", " ="]),
    ) {
        let messy = render_with(&pre, &blocks, field_sep, assign);

        let doc = parse(&messy).expect("generated text should parse");
        let once = serialize(&doc);
        let reparsed = parse(&once).expect("serialized text should parse");

        prop_assert_eq!(&reparsed, &doc);
        prop_assert_eq!(serialize(&reparsed), once);
    }

    /// PROPERTY: Titles come back in document order.
    #[test]
    fn property_titles_keep_order(blocks in job_blocks()) {
        let doc = parse(&render(&[], &blocks)).expect("generated text should parse");

        let expected: Vec<&str> = blocks.iter().map(|(job, _)| job.title.as_str()).collect();
        prop_assert_eq!(doc.titles(), expected);
    }
}
