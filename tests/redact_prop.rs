use md_ingest::redact::RedactionSet;
use proptest::prelude::*;

proptest! {
    #[test]
    fn text_without_terms_is_unchanged(text in "[0-9 .,;\n]{0,200}",
                                       terms in prop::collection::vec("[a-z]{1,8}", 0..5)) {
        let set = RedactionSet::new(&terms).unwrap();
        let out = set.apply(&text);
        prop_assert_eq!(out.as_ref(), text.as_str());
    }

    #[test]
    fn redaction_is_idempotent(text in "[a-zA-Z ,.]{0,200}",
                               terms in prop::collection::vec("[a-z]{1,4}", 0..5)) {
        let set = RedactionSet::new(&terms).unwrap();
        let once = set.apply(&text).into_owned();
        let twice = set.apply(&once).into_owned();
        prop_assert_eq!(twice, once);
    }
}
