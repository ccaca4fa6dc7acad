#![cfg_attr(not(test), allow(dead_code))]
use md_ingest::chunker::split_chunks;
use md_ingest::constants::FILE_SEPARATOR;
use proptest::prelude::*;

proptest! {
    #[test]
    fn reassembled_equals_original(segments in prop::collection::vec(".{0,120}", 0..30),
                                   limit in 1usize..400usize) {
        let blob: String = segments.iter().map(|s| format!("FILE: x\n{s}{FILE_SEPARATOR}")).collect();
        let chunks = split_chunks(&blob, limit);
        let glued: String = chunks.iter().map(|c| c.text.as_str()).collect();
        prop_assert_eq!(glued, blob);
    }

    #[test]
    fn chunks_respect_limit(blob in "(.{0,50}\n\n={80}\n\n){0,20}.{0,50}",
                            limit in 1usize..500usize) {
        let chunks = split_chunks(&blob, limit);
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.number, i + 1);
            prop_assert!(chunk.chars <= limit);
            prop_assert_eq!(chunk.chars, chunk.text.chars().count());
        }
    }

    #[test]
    fn small_blob_is_one_chunk(blob in ".{0,100}", extra in 0usize..50usize) {
        let limit = blob.chars().count() + extra;
        let chunks = split_chunks(&blob, limit.max(1));
        prop_assert_eq!(chunks.len(), 1);
        prop_assert_eq!(&chunks[0].text, &blob);
    }
}
