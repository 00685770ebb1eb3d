#![allow(dead_code)]

use sql2spans::segmenter::clause::ClauseSegment;

/// Assert that segments placed back at their offsets partition `sql`: slices
/// match the original text, offsets strictly increase without overlap, and
/// everything between segments is whitespace.
pub(crate) fn assert_partition(sql: &str, segments: &[ClauseSegment]) {
    let mut cursor = 0;
    for segment in segments {
        assert!(
            segment.start >= cursor,
            "segment {:?} overlaps its predecessor",
            segment.text
        );
        assert!(
            sql[cursor..segment.start].trim().is_empty(),
            "non-whitespace gap before segment {:?}",
            segment.text
        );
        assert_eq!(
            &sql[segment.start..segment.end()],
            segment.text,
            "segment text diverges from the original query slice"
        );
        cursor = segment.end();
    }
    assert!(
        sql[cursor..].trim().is_empty(),
        "non-whitespace tail after the last segment"
    );
}

/// Segment texts trimmed for comparison.
pub(crate) fn trimmed_texts(segments: &[ClauseSegment]) -> Vec<String> {
    segments.iter().map(|s| s.text.trim().to_string()).collect()
}
