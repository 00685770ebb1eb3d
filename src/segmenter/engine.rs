use crate::segmenter::catalog::KeywordCatalog;
use crate::segmenter::clause::{ClauseKind, ClauseSegment};
use crate::segmenter::splitter::split_clauses;
use crate::segmenter::window::{isolate_window_functions, SpanKind};

/// Segment a raw SQL string using the default keyword catalog.
///
/// Total over all inputs: an empty string yields an empty vector, keyword-free
/// text yields a single segment, and malformed SQL degrades gracefully rather
/// than erroring. Segments are emitted in source order and, placed back at
/// their offsets, partition the input up to whitespace-only gaps.
pub fn segment(sql: &str) -> Vec<ClauseSegment> {
    segment_with(KeywordCatalog::default_catalog(), sql)
}

/// Segment a raw SQL string using a caller-supplied keyword catalog.
///
/// Window-function expressions are isolated first and pass through as single
/// [`ClauseKind::WindowFunction`] segments; everything else is split at the
/// catalog's clause keywords.
pub fn segment_with(catalog: &KeywordCatalog, sql: &str) -> Vec<ClauseSegment> {
    let mut segments = Vec::new();
    for span in isolate_window_functions(sql) {
        match span.kind {
            SpanKind::WindowFunction => segments.push(ClauseSegment {
                kind: ClauseKind::WindowFunction,
                start: span.start,
                text: span.text,
            }),
            SpanKind::Plain => {
                segments.extend(split_clauses(catalog, span.start, &span.text));
            }
        }
    }
    segments
}
