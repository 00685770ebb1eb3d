use crate::segmenter::catalog::KeywordCatalog;
use crate::segmenter::clause::{ClauseKind, ClauseSegment};

/// Split a window-free span of SQL at every boundary-valid clause keyword.
///
/// The span is sliced at each catalog-keyword occurrence that starts the span
/// or follows whitespace, so every emitted segment after the first begins with
/// its clause keyword. A keyword-free leading prefix is kept; whitespace-only
/// pieces are dropped. `span_start` is the span's byte offset in the raw
/// query, carried through to the emitted segments.
pub fn split_clauses(
    catalog: &KeywordCatalog,
    span_start: usize,
    text: &str,
) -> Vec<ClauseSegment> {
    let mut cuts: Vec<usize> = Vec::new();
    for found in catalog.matcher().find_iter(text) {
        let at_boundary = found.start() == 0
            || text[..found.start()]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
        if at_boundary {
            cuts.push(found.start());
        }
    }

    let mut segments = Vec::new();
    let mut prev = 0;
    for cut in cuts {
        push_segment(&mut segments, span_start, prev, &text[prev..cut]);
        prev = cut;
    }
    push_segment(&mut segments, span_start, prev, &text[prev..]);
    segments
}

fn push_segment(segments: &mut Vec<ClauseSegment>, span_start: usize, offset: usize, piece: &str) {
    if piece.trim().is_empty() {
        return;
    }
    segments.push(ClauseSegment {
        kind: ClauseKind::from_leading_keyword(piece),
        start: span_start + offset,
        text: piece.to_string(),
    });
}
