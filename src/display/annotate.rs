use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::segmenter::clause::ClauseSegment;

/// A clause segment prepared for interactive display, keyed by its positional
/// id. The id is what the explanation round-trip uses to route a response back
/// to the right span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedClause {
    /// Positional identifier, `clause-0`, `clause-1`, ... in source order.
    pub clause_id: String,
    /// Display label for the clause (`SELECT`, `GROUP BY`, `WINDOW FUNCTION`, ...).
    pub clause_type: String,
    /// Whitespace-trimmed clause text.
    pub text: String,
}

/// Attach positional ids and display labels to segments, in source order.
pub fn annotate(segments: &[ClauseSegment]) -> Vec<AnnotatedClause> {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| AnnotatedClause {
            clause_id: format!("clause-{index}"),
            clause_type: segment.kind.to_string(),
            text: segment.text.trim().to_string(),
        })
        .collect()
}

/// Render annotated clauses as the span markup the query panel swaps in.
///
/// Tooltips start as `placeholder` and are filled in when the per-clause
/// explanation response arrives.
pub fn render_clause_spans(clauses: &[AnnotatedClause]) -> String {
    let mut markup = String::new();
    for (index, clause) in clauses.iter().enumerate() {
        if index > 0 {
            markup.push(' ');
        }
        write!(
            markup,
            "<span class=\"sql-clause\" data-clause-id=\"{}\" data-clause-type=\"{}\" title=\"placeholder\">{}</span>",
            escape_html(&clause.clause_id),
            escape_html(&clause.clause_type),
            escape_html(&clause.text),
        )
        .unwrap();
    }
    markup
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
