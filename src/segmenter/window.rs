use once_cell::sync::Lazy;
use regex::Regex;

/// Pre-split classification of a span of the raw query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Ordinary SQL text, safe to split at clause keywords.
    Plain,
    /// An atomic window-function expression that must not be split.
    WindowFunction,
}

/// A contiguous substring of the raw query awaiting clause splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Whether the span may be split further.
    pub kind: SpanKind,
    /// Byte offset of the span in the raw query.
    pub start: usize,
    /// Verbatim span text.
    pub text: String,
}

// The function-call argument list is matched as "no close paren": an argument
// list containing nested parentheses (e.g. SUM(COALESCE(x, 0)) OVER ...) is
// intentionally not recognized and falls through to plain clause splitting.
static WINDOW_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[A-Za-z_][A-Za-z0-9_]*\s*\([^)]*\)\s+OVER\s*\(")
        .expect("window-call pattern must compile")
});

static TRAILING_ALIAS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*(?i:AS)\s+(?:[A-Za-z_][A-Za-z0-9_]*|"[^"]*"|'[^']*')"#)
        .expect("trailing-alias pattern must compile")
});

/// Split `sql` into an ordered, gap-free sequence of plain and
/// window-function spans.
///
/// A window-function span covers the function call, the balanced `OVER (...)`
/// clause, and an immediately-following `AS alias` when present. Unbalanced
/// parentheses never fail the scan: end-of-string acts as the implicit close.
pub fn isolate_window_functions(sql: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while cursor < sql.len() {
        let Some(found) = WINDOW_CALL.find(&sql[cursor..]) else {
            spans.push(Span {
                kind: SpanKind::Plain,
                start: cursor,
                text: sql[cursor..].to_string(),
            });
            break;
        };

        let call_start = cursor + found.start();
        if call_start > cursor {
            spans.push(Span {
                kind: SpanKind::Plain,
                start: cursor,
                text: sql[cursor..call_start].to_string(),
            });
        }

        // found.end() sits just past the opening paren of the OVER clause.
        let over_body = cursor + found.end();
        let close = scan_balanced(sql, over_body);
        let end = extend_trailing_alias(sql, close);

        spans.push(Span {
            kind: SpanKind::WindowFunction,
            start: call_start,
            text: sql[call_start..end].to_string(),
        });
        cursor = end;
    }

    spans
}

/// Walk from `from` (just past an already-consumed open paren) to the byte
/// offset one past the parenthesis that balances it, or to the end of the
/// string when the input never balances.
fn scan_balanced(sql: &str, from: usize) -> usize {
    let mut depth = 1usize;
    for (idx, ch) in sql[from..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return from + idx + 1;
                }
            }
            _ => {}
        }
    }
    sql.len()
}

/// Extend past an `AS alias` that immediately follows offset `from`, allowing
/// only whitespace in between. The alias may be a bare identifier or a
/// double- or single-quoted string.
fn extend_trailing_alias(sql: &str, from: usize) -> usize {
    match TRAILING_ALIAS.find(&sql[from..]) {
        Some(found) => from + found.end(),
        None => from,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_texts(sql: &str) -> Vec<String> {
        isolate_window_functions(sql)
            .into_iter()
            .filter(|s| s.kind == SpanKind::WindowFunction)
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn input_without_window_function_is_one_plain_span() {
        let spans = isolate_window_functions("SELECT a FROM t");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, SpanKind::Plain);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].text, "SELECT a FROM t");
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(isolate_window_functions("").is_empty());
    }

    #[test]
    fn window_span_covers_call_and_over_clause() {
        let sql = "SELECT a, COUNT(x) OVER (PARTITION BY y ORDER BY z) FROM t";
        let spans = isolate_window_functions(sql);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].text, "SELECT a, ");
        assert_eq!(spans[1].kind, SpanKind::WindowFunction);
        assert_eq!(spans[1].text, "COUNT(x) OVER (PARTITION BY y ORDER BY z)");
        assert_eq!(spans[2].text, " FROM t");
    }

    #[test]
    fn spans_cover_the_input_without_gaps() {
        let sql = "SELECT RANK() OVER (ORDER BY a) AS r, b FROM t";
        let spans = isolate_window_functions(sql);
        let mut cursor = 0;
        for span in &spans {
            assert_eq!(span.start, cursor, "gap before span {:?}", span.text);
            cursor += span.text.len();
        }
        assert_eq!(cursor, sql.len());
    }

    #[test]
    fn nested_parentheses_inside_over_clause_are_balanced() {
        let texts = window_texts("SELECT SUM(x) OVER (ORDER BY (a+b)) FROM t");
        assert_eq!(texts, vec!["SUM(x) OVER (ORDER BY (a+b))"]);
    }

    #[test]
    fn trailing_alias_is_captured() {
        let texts = window_texts("SELECT RANK() OVER (ORDER BY score) AS rnk FROM t");
        assert_eq!(texts, vec!["RANK() OVER (ORDER BY score) AS rnk"]);
    }

    #[test]
    fn quoted_aliases_are_captured() {
        let texts = window_texts(r#"SELECT RANK() OVER (ORDER BY s) AS "row rank" FROM t"#);
        assert_eq!(texts, vec![r#"RANK() OVER (ORDER BY s) AS "row rank""#]);

        let texts = window_texts("SELECT RANK() OVER (ORDER BY s) AS 'rnk' FROM t");
        assert_eq!(texts, vec!["RANK() OVER (ORDER BY s) AS 'rnk'"]);
    }

    #[test]
    fn asc_after_close_paren_is_not_an_alias() {
        let sql = "SELECT RANK() OVER (ORDER BY s) ASC FROM t";
        let texts = window_texts(sql);
        assert_eq!(texts, vec!["RANK() OVER (ORDER BY s)"]);
    }

    #[test]
    fn multiple_window_functions_are_isolated_in_order() {
        let sql = "SELECT LAG(x, 1) OVER (ORDER BY d) AS prev, LEAD(x, 1) OVER (ORDER BY d) AS next FROM t";
        let texts = window_texts(sql);
        assert_eq!(
            texts,
            vec![
                "LAG(x, 1) OVER (ORDER BY d) AS prev",
                "LEAD(x, 1) OVER (ORDER BY d) AS next",
            ]
        );
    }

    #[test]
    fn unbalanced_over_clause_closes_at_end_of_string() {
        let sql = "SELECT SUM(x) OVER (ORDER BY (a";
        let spans = isolate_window_functions(sql);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].kind, SpanKind::WindowFunction);
        assert_eq!(spans[1].text, "SUM(x) OVER (ORDER BY (a");
    }

    #[test]
    fn nested_parens_in_call_arguments_are_not_recognized() {
        // Known limitation: the argument list is matched as "no close paren".
        let spans = isolate_window_functions("SELECT SUM(COALESCE(x, 0)) OVER (ORDER BY y) FROM t");
        assert!(spans.iter().all(|s| s.kind == SpanKind::Plain));
    }

    #[test]
    fn bare_over_keyword_is_not_isolated() {
        let spans = isolate_window_functions("SELECT a OVER b FROM t");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, SpanKind::Plain);
    }

    #[test]
    fn over_without_space_before_paren_is_recognized() {
        let texts = window_texts("SELECT RANK() OVER(PARTITION BY g) FROM t");
        assert_eq!(texts, vec!["RANK() OVER(PARTITION BY g)"]);
    }
}
