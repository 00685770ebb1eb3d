use serde::{Deserialize, Serialize};
use std::fmt;

/// Label attached to a clause segment, derived from its leading keyword.
///
/// Only the canonical clause set gets a dedicated variant; every other
/// recognized keyword (joins, set operators, HAVING, ...) and any keyword-free
/// prefix falls back to [`ClauseKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseKind {
    /// `SELECT` projection list.
    Select,
    /// `FROM` source relations.
    From,
    /// `WHERE` filter predicate.
    Where,
    /// `GROUP BY` grouping keys.
    GroupBy,
    /// `ORDER BY` sort keys.
    OrderBy,
    /// `LIMIT` row cap.
    Limit,
    /// An atomic window-function expression (`fn(...) OVER (...)`).
    WindowFunction,
    /// Any other clause or keyword-free text.
    Other,
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseKind::Select => write!(f, "SELECT"),
            ClauseKind::From => write!(f, "FROM"),
            ClauseKind::Where => write!(f, "WHERE"),
            ClauseKind::GroupBy => write!(f, "GROUP BY"),
            ClauseKind::OrderBy => write!(f, "ORDER BY"),
            ClauseKind::Limit => write!(f, "LIMIT"),
            ClauseKind::WindowFunction => write!(f, "WINDOW FUNCTION"),
            ClauseKind::Other => write!(f, "OTHER"),
        }
    }
}

impl ClauseKind {
    /// Derive the kind from the first word (or two) of a segment.
    pub(crate) fn from_leading_keyword(text: &str) -> ClauseKind {
        let mut words = text.split_whitespace();
        let first = words.next().map(str::to_ascii_uppercase);
        let second = words.next().map(str::to_ascii_uppercase);
        match (first.as_deref(), second.as_deref()) {
            (Some("GROUP"), Some("BY")) => ClauseKind::GroupBy,
            (Some("ORDER"), Some("BY")) => ClauseKind::OrderBy,
            (Some("SELECT"), _) => ClauseKind::Select,
            (Some("FROM"), _) => ClauseKind::From,
            (Some("WHERE"), _) => ClauseKind::Where,
            (Some("LIMIT"), _) => ClauseKind::Limit,
            _ => ClauseKind::Other,
        }
    }
}

/// One unit of the output partition: a clause or an atomic window-function
/// expression.
///
/// `text` is the verbatim (untrimmed) slice of the raw query starting at byte
/// offset `start`; concatenating all segments of a query in order, with the
/// whitespace-only gaps between them, reconstructs the query exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseSegment {
    /// Label derived from the segment's leading keyword.
    pub kind: ClauseKind,
    /// Byte offset of the segment in the raw query.
    pub start: usize,
    /// Verbatim segment text.
    pub text: String,
}

impl ClauseSegment {
    /// Byte offset one past the end of the segment in the raw query.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_derived_from_leading_keyword_case_insensitively() {
        assert_eq!(
            ClauseKind::from_leading_keyword("select a, b"),
            ClauseKind::Select
        );
        assert_eq!(
            ClauseKind::from_leading_keyword("  FROM t"),
            ClauseKind::From
        );
        assert_eq!(
            ClauseKind::from_leading_keyword("group   by x"),
            ClauseKind::GroupBy
        );
        assert_eq!(
            ClauseKind::from_leading_keyword("ORDER BY y DESC"),
            ClauseKind::OrderBy
        );
        assert_eq!(ClauseKind::from_leading_keyword("LIMIT 10"), ClauseKind::Limit);
    }

    #[test]
    fn unrecognized_leading_keyword_falls_back_to_other() {
        assert_eq!(
            ClauseKind::from_leading_keyword("HAVING count(*) > 1"),
            ClauseKind::Other
        );
        assert_eq!(
            ClauseKind::from_leading_keyword("GROUP x"),
            ClauseKind::Other
        );
        assert_eq!(ClauseKind::from_leading_keyword(""), ClauseKind::Other);
    }

    #[test]
    fn kind_display_matches_canonical_labels() {
        assert_eq!(ClauseKind::GroupBy.to_string(), "GROUP BY");
        assert_eq!(ClauseKind::WindowFunction.to_string(), "WINDOW FUNCTION");
        assert_eq!(ClauseKind::Other.to_string(), "OTHER");
    }

    #[test]
    fn segment_end_is_start_plus_byte_length() {
        let seg = ClauseSegment {
            kind: ClauseKind::Where,
            start: 12,
            text: "WHERE a > 1".to_string(),
        };
        assert_eq!(seg.end(), 23);
    }
}
