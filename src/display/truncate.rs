use serde::{Deserialize, Serialize};

/// Queries longer than this many characters are truncated for display.
pub const DISPLAY_TRUNCATION_LIMIT: usize = 200;

/// Display form of a SQL query: either the full text, or a truncated preview
/// plus the untruncated query for the expansion control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlDisplay {
    /// Text shown in the query panel; ends with `...` when truncated.
    pub display_text: String,
    /// The untruncated query, present only when `display_text` was truncated.
    pub full_sql: Option<String>,
}

impl SqlDisplay {
    /// True when the display text is a truncated preview.
    pub fn is_truncated(&self) -> bool {
        self.full_sql.is_some()
    }
}

/// Prepare a query for display, truncating at [`DISPLAY_TRUNCATION_LIMIT`]
/// characters (not bytes).
pub fn prepare_display(sql: &str) -> SqlDisplay {
    let mut chars = sql.char_indices();
    match chars.nth(DISPLAY_TRUNCATION_LIMIT) {
        // A character exists past the limit, so the query is too long.
        Some((cut, _)) => SqlDisplay {
            display_text: format!("{}...", &sql[..cut]),
            full_sql: Some(sql.to_string()),
        },
        None => SqlDisplay {
            display_text: sql.to_string(),
            full_sql: None,
        },
    }
}
