use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::sanitize::{clean_input_text, has_unquoted_backtick, remove_quoted_content};

/// Operations that must never appear in an extracted statement. Matched
/// case-insensitively against the statement with string literals blanked out.
pub const ILLEGAL_OPERATION_PATTERNS: &[&str] = &[
    r"INSERT\s+INTO",
    r"UPDATE\s+",
    r"DELETE\s+FROM",
    r"CREATE\s+",
    r"DROP\s+",
    r"ALTER\s+",
    r"TRUNCATE\s+",
    r"GRANT\s+",
    r"REVOKE\s+",
    r"COMMIT\s+",
    r"ROLLBACK\s+",
    r"SAVEPOINT\s+",
    r"WITH\s+RETURNING",
    r"INTO\s+",
];

static ILLEGAL_OPERATIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ILLEGAL_OPERATION_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("illegal-operation pattern must compile"))
        .collect()
});

static STATEMENT_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:WITH\s+.*?\bSELECT\b|\bSELECT\b).*")
        .expect("statement-candidate pattern must compile")
});

/// Extract a single, safely terminated SELECT statement from free-form model
/// output.
///
/// The input is sanitized (comments and backtick fences removed, whitespace
/// collapsed), the first `WITH ... SELECT` or bare `SELECT` candidate is
/// located, the statement is cut at its first semicolon and re-terminated,
/// and the result is rejected if any blocked DML/DDL operation appears
/// outside a string literal.
pub fn extract_sql(input: &str) -> Result<String, String> {
    let sanitized = clean_input_text(input);
    let candidate = statement_candidate(&sanitized)
        .ok_or_else(|| format!("No valid SQL statement found in input: {input:?}"))?;
    let terminated = terminate_statement(&candidate);
    validate_security(&terminated)?;
    Ok(terminated)
}

/// Locate the `WITH ... SELECT` or bare `SELECT` candidate in sanitized text.
fn statement_candidate(sanitized: &str) -> Option<String> {
    STATEMENT_CANDIDATE
        .find(sanitized)
        .map(|m| m.as_str().trim().to_string())
}

/// Cut at the first semicolon and guarantee exactly one trailing `;`.
fn terminate_statement(candidate: &str) -> String {
    let body = match candidate.find(';') {
        Some(idx) => &candidate[..idx],
        None => candidate,
    };
    format!("{};", body.trim_end())
}

/// Reject statements carrying blocked operations or stray backticks.
fn validate_security(sql: &str) -> Result<(), String> {
    let unquoted = remove_quoted_content(sql);
    for (pattern, matcher) in ILLEGAL_OPERATION_PATTERNS.iter().zip(ILLEGAL_OPERATIONS.iter()) {
        if matcher.is_match(&unquoted) {
            return Err(format!("Blocked SQL operation detected: {pattern}"));
        }
    }
    if sql.starts_with('`') || sql.ends_with('`') {
        return Err(format!("Invalid backticks in SQL: {sql}"));
    }
    if has_unquoted_backtick(sql) {
        return Err(format!("Unquoted backticks detected: {sql}"));
    }
    Ok(())
}
