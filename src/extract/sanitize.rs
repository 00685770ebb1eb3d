use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block-comment pattern must compile"));
static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)--.*$").expect("line-comment pattern must compile"));
static FENCE_BACKTICKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^`+)|(`+$)").expect("fence pattern must compile"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));
static QUOTED_STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"'[^']*'|"[^"]*""#).expect("quoted-string pattern must compile"));
static QUOTE_OR_BACKTICK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""[^"]*"|'[^']*'|`"#).expect("quote-or-backtick pattern must compile")
});

/// Sanitize raw model output before statement extraction.
///
/// Removes block and line comments, strips surrounding backtick fences, and
/// collapses all whitespace runs to single spaces.
pub fn clean_input_text(input: &str) -> String {
    let cleaned = BLOCK_COMMENT.replace_all(input, " ");
    let cleaned = LINE_COMMENT.replace_all(&cleaned, " ");
    let cleaned = FENCE_BACKTICKS.replace_all(cleaned.trim(), "");
    WHITESPACE_RUN.replace_all(&cleaned, " ").trim().to_string()
}

/// Blank out single- and double-quoted string literals so keyword sweeps do
/// not fire on quoted content.
pub fn remove_quoted_content(sql: &str) -> String {
    QUOTED_STRING.replace_all(sql, "").to_string()
}

/// True when the text contains a backtick outside any quoted string.
pub fn has_unquoted_backtick(text: &str) -> bool {
    QUOTE_OR_BACKTICK
        .find_iter(text)
        .any(|m| m.as_str() == "`")
}
