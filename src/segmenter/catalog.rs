use once_cell::sync::Lazy;
use regex::Regex;

/// Clause-starting keywords and phrases recognized by the default catalog.
///
/// Multi-word phrases tolerate arbitrary inter-word whitespace when matched.
/// The bare `OVER` entry is a fallback for window specifications the isolator
/// does not capture (e.g. an `OVER` without a parenthesized frame).
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "WITH",
    "SELECT",
    "FROM",
    "WHERE",
    "GROUP BY",
    "HAVING",
    "ORDER BY",
    "LIMIT",
    "OFFSET",
    "LEFT OUTER JOIN",
    "RIGHT OUTER JOIN",
    "FULL OUTER JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "INNER JOIN",
    "CROSS JOIN",
    "FULL JOIN",
    "JOIN",
    "UNION ALL",
    "UNION",
    "INTERSECT",
    "EXCEPT",
    "OVER",
];

static DEFAULT_CATALOG: Lazy<KeywordCatalog> = Lazy::new(|| {
    KeywordCatalog::new(DEFAULT_KEYWORDS).expect("default keyword phrases must compile")
});

/// Immutable set of clause-starting keyword phrases, compiled into a single
/// case-insensitive whole-word matcher.
///
/// Phrases are deduplicated and ordered longest-first inside the alternation
/// so the most specific phrase wins at a given offset (`LEFT OUTER JOIN` over
/// `LEFT JOIN` over `JOIN`); the regex engine picks the first alternative that
/// matches at the leftmost position.
#[derive(Debug, Clone)]
pub struct KeywordCatalog {
    phrases: Vec<String>,
    matcher: Regex,
}

impl KeywordCatalog {
    /// Build a catalog from keyword phrases.
    ///
    /// Each phrase is one or more whitespace-separated words; words are
    /// matched literally (regex metacharacters are escaped) and separated by
    /// flexible whitespace. Repeated phrases are tolerated and collapse to a
    /// single entry.
    pub fn new(phrases: &[&str]) -> Result<Self, String> {
        let mut normalized: Vec<String> = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            let words: Vec<&str> = phrase.split_whitespace().collect();
            if words.is_empty() {
                return Err(format!("Keyword phrase must not be blank: {phrase:?}"));
            }
            let upper = words.join(" ").to_ascii_uppercase();
            if !normalized.contains(&upper) {
                normalized.push(upper);
            }
        }

        if normalized.is_empty() {
            return Err("Keyword catalog must contain at least one phrase".to_string());
        }

        // Longest phrase first so the alternation prefers the most specific
        // keyword at a shared offset.
        normalized.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = normalized
            .iter()
            .map(|phrase| {
                phrase
                    .split(' ')
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect::<Vec<_>>()
            .join("|");

        let matcher = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
            .map_err(|e| format!("Failed to compile keyword catalog: {e}"))?;

        Ok(Self {
            phrases: normalized,
            matcher,
        })
    }

    /// The process-wide catalog built from [`DEFAULT_KEYWORDS`].
    pub fn default_catalog() -> &'static KeywordCatalog {
        &DEFAULT_CATALOG
    }

    /// Normalized phrases in matcher precedence order (longest first).
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// The compiled whole-word keyword matcher.
    ///
    /// Callers must still verify the start-of-match boundary (start of input
    /// or preceding whitespace); `\b` alone accepts `foo.WHERE`.
    pub(crate) fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::default_catalog().clone()
    }
}
