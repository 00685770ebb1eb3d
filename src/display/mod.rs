/// Clause ids, annotation payloads, and the interactive span markup.
pub mod annotate;
/// Per-clause explanation request/response wire types.
pub mod explain;
/// Length-based display truncation with expansion retention.
pub mod truncate;
