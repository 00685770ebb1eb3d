/// Statement extraction pipeline and the blocked-operation sweep.
pub mod gateway;
/// Comment stripping, whitespace normalization, and quote-aware helpers.
pub mod sanitize;

pub use gateway::extract_sql;
