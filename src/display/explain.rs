use serde::{Deserialize, Serialize};

use crate::display::annotate::AnnotatedClause;

/// Request body for a per-clause explanation, one per annotated clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseExplanationRequest {
    /// The clause text to explain.
    pub clause: String,
    /// The full query the clause was cut from, for context.
    pub full_sql: String,
    /// Positional id routing the response back to the right span.
    pub clause_id: String,
}

/// Response body carrying the generated explanation for one clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseExplanationResponse {
    /// Positional id echoed from the request.
    pub clause_id: String,
    /// Generated explanation text.
    pub explanation: String,
}

impl ClauseExplanationRequest {
    /// Parse a request from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let request: ClauseExplanationRequest = serde_json::from_str(json)
            .map_err(|e| format!("Invalid explanation request: {e}"))?;
        request.validate()?;
        Ok(request)
    }

    /// Reject requests with empty fields; the serving layer maps this to a
    /// client error.
    pub fn validate(&self) -> Result<(), String> {
        if self.clause.trim().is_empty() {
            return Err("Explanation request is missing the clause text".to_string());
        }
        if self.full_sql.trim().is_empty() {
            return Err("Explanation request is missing the full SQL".to_string());
        }
        if self.clause_id.trim().is_empty() {
            return Err("Explanation request is missing the clause id".to_string());
        }
        Ok(())
    }
}

/// Build one explanation request per annotated clause of `full_sql`.
pub fn explanation_requests(
    full_sql: &str,
    clauses: &[AnnotatedClause],
) -> Vec<ClauseExplanationRequest> {
    clauses
        .iter()
        .map(|clause| ClauseExplanationRequest {
            clause: clause.text.clone(),
            full_sql: full_sql.to_string(),
            clause_id: clause.clause_id.clone(),
        })
        .collect()
}
