use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of the outbound query to the literature service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub symptoms: String,
    /// Hit-count hint; the service falls back to its own default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl SearchRequest {
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            top_k: None,
        }
    }
}

/// Successful response payload: a generated summary plus the ranked evidence
/// behind it. Match order and citation numbering are server-determined and
/// passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub summary: String,
    pub matches: Vec<Match>,
    pub citations: Vec<String>,
}

/// One candidate article returned by the literature service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub title: String,
    pub journal: String,
    pub year: Year,
    pub source: String,
    pub snippet: String,
    pub url: String,
}

/// Publication year as reported upstream: usually a number, sometimes a
/// free-form label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Label(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Label(s) => f.write_str(s),
        }
    }
}
