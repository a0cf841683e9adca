use serde::{Deserialize, Serialize};

use crate::models::intent::{OcrMode, Operation, OrganizeMode};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub path: String,
    pub kind: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<String>,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizeOutcome {
    pub output: String,
    pub success: bool,
    pub files_changed: usize,
    pub path: String,
    pub mode: OrganizeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintOutcome {
    pub output: String,
    pub fixed: bool,
    pub file_path: String,
    pub linter: String,
    pub error_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrOutcome {
    pub text: String,
    pub success: bool,
    pub mode: OcrMode,
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOutcome {
    pub output_path: String,
    pub success: bool,
    pub input_format: String,
    pub output_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub text: String,
}

/// The payload produced by whichever collaborator the intent routed to.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RoutedResult {
    Search(SearchOutcome),
    Organize(OrganizeOutcome),
    Lint(LintOutcome),
    Ocr(OcrOutcome),
    Convert(ConvertOutcome),
    Answer(AnswerOutcome),
}

/// Uniform response envelope for one query. On failure `error` carries the
/// collaborator's message verbatim and `service` names the failed operation.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub success: bool,
    pub service: Operation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RoutedResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
