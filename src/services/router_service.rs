use tracing::debug;

use crate::error::AppError;
use crate::models::intent::{Intent, OcrMode, OperationParams, OrganizeMode};
use crate::models::outcome::{
    AnswerOutcome, ConvertOutcome, LintOutcome, OcrOutcome, OrganizeOutcome, RoutedResult,
    SearchOutcome,
};
use crate::query_text;

/// The collaborator seam: one method per external executor. Implementations
/// invoke the real tools (filesystem walker, kondo, formatters, tesseract,
/// ffmpeg, the assistant backend); this crate only decides which one to call.
pub trait QueryExecutor {
    fn search(&self, query: &str) -> Result<SearchOutcome, AppError>;
    fn organize(&self, path: &str, mode: OrganizeMode) -> Result<OrganizeOutcome, AppError>;
    fn lint(&self, path: &str) -> Result<LintOutcome, AppError>;
    fn ocr_screen(&self) -> Result<OcrOutcome, AppError>;
    fn ocr_file(&self, path: &str) -> Result<OcrOutcome, AppError>;
    fn convert(&self, path: &str, to_format: &str) -> Result<ConvertOutcome, AppError>;
    fn assist(&self, query: &str) -> Result<AnswerOutcome, AppError>;
}

/// Dispatches a classified intent to its collaborator, resolving missing
/// parameters from the original query text where the operation tolerates it.
/// Conversion never falls back to the raw query as a path: a missing path or
/// target format there is a hard error.
pub fn route(
    exec: &dyn QueryExecutor,
    intent: &Intent,
    original_query: &str,
) -> Result<RoutedResult, AppError> {
    debug!(operation = %intent.operation, confidence = intent.confidence, "routing intent");

    match &intent.params {
        OperationParams::Search { query } => exec.search(query).map(RoutedResult::Search),

        OperationParams::Organize { mode, path } => {
            let mode = mode.unwrap_or(OrganizeMode::Category);
            // The raw query is an acceptable fallback: the organizer
            // collaborator does its own path parsing.
            let path = path.as_deref().unwrap_or(original_query);
            exec.organize(path, mode).map(RoutedResult::Organize)
        }

        OperationParams::Lint { path } => {
            let path = path.as_deref().unwrap_or(original_query);
            exec.lint(path).map(RoutedResult::Lint)
        }

        OperationParams::Ocr { mode, path } => match mode {
            OcrMode::File => {
                let path = path
                    .as_deref()
                    .ok_or_else(|| AppError::MissingPath("ocr".to_string()))?;
                exec.ocr_file(path).map(RoutedResult::Ocr)
            }
            OcrMode::Screen => exec.ocr_screen().map(RoutedResult::Ocr),
        },

        OperationParams::Convert { path, to_format, .. } => {
            let path = path
                .as_deref()
                .ok_or_else(|| AppError::MissingPath("conversion".to_string()))?;
            match to_format {
                Some(format) => exec.convert(path, format).map(RoutedResult::Convert),
                None => convert_from_query(exec, original_query).map(RoutedResult::Convert),
            }
        }

        OperationParams::Assistant { query } => exec.assist(query).map(RoutedResult::Answer),
    }
}

/// Query-parsing conversion entry point: re-extracts both path and target
/// format from the raw text. Used when classification did not pin a format.
fn convert_from_query(
    exec: &dyn QueryExecutor,
    query: &str,
) -> Result<ConvertOutcome, AppError> {
    let path = query_text::extract_path_token(query)
        .ok_or_else(|| AppError::MissingPath("conversion".to_string()))?;
    let format = query_text::extract_format(query)
        .ok_or_else(|| AppError::MissingFormat("conversion".to_string()))?;
    exec.convert(&path, format)
}
