//! Routes free-form natural-language queries to file/media operations and
//! produces operation-aware path autocompletion.
//!
//! The crate is the decision core of a desktop assistant: a multi-signal
//! scoring classifier picks the operation a query means, a router resolves
//! missing parameters and dispatches to external collaborators behind the
//! [`QueryExecutor`] seam, and a suggestion layer narrows filesystem
//! autocompletion to the files the selected operation can act on. Everything
//! here is a stateless function of its inputs plus fixed rule tables.

mod error;
mod models;
pub mod query_text;
mod services;

pub use error::AppError;
pub use models::autocomplete::AutocompleteResult;
pub use models::help::QuerySuggestion;
pub use models::intent::{
    Alternative, Intent, OcrMode, Operation, OperationParams, OrganizeMode, SCORED_OPERATIONS,
};
pub use models::outcome::{
    AnswerOutcome, ConvertOutcome, LintOutcome, OcrOutcome, OrganizeOutcome, QueryResponse,
    RoutedResult, SearchOutcome,
};
pub use services::classify_service::{classify, score_all, ScoredCandidate};
pub use services::help_service;
pub use services::router_service::{route, QueryExecutor};
pub use services::suggest_service::{
    filter_for_operation, get_path_suggestions, suggestions_for_operation, FsCompleter,
    PathCompleter, MAX_SUGGESTIONS,
};

/// Classifies a query, routes it to the matching collaborator, and wraps the
/// outcome in the uniform response envelope. Collaborator errors surface
/// verbatim in the envelope rather than as a `Result` so callers always get
/// the failed operation's name alongside the message.
pub fn process_query(exec: &dyn QueryExecutor, query: &str) -> QueryResponse {
    let intent = classify(query);
    match route(exec, &intent, query) {
        Ok(result) => QueryResponse {
            success: true,
            service: intent.operation,
            result: Some(result),
            error: None,
        },
        Err(err) => QueryResponse {
            success: false,
            service: intent.operation,
            result: None,
            error: Some(err.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubExecutor {
        fail_search: bool,
    }

    impl StubExecutor {
        fn ok() -> Self {
            Self { fail_search: false }
        }
    }

    impl QueryExecutor for StubExecutor {
        fn search(&self, query: &str) -> Result<SearchOutcome, AppError> {
            if self.fail_search {
                return Err(AppError::General("file not found".to_string()));
            }
            Ok(SearchOutcome {
                path: format!("/home/user/.config/{query}"),
                kind: "file".to_string(),
                found: true,
                size_bytes: Some(1024),
                modified_at: None,
                matches: Vec::new(),
                score: 100,
            })
        }

        fn organize(&self, path: &str, mode: OrganizeMode) -> Result<OrganizeOutcome, AppError> {
            Ok(OrganizeOutcome {
                output: String::new(),
                success: true,
                files_changed: 0,
                path: path.to_string(),
                mode,
            })
        }

        fn lint(&self, path: &str) -> Result<LintOutcome, AppError> {
            Ok(LintOutcome {
                output: String::new(),
                fixed: true,
                file_path: path.to_string(),
                linter: "prettier".to_string(),
                error_count: 0,
            })
        }

        fn ocr_screen(&self) -> Result<OcrOutcome, AppError> {
            Ok(OcrOutcome {
                text: String::new(),
                success: true,
                mode: OcrMode::Screen,
                word_count: 0,
                confidence: None,
            })
        }

        fn ocr_file(&self, _path: &str) -> Result<OcrOutcome, AppError> {
            Ok(OcrOutcome {
                text: String::new(),
                success: true,
                mode: OcrMode::File,
                word_count: 0,
                confidence: None,
            })
        }

        fn convert(&self, path: &str, to_format: &str) -> Result<ConvertOutcome, AppError> {
            Ok(ConvertOutcome {
                output_path: format!("{path}.{to_format}"),
                success: true,
                input_format: "avi".to_string(),
                output_format: to_format.to_string(),
                size_bytes: None,
            })
        }

        fn assist(&self, _query: &str) -> Result<AnswerOutcome, AppError> {
            Ok(AnswerOutcome {
                text: "let me help with that".to_string(),
            })
        }
    }

    #[test]
    fn successful_query_wraps_result() {
        let response = process_query(&StubExecutor::ok(), "where is my nvim config");
        assert!(response.success);
        assert_eq!(response.service, Operation::FileSearch);
        assert!(matches!(response.result, Some(RoutedResult::Search(_))));
        assert!(response.error.is_none());
    }

    #[test]
    fn collaborator_failure_surfaces_verbatim() {
        let exec = StubExecutor { fail_search: true };
        let response = process_query(&exec, "where is my nvim config");
        assert!(!response.success);
        assert_eq!(response.service, Operation::FileSearch);
        assert!(response.result.is_none());
        assert_eq!(response.error.as_deref(), Some("file not found"));
    }

    #[test]
    fn low_confidence_query_reaches_the_assistant() {
        let response = process_query(&StubExecutor::ok(), "what is the weather like");
        assert!(response.success);
        assert_eq!(response.service, Operation::Assistant);
        assert!(matches!(response.result, Some(RoutedResult::Answer(_))));
    }

    #[test]
    fn conversion_without_path_fails_in_the_envelope() {
        let response = process_query(&StubExecutor::ok(), "convert something to mp3");
        assert!(!response.success);
        assert_eq!(response.service, Operation::Converter);
        assert_eq!(
            response.error.as_deref(),
            Some("no file path provided for conversion")
        );
    }

    #[test]
    fn envelope_serializes_without_null_fields() {
        let response = process_query(&StubExecutor::ok(), "lint ./src/app.ts");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["service"], "linter");
        assert!(json.get("error").is_none());
    }
}
