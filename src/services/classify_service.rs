use tracing::debug;

use crate::models::intent::{
    Alternative, Intent, OcrMode, Operation, OperationParams, OrganizeMode, SCORED_OPERATIONS,
};
use crate::query_text;

/// A candidate must beat this to be reported as an alternative.
pub const ALTERNATIVE_THRESHOLD: f64 = 0.3;
/// A winner below this degrades to the assistant fallback; a weak match
/// must never trigger a file-mutating operation.
pub const FALLBACK_THRESHOLD: f64 = 0.4;
/// Fixed confidence reported for the assistant fallback.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

const LINTABLE_EXTENSIONS: &[&str] = &[".py", ".go", ".js", ".ts", ".jsx", ".tsx", ".sh"];
const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg", ".jpeg", ".bmp", ".tiff", ".gif"];

/// One scorer's verdict for one operation. Produced per classification call,
/// never persisted.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub operation: Operation,
    pub score: f64,
    pub params: OperationParams,
}

fn score_file_search(lower: &str, raw: &str) -> (f64, OperationParams) {
    let mut score: f64 = 0.0;

    for pattern in [
        "where is",
        "where's",
        "find my",
        "locate",
        "search for",
        "look for",
        "looking for",
    ] {
        if lower.contains(pattern) {
            score += 0.4;
        }
    }

    for pattern in ["find", "search", "get"] {
        if lower.contains(pattern) {
            score += 0.2;
        }
    }

    for pattern in [
        "file",
        "folder",
        "directory",
        "config",
        ".conf",
        ".config",
        ".json",
        ".yaml",
        ".toml",
    ] {
        if lower.contains(pattern) {
            score += 0.3;
        }
    }

    if lower.contains(".config") || lower.contains("home") {
        score += 0.2;
    }

    (
        score.min(1.0),
        OperationParams::Search {
            query: raw.to_string(),
        },
    )
}

fn score_organizer(lower: &str, raw: &str) -> (f64, OperationParams) {
    let mut score: f64 = 0.0;

    for pattern in ["organize", "clean up", "tidy", "kondo"] {
        if lower.contains(pattern) {
            score += 0.5;
        }
    }

    for pattern in ["sort", "arrange", "group"] {
        if lower.contains(pattern) {
            score += 0.3;
        }
    }

    let mode = if ["category", "type", "extension"]
        .iter()
        .any(|p| lower.contains(p))
    {
        score += 0.1;
        Some(OrganizeMode::Category)
    } else if ["filename", "name", "alphabetical"]
        .iter()
        .any(|p| lower.contains(p))
    {
        score += 0.1;
        Some(OrganizeMode::Filename)
    } else {
        None
    };

    let path = query_text::extract_path_token(raw);

    (score.min(1.0), OperationParams::Organize { mode, path })
}

fn score_linter(lower: &str, raw: &str) -> (f64, OperationParams) {
    let mut score: f64 = 0.0;

    for pattern in ["lint", "format", "prettier", "beautify"] {
        if lower.contains(pattern) {
            score += 0.5;
        }
    }

    for pattern in [
        "fix code",
        "check code",
        "style",
        "formatting",
        "indentation",
        "syntax",
    ] {
        if lower.contains(pattern) {
            score += 0.3;
        }
    }

    for ext in LINTABLE_EXTENSIONS {
        if lower.contains(ext) {
            score += 0.4;
        }
    }

    let path = query_text::extract_path_token(raw);
    if path.is_some() {
        score += 0.1;
    }

    (score.min(1.0), OperationParams::Lint { path })
}

fn score_ocr(lower: &str, raw: &str) -> (f64, OperationParams) {
    let mut score: f64 = 0.0;

    for pattern in ["ocr", "extract text", "read text"] {
        if lower.contains(pattern) {
            score += 0.6;
        }
    }

    for pattern in [
        "screenshot",
        "capture",
        "scan",
        "read screen",
        "text from image",
        "image to text",
    ] {
        if lower.contains(pattern) {
            score += 0.4;
        }
    }

    // A path in the query means file-based extraction, otherwise the
    // collaborator captures the screen.
    let params = match query_text::extract_path_token(raw) {
        Some(path) => {
            let path_lower = path.to_lowercase();
            if IMAGE_SUFFIXES.iter().any(|ext| path_lower.ends_with(ext)) {
                score += 0.2;
            }
            OperationParams::Ocr {
                mode: OcrMode::File,
                path: Some(path),
            }
        }
        None => OperationParams::Ocr {
            mode: OcrMode::Screen,
            path: None,
        },
    };

    (score.min(1.0), params)
}

fn score_converter(lower: &str, raw: &str) -> (f64, OperationParams) {
    let mut score: f64 = 0.0;

    for pattern in ["convert", "transcode", "encode"] {
        if lower.contains(pattern) {
            score += 0.5;
        }
    }

    for pattern in ["to mp4", "to mp3", "to wav", "to png", "to jpg", "change format"] {
        if lower.contains(pattern) {
            score += 0.3;
        }
    }

    let formats = query_text::extract_formats(lower);
    let (from_format, to_format) = if formats.len() >= 2 {
        // Likely "convert X to Y": first mention is the source, last the target.
        score += 0.3;
        (
            Some(formats[0].to_string()),
            Some(formats[formats.len() - 1].to_string()),
        )
    } else if formats.len() == 1 {
        score += 0.2;
        (None, Some(formats[0].to_string()))
    } else {
        (None, None)
    };

    let path = query_text::extract_path_token(raw);
    if path.is_some() {
        score += 0.2;
    }

    (
        score.min(1.0),
        OperationParams::Convert {
            path,
            from_format,
            to_format,
        },
    )
}

fn score_operation(operation: Operation, lower: &str, raw: &str) -> (f64, OperationParams) {
    match operation {
        Operation::FileSearch => score_file_search(lower, raw),
        Operation::Organizer => score_organizer(lower, raw),
        Operation::Linter => score_linter(lower, raw),
        Operation::Ocr => score_ocr(lower, raw),
        Operation::Converter => score_converter(lower, raw),
        Operation::Assistant => unreachable!("assistant has no scorer"),
    }
}

/// Runs every scorer and produces the candidates with a positive score, in
/// classification order.
pub fn score_all(query: &str) -> Vec<ScoredCandidate> {
    let lower = query.to_lowercase();
    SCORED_OPERATIONS
        .iter()
        .filter_map(|&operation| {
            let (score, params) = score_operation(operation, &lower, query);
            (score > 0.0).then(|| ScoredCandidate {
                operation,
                score,
                params,
            })
        })
        .collect()
}

/// Classifies a query into an intent. Candidates are walked in the fixed
/// scorer order with a running maximum; a demoted previous best joins the
/// alternatives when it scored above the reporting threshold. A winner below
/// the confidence threshold degrades to the assistant fallback with the
/// collected alternatives intact.
pub fn classify(query: &str) -> Intent {
    let mut best: Option<ScoredCandidate> = None;
    let mut alternatives: Vec<Alternative> = Vec::new();

    for candidate in score_all(query) {
        match &best {
            Some(current) if candidate.score > current.score => {
                if current.score > ALTERNATIVE_THRESHOLD {
                    alternatives.push(Alternative {
                        operation: current.operation,
                        confidence: current.score,
                    });
                }
                best = Some(candidate);
            }
            Some(_) => {
                if candidate.score > ALTERNATIVE_THRESHOLD {
                    alternatives.push(Alternative {
                        operation: candidate.operation,
                        confidence: candidate.score,
                    });
                }
            }
            None => best = Some(candidate),
        }
    }

    let intent = match best {
        Some(winner) if winner.score >= FALLBACK_THRESHOLD => Intent {
            operation: winner.operation,
            confidence: winner.score,
            params: winner.params,
            alternatives,
        },
        _ => Intent {
            operation: Operation::Assistant,
            confidence: FALLBACK_CONFIDENCE,
            params: OperationParams::Assistant {
                query: query.to_string(),
            },
            alternatives,
        },
    };

    debug!(
        operation = %intent.operation,
        confidence = intent.confidence,
        alternatives = intent.alternatives.len(),
        "classified query"
    );

    intent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_operation_keyword_scores_at_least_half() {
        let intent = classify("lint");
        assert_eq!(intent.operation, Operation::Linter);
        assert!(intent.confidence >= 0.5);
    }

    #[test]
    fn confidence_is_clamped_to_one() {
        // Saturates the file-search scorer: three strong patterns plus
        // several context hits.
        let intent = classify("where is my config file, search for the folder in home");
        assert_eq!(intent.operation, Operation::FileSearch);
        assert!(intent.confidence <= 1.0);
        assert!(intent.confidence >= 0.99);
        for alt in &intent.alternatives {
            assert!(alt.confidence <= intent.confidence);
        }
    }

    #[test]
    fn zero_scores_fall_back_to_assistant() {
        let intent = classify("hello world");
        assert_eq!(intent.operation, Operation::Assistant);
        assert_eq!(intent.confidence, FALLBACK_CONFIDENCE);
        assert!(intent.alternatives.is_empty());
        assert_eq!(
            intent.params,
            OperationParams::Assistant {
                query: "hello world".to_string()
            }
        );
    }

    #[test]
    fn weak_single_signal_falls_back_to_assistant() {
        // "sort" alone scores the organizer 0.3, below the 0.4 threshold.
        let intent = classify("sort this out");
        assert_eq!(intent.operation, Operation::Assistant);
        assert_eq!(intent.confidence, FALLBACK_CONFIDENCE);
    }

    #[test]
    fn organizer_extracts_mode_and_path() {
        let intent = classify("organize ~/Downloads by name");
        assert_eq!(intent.operation, Operation::Organizer);
        assert_eq!(
            intent.params,
            OperationParams::Organize {
                mode: Some(OrganizeMode::Filename),
                path: Some("~/Downloads".to_string()),
            }
        );
    }

    #[test]
    fn organizer_category_mode_from_keywords() {
        let intent = classify("organize ~/Desktop by type");
        assert_eq!(intent.operation, Operation::Organizer);
        match intent.params {
            OperationParams::Organize { mode, .. } => {
                assert_eq!(mode, Some(OrganizeMode::Category))
            }
            other => panic!("unexpected params: {other:?}"),
        }
    }

    #[test]
    fn converter_applies_first_last_format_rule() {
        let intent = classify("convert song.flac to mp3");
        assert_eq!(intent.operation, Operation::Converter);
        match intent.params {
            OperationParams::Convert {
                from_format,
                to_format,
                ..
            } => {
                assert_eq!(from_format.as_deref(), Some("flac"));
                assert_eq!(to_format.as_deref(), Some("mp3"));
            }
            other => panic!("unexpected params: {other:?}"),
        }
    }

    #[test]
    fn converter_single_format_becomes_target() {
        let intent = classify("transcode video.avi");
        assert_eq!(intent.operation, Operation::Converter);
        match intent.params {
            OperationParams::Convert {
                from_format,
                to_format,
                ..
            } => {
                assert_eq!(from_format, None);
                assert_eq!(to_format.as_deref(), Some("avi"));
            }
            other => panic!("unexpected params: {other:?}"),
        }
    }

    #[test]
    fn ocr_defaults_to_screen_without_a_path() {
        let intent = classify("ocr");
        assert_eq!(intent.operation, Operation::Ocr);
        assert_eq!(
            intent.params,
            OperationParams::Ocr {
                mode: OcrMode::Screen,
                path: None,
            }
        );
    }

    #[test]
    fn ocr_with_image_path_switches_to_file_mode() {
        let intent = classify("extract text from ~/shots/screen.png");
        assert_eq!(intent.operation, Operation::Ocr);
        assert_eq!(
            intent.params,
            OperationParams::Ocr {
                mode: OcrMode::File,
                path: Some("~/shots/screen.png".to_string()),
            }
        );
    }

    #[test]
    fn exact_tie_goes_to_earlier_scorer() {
        // Organizer and linter both land on exactly 0.5 here; the fixed
        // order makes the organizer the winner every time.
        let intent = classify("organize and lint");
        assert_eq!(intent.operation, Operation::Organizer);
        assert!(intent
            .alternatives
            .iter()
            .any(|alt| alt.operation == Operation::Linter && alt.confidence == intent.confidence));
    }

    #[test]
    fn runner_up_above_threshold_is_reported() {
        let intent = classify("find my config and format main.py");
        assert_eq!(intent.operation, Operation::FileSearch);
        let linter = intent
            .alternatives
            .iter()
            .find(|alt| alt.operation == Operation::Linter)
            .expect("linter should be a reported alternative");
        assert!(linter.confidence > ALTERNATIVE_THRESHOLD);
        assert!(linter.confidence <= intent.confidence);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        for query in [
            "",
            "lint",
            "organize everything by category now",
            "convert song.flac to mp3 and also transcode video.avi to webm",
            "where is my config file, search for the folder in home .config",
        ] {
            for candidate in score_all(query) {
                assert!(candidate.score > 0.0 && candidate.score <= 1.0, "query: {query}");
            }
        }
    }
}
