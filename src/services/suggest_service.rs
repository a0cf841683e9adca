use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AppError;
use crate::models::autocomplete::AutocompleteResult;
use crate::models::intent::Operation;
use crate::query_text;

pub const MAX_SUGGESTIONS: usize = 20;

const LINT_EXTENSIONS: &[&str] = &["py", "go", "sh", "js", "ts", "jsx", "tsx"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff", "tif", "gif", "webp"];
const MEDIA_EXTENSIONS: &[&str] = &[
    "mp4", "webm", "avi", "mkv", "mov", "mp3", "wav", "flac", "ogg", "m4a", "png", "jpg", "jpeg",
    "gif", "webp",
];

/// Collaborator seam for filesystem enumeration.
pub trait PathCompleter {
    fn complete(&self, partial: &str) -> Result<Vec<String>, AppError>;
}

/// Real-filesystem completer. Relative fragments resolve against a base
/// directory rather than the process CWD so callers stay deterministic.
pub struct FsCompleter {
    base_dir: PathBuf,
}

impl FsCompleter {
    pub fn new() -> Self {
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        Self { base_dir }
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, partial: &str) -> PathBuf {
        if let Some(rest) = partial.strip_prefix('~') {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest.trim_start_matches('/'));
            }
        }
        let path = Path::new(partial);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(partial)
        }
    }
}

impl Default for FsCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCompleter for FsCompleter {
    fn complete(&self, partial: &str) -> Result<Vec<String>, AppError> {
        if partial.is_empty() {
            return Ok(vec![format!("{}/", self.base_dir.display())]);
        }

        let resolved = self.resolve(partial);
        let (dir, prefix) = if partial.ends_with('/') {
            (resolved, String::new())
        } else {
            let prefix = resolved
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            let dir = resolved
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("/"));
            (dir, prefix)
        };

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let prefix_lower = prefix.to_lowercase();
        let mut matches = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();

            // Hidden entries only show up when explicitly asked for.
            if name.starts_with('.') && !prefix.starts_with('.') {
                continue;
            }
            if !name.to_lowercase().starts_with(&prefix_lower) {
                continue;
            }

            let mut full = dir.join(&name).to_string_lossy().to_string();
            if entry.file_type()?.is_dir() {
                full.push('/');
            }
            matches.push(full);
        }

        matches.sort();
        matches.truncate(MAX_SUGGESTIONS);
        Ok(matches)
    }
}

/// Generic path autocompletion: decides whether the input is a path context,
/// extracts the fragment being typed, and delegates to the completer. A
/// completer failure degrades to an empty suggestion list.
pub fn get_path_suggestions(
    completer: &dyn PathCompleter,
    input: &str,
    force_treat_as_path: bool,
) -> AutocompleteResult {
    let is_path = force_treat_as_path
        || input.contains('/')
        || input.contains('~')
        || input.starts_with('.');

    if !is_path {
        return AutocompleteResult::empty(false);
    }

    let mut fragment = query_text::extract_trailing_path(input).unwrap_or_default();
    if fragment.is_empty() && force_treat_as_path {
        fragment = "./".to_string();
    }

    match completer.complete(&fragment) {
        Ok(suggestions) => AutocompleteResult {
            total: suggestions.len(),
            is_path: true,
            suggestions,
        },
        Err(err) => {
            debug!(error = %err, "path completion failed");
            AutocompleteResult::empty(true)
        }
    }
}

fn extension_allow_set(operation: Operation) -> Option<&'static [&'static str]> {
    match operation {
        Operation::Linter => Some(LINT_EXTENSIONS),
        Operation::Ocr => Some(IMAGE_EXTENSIONS),
        Operation::Converter => Some(MEDIA_EXTENSIONS),
        Operation::FileSearch | Operation::Organizer | Operation::Assistant => None,
    }
}

fn has_allowed_extension(path: &str, allowed: &[&str]) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| allowed.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Narrows suggestions to the file types the selected operation can act on.
/// Directories always pass; order is preserved and the total re-counted.
pub fn filter_for_operation(operation: Operation, result: AutocompleteResult) -> AutocompleteResult {
    let Some(allowed) = extension_allow_set(operation) else {
        return result;
    };

    let suggestions: Vec<String> = result
        .suggestions
        .into_iter()
        .filter(|path| path.ends_with('/') || has_allowed_extension(path, allowed))
        .collect();

    AutocompleteResult {
        total: suggestions.len(),
        is_path: result.is_path,
        suggestions,
    }
}

/// Autocompletion for the currently selected operation: every operation but
/// file search forces path treatment, then applies its extension filter.
pub fn suggestions_for_operation(
    completer: &dyn PathCompleter,
    operation: Operation,
    input: &str,
) -> AutocompleteResult {
    match operation {
        Operation::Assistant => AutocompleteResult::empty(false),
        Operation::FileSearch => get_path_suggestions(completer, input, false),
        _ => filter_for_operation(operation, get_path_suggestions(completer, input, true)),
    }
}
