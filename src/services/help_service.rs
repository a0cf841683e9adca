use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::models::help::QuerySuggestion;

const MAX_SUGGESTIONS: usize = 10;

const CATEGORY_SEARCH: &str = "File Search";
const CATEGORY_ORGANIZE: &str = "Organization";
const CATEGORY_CODE: &str = "Code Tools";
const CATEGORY_OCR: &str = "OCR & Text";
const CATEGORY_CONVERT: &str = "Media Conversion";
const CATEGORY_GENERAL: &str = "General";

/// Common misspellings of operation keywords and their corrections.
const TYPO_TABLE: &[(&str, &str)] = &[
    ("fnd", "find"),
    ("serach", "search"),
    ("organze", "organize"),
    ("formatt", "format"),
    ("conver", "convert"),
    ("convrt", "convert"),
    ("trnscode", "transcode"),
];

pub fn categories() -> Vec<&'static str> {
    vec![
        CATEGORY_SEARCH,
        CATEGORY_ORGANIZE,
        CATEGORY_CODE,
        CATEGORY_OCR,
        CATEGORY_CONVERT,
        CATEGORY_GENERAL,
    ]
}

/// The most useful suggestion per category, shown before the user types.
pub fn featured() -> Vec<QuerySuggestion> {
    vec![
        QuerySuggestion::new(
            "find my config",
            "Search for configuration files",
            CATEGORY_SEARCH,
            &["find my neovim config", "where is hyprland config"],
        ),
        QuerySuggestion::new(
            "organize downloads",
            "Organize files by category or name",
            CATEGORY_ORGANIZE,
            &["organize ~/Downloads", "clean up ~/Desktop"],
        ),
        QuerySuggestion::new(
            "format code.py",
            "Auto-format code files",
            CATEGORY_CODE,
            &["lint main.go", "format script.sh"],
        ),
        QuerySuggestion::new(
            "extract text from screen",
            "OCR from screenshot or image",
            CATEGORY_OCR,
            &["ocr", "read text from image.png"],
        ),
        QuerySuggestion::new(
            "convert video to mp4",
            "Convert media files between formats",
            CATEGORY_CONVERT,
            &["convert song.flac to mp3", "encode video.avi to webm"],
        ),
    ]
}

fn catalog() -> Vec<QuerySuggestion> {
    vec![
        QuerySuggestion::new(
            "find my [filename]",
            "Search for files in config and home directories",
            CATEGORY_SEARCH,
            &["find my bashrc", "find my nvim config", "where is alacritty.toml"],
        ),
        QuerySuggestion::new(
            "where is [config]",
            "Locate configuration files",
            CATEGORY_SEARCH,
            &["where is my kitty config", "locate waybar config"],
        ),
        QuerySuggestion::new(
            "search for [term]",
            "Search for files matching terms",
            CATEGORY_SEARCH,
            &["search for hypr", "look for zsh"],
        ),
        QuerySuggestion::new(
            "organize [path]",
            "Organize files by category (default)",
            CATEGORY_ORGANIZE,
            &["organize ~/Downloads", "organize ."],
        ),
        QuerySuggestion::new(
            "organize [path] by name",
            "Organize files alphabetically by filename",
            CATEGORY_ORGANIZE,
            &["organize ~/Pictures by filename", "sort ~/Documents by name"],
        ),
        QuerySuggestion::new(
            "clean up [path]",
            "Tidy up a directory",
            CATEGORY_ORGANIZE,
            &["clean up ~/Downloads", "tidy ~/workspace"],
        ),
        QuerySuggestion::new(
            "format [file]",
            "Auto-format code file (Python, Go, JS/TS, Shell)",
            CATEGORY_CODE,
            &["format main.py", "lint script.go", "fix code.js"],
        ),
        QuerySuggestion::new(
            "lint [file]",
            "Check and fix code formatting",
            CATEGORY_CODE,
            &["lint app.ts", "check code.sh"],
        ),
        QuerySuggestion::new(
            "ocr",
            "Capture screenshot and extract text",
            CATEGORY_OCR,
            &["ocr", "extract text", "read screen"],
        ),
        QuerySuggestion::new(
            "extract text from [image]",
            "Extract text from an image file",
            CATEGORY_OCR,
            &["ocr screenshot.png", "extract text from photo.jpg"],
        ),
        QuerySuggestion::new(
            "read text from screen",
            "Screenshot selection and OCR",
            CATEGORY_OCR,
            &["capture text", "screenshot text"],
        ),
        QuerySuggestion::new(
            "convert [file] to [format]",
            "Convert media files between formats",
            CATEGORY_CONVERT,
            &["convert video.webm to mp4", "convert song.flac to mp3"],
        ),
        QuerySuggestion::new(
            "transcode [file]",
            "Re-encode a media file",
            CATEGORY_CONVERT,
            &["transcode movie.avi", "encode audio.wav to ogg"],
        ),
        QuerySuggestion::new(
            "change format [file] to [format]",
            "Change media format",
            CATEGORY_CONVERT,
            &["change format image.png to jpg"],
        ),
        QuerySuggestion::new(
            "help",
            "Show available commands and examples",
            CATEGORY_GENERAL,
            &["help", "what can you do", "commands"],
        ),
    ]
}

/// Suggestions matching a partial input. An empty partial yields the featured
/// set; otherwise entries matching on query, description, or category are
/// ranked by fuzzy score against the query field.
pub fn suggestions(partial: &str) -> Vec<QuerySuggestion> {
    if partial.is_empty() {
        return featured();
    }

    let lower = partial.to_lowercase();
    let matcher = SkimMatcherV2::default();

    let mut matches: Vec<(i64, QuerySuggestion)> = catalog()
        .into_iter()
        .filter(|s| {
            s.query.to_lowercase().contains(&lower)
                || s.description.to_lowercase().contains(&lower)
                || s.category.to_lowercase().contains(&lower)
        })
        .map(|s| {
            let score = matcher.fuzzy_match(&s.query, &lower).unwrap_or(0);
            (score, s)
        })
        .collect();

    matches.sort_by(|a, b| b.0.cmp(&a.0));
    matches.truncate(MAX_SUGGESTIONS);
    matches.into_iter().map(|(_, s)| s).collect()
}

pub fn by_category(category: &str) -> Vec<QuerySuggestion> {
    catalog()
        .into_iter()
        .filter(|s| s.category.eq_ignore_ascii_case(category))
        .collect()
}

/// Rewrites known misspelled operation keywords. Returns the corrected query
/// only when something actually changed.
pub fn correct_typos(query: &str) -> Option<String> {
    let lower = query.to_lowercase();
    let mut changed = false;
    let corrected: Vec<&str> = lower
        .split_whitespace()
        .map(|word| match TYPO_TABLE.iter().find(|(typo, _)| *typo == word) {
            Some((_, fix)) => {
                changed = true;
                *fix
            }
            None => word,
        })
        .collect();
    changed.then(|| corrected.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_partial_returns_featured_set() {
        let featured = suggestions("");
        assert_eq!(featured.len(), 5);
        assert!(featured.iter().any(|s| s.category == CATEGORY_CONVERT));
    }

    #[test]
    fn partial_matches_query_description_or_category() {
        let convert = suggestions("convert");
        assert!(!convert.is_empty());
        assert!(convert.iter().all(|s| s.category == CATEGORY_CONVERT));

        let code = suggestions("code tools");
        assert!(code.iter().all(|s| s.category == CATEGORY_CODE));
    }

    #[test]
    fn match_count_is_capped() {
        // Single letters match broadly through descriptions.
        assert!(suggestions("e").len() <= 10);
    }

    #[test]
    fn by_category_is_case_insensitive() {
        let entries = by_category("organization");
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|s| s.category == CATEGORY_ORGANIZE));
    }

    #[test]
    fn known_typos_are_corrected() {
        assert_eq!(
            correct_typos("serach for my bashrc").as_deref(),
            Some("search for my bashrc")
        );
        assert_eq!(
            correct_typos("conver song.flac to mp3").as_deref(),
            Some("convert song.flac to mp3")
        );
    }

    #[test]
    fn clean_queries_pass_unchanged() {
        assert_eq!(correct_typos("convert song.flac to mp3"), None);
    }
}
