//! Text helpers shared by the intent scorers, the router, and autocompletion.

/// Filler words carrying no search signal. Tokens matching these are dropped
/// during term extraction.
const STOP_WORDS: &[&str] = &[
    "where", "is", "my", "the", "a", "an", "find", "search", "for", "file",
];

/// Media formats the converter understands, in match-priority order.
pub const MEDIA_FORMATS: &[&str] = &[
    "mp4", "webm", "avi", "mkv", "mov", "mp3", "wav", "flac", "ogg", "m4a", "png", "jpg", "jpeg",
    "gif", "webp",
];

const MIN_TERM_CHARS: usize = 3;
const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];
const QUOTES: &[char] = &['"', '\''];

/// Extracts significant search terms from a query: lowercased, punctuation
/// trimmed, stop words and short tokens dropped. An empty result is valid and
/// means no file can match all terms.
pub fn extract_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(PUNCTUATION))
        .filter(|word| word.chars().count() >= MIN_TERM_CHARS && !STOP_WORDS.contains(word))
        .map(|word| word.to_string())
        .collect()
}

/// Returns the first whitespace-separated word that looks like a filesystem
/// path: contains `/`, starts with `~`, or starts with `.`. Surrounding quotes
/// are stripped before the check. First qualifying word wins.
pub fn extract_path_token(query: &str) -> Option<String> {
    query
        .split_whitespace()
        .map(|word| word.trim_matches(QUOTES))
        .find(|word| word.contains('/') || word.starts_with('~') || word.starts_with('.'))
        .map(|word| word.to_string())
}

/// Extracts the path fragment being typed at the end of an autocomplete input.
/// An input that is already a path is returned whole; otherwise the last
/// path-like word is used.
pub fn extract_trailing_path(input: &str) -> Option<String> {
    if input.starts_with('/')
        || input.starts_with('~')
        || input.starts_with("./")
        || input.starts_with("../")
    {
        return Some(input.to_string());
    }

    input
        .split_whitespace()
        .rev()
        .find(|word| word.contains('/') || word.contains('~') || word.starts_with('.'))
        .map(|word| word.to_string())
}

/// Returns the first known media format mentioned in the query, checking
/// formats in priority order. A format counts when it appears after a space,
/// after a dot, or as the query suffix.
pub fn extract_format(query: &str) -> Option<&'static str> {
    let lower = query.to_lowercase();
    MEDIA_FORMATS.iter().copied().find(|format| {
        lower.contains(&format!(" {format}"))
            || lower.contains(&format!(".{format}"))
            || lower.ends_with(format)
    })
}

/// Collects every whole-word media format occurrence in positional order.
/// The converter scorer applies the first/last rule over this sequence.
pub fn extract_formats(query: &str) -> Vec<&'static str> {
    let lower = query.to_lowercase();
    let bytes = lower.as_bytes();
    let is_word_byte = |b: u8| b.is_ascii_alphanumeric() || b == b'_';

    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if i > 0 && is_word_byte(bytes[i - 1]) {
            i += 1;
            continue;
        }
        let matched = MEDIA_FORMATS.iter().copied().find(|format| {
            let end = i + format.len();
            end <= bytes.len()
                && &bytes[i..end] == format.as_bytes()
                && (end == bytes.len() || !is_word_byte(bytes[end]))
        });
        match matched {
            Some(format) => {
                found.push(format);
                i += format.len();
            }
            None => i += 1,
        }
    }
    found
}
