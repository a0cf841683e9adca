use serde::{Deserialize, Serialize};

/// Path-autocompletion result. Suggestions keep directory-listing order and
/// `total` is re-counted after every filtering pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteResult {
    pub suggestions: Vec<String>,
    pub is_path: bool,
    pub total: usize,
}

impl AutocompleteResult {
    pub fn empty(is_path: bool) -> Self {
        Self {
            suggestions: Vec::new(),
            is_path,
            total: 0,
        }
    }
}
