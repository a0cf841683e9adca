use serde::{Deserialize, Serialize};

/// One entry of the query-suggestion catalog shown while the user types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySuggestion {
    pub query: String,
    pub description: String,
    pub category: String,
    pub examples: Vec<String>,
}

impl QuerySuggestion {
    pub fn new(query: &str, description: &str, category: &str, examples: &[&str]) -> Self {
        Self {
            query: query.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            examples: examples.iter().map(|e| e.to_string()).collect(),
        }
    }
}
