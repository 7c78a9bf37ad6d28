//! Keyword matching for catalog search

use super::definition::Tool;

/// A lower-cased search keyword, ready to test against tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Build a query from raw user input
    pub fn new(keyword: &str) -> Self {
        Self {
            needle: keyword.to_lowercase(),
        }
    }

    /// The lower-cased keyword
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Check whether a tool matches this query.
    ///
    /// Name and description are lower-cased before comparison. Keyword tags
    /// are compared as authored, so an upper-case tag never matches.
    pub fn matches(&self, tool: &Tool) -> bool {
        tool.name.to_lowercase().contains(&self.needle)
            || tool.description.to_lowercase().contains(&self.needle)
            || tool.keywords.iter().any(|k| k.contains(&self.needle))
    }
}
