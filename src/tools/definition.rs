//! Tool and category records
//!
//! A tool is one catalog entry describing a single utility page; a category
//! groups tools for navigation.

use serde::{Deserialize, Serialize};

/// A named grouping of tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique slug (e.g., "text", "encode")
    pub id: String,
    /// Display name
    pub name: String,
    /// Icon reference, opaque to this crate
    pub icon: String,
}

impl Category {
    /// Create a new category
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Navigation path of the category page
    pub fn route(&self) -> String {
        format!("/category/{}", self.id)
    }
}

/// A single utility in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique slug, also the routing key for the tool's view
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Icon reference, opaque to this crate
    pub icon: String,
    /// Id of the owning category
    pub category: String,
    /// Search tags, matched verbatim (not case-folded)
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Tool {
    /// Create a new tool with no keywords and no icon
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: String::new(),
            category: category.into(),
            keywords: Vec::new(),
        }
    }

    /// Set icon reference
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set search keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Navigation path of the tool's view
    pub fn route(&self) -> String {
        format!("/tool/{}", self.id)
    }
}
