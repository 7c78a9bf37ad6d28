//! Tool catalog with lookup and search
//!
//! Holds the ordered tool and category tables. The built-in catalog is
//! compiled in; alternative catalogs can be loaded from TOML at startup.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use serde::Deserialize;

use crate::error::{Result, ToolboxError};

use super::builtin;
use super::definition::{Category, Tool};
use super::search::SearchQuery;

static BUILTIN: LazyLock<ToolCatalog> = LazyLock::new(|| ToolCatalog {
    categories: builtin::categories(),
    tools: builtin::tools(),
});

/// TOML file structure
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(rename = "category", default)]
    categories: Vec<Category>,
    #[serde(rename = "tool", default)]
    tools: Vec<Tool>,
}

/// Ordered, read-only catalog of tools and categories
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    categories: Vec<Category>,
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Build a catalog, checking that ids are unique and every tool
    /// references a known category
    pub fn new(categories: Vec<Category>, tools: Vec<Tool>) -> Result<Self> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if category.id.is_empty() {
                return Err(ToolboxError::InvalidCatalog("category with empty id".into()));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(ToolboxError::InvalidCatalog(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
        }

        let mut tool_ids = HashSet::new();
        for tool in &tools {
            if tool.id.is_empty() {
                return Err(ToolboxError::InvalidCatalog(format!(
                    "tool '{}' has an empty id",
                    tool.name
                )));
            }
            if !tool_ids.insert(tool.id.as_str()) {
                return Err(ToolboxError::InvalidCatalog(format!(
                    "duplicate tool id '{}'",
                    tool.id
                )));
            }
            if !category_ids.contains(tool.category.as_str()) {
                return Err(ToolboxError::InvalidCatalog(format!(
                    "tool '{}' references unknown category '{}'",
                    tool.id, tool.category
                )));
            }
        }

        Ok(Self { categories, tools })
    }

    /// The compiled-in catalog
    pub fn builtin() -> &'static ToolCatalog {
        &BUILTIN
    }

    /// Load catalog from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml(&content)?;
        debug!(
            "Loaded catalog from {} ({} tools, {} categories)",
            path.display(),
            catalog.tools.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Load catalog from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let catalog: TomlCatalog = toml::from_str(content)
            .map_err(|e| ToolboxError::InvalidCatalog(format!("Failed to parse TOML: {}", e)))?;
        Self::new(catalog.categories, catalog.tools)
    }

    /// All tools in catalog order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// All categories in catalog order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a tool by id
    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Get a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Tools belonging to a category, in catalog order.
    /// An unknown category yields an empty list.
    pub fn by_category(&self, category_id: &str) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|t| t.category == category_id)
            .collect()
    }

    /// Case-insensitive substring search over name, description and
    /// keyword tags, in catalog order. An empty keyword matches every tool.
    pub fn search(&self, keyword: &str) -> Vec<&Tool> {
        let query = SearchQuery::new(keyword);
        self.tools.iter().filter(|t| query.matches(t)).collect()
    }

    /// Every category paired with its tools, in catalog order
    pub fn grouped(&self) -> Vec<(&Category, Vec<&Tool>)> {
        self.categories
            .iter()
            .map(|c| (c, self.by_category(&c.id)))
            .collect()
    }

    /// Get number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if catalog has no tools
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// All built-in tools in catalog order
pub fn tools() -> &'static [Tool] {
    ToolCatalog::builtin().tools()
}

/// All built-in categories in catalog order
pub fn categories() -> &'static [Category] {
    ToolCatalog::builtin().categories()
}

/// Built-in tools whose category equals `category_id`
pub fn get_tools_by_category(category_id: &str) -> Vec<&'static Tool> {
    ToolCatalog::builtin().by_category(category_id)
}

/// Search the built-in catalog
pub fn search_tools(keyword: &str) -> Vec<&'static Tool> {
    ToolCatalog::builtin().search(keyword)
}
