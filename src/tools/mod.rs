//! Tool catalog - tool and category records, lookup, and search

mod builtin;
mod catalog;
mod definition;
mod search;

pub use catalog::{ToolCatalog, categories, get_tools_by_category, search_tools, tools};
pub use definition::{Category, Tool};
pub use search::SearchQuery;
