//! Toolbox - a catalog of small, independent text and image utilities
//!
//! Tools are grouped into categories and found by keyword search. The
//! clipboard helper copies text through a chain of fallback strategies.

pub mod clipboard;
pub mod error;
pub mod tools;

pub use error::{Result, ToolboxError};
