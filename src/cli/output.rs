//! Text and JSON rendering of catalog records

use colored::*;
use eyre::Result;
use serde::Serialize;

use toolbox::tools::{Category, Tool, ToolCatalog};

/// A tool with its navigation route, for JSON output
#[derive(Debug, Serialize)]
pub struct ToolView<'a> {
    #[serde(flatten)]
    pub tool: &'a Tool,
    pub route: String,
}

impl<'a> ToolView<'a> {
    pub fn new(tool: &'a Tool) -> Self {
        Self {
            route: tool.route(),
            tool,
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn tool_line(tool: &Tool) -> String {
    format!("  {:<20} {}  {}", tool.id.cyan(), tool.name, tool.description.dimmed())
}

pub fn category_line(category: &Category, count: usize) -> String {
    format!("{} {} ({})", category.id.bold(), category.name, count)
}

pub fn print_tools(tools: &[&Tool]) {
    for tool in tools {
        println!("{}", tool_line(tool));
    }
}

pub fn print_grouped(catalog: &ToolCatalog) {
    for (category, tools) in catalog.grouped() {
        println!("{}", category_line(category, tools.len()));
        print_tools(&tools);
    }
}

pub fn print_tool_details(tool: &Tool, category: Option<&Category>) {
    println!("{} {}", tool.name.bold(), format!("({})", tool.id).dimmed());
    println!("  {:<12} {}", "description:".green(), tool.description);
    match category {
        Some(c) => println!("  {:<12} {} ({})", "category:".green(), c.name, c.id),
        None => println!("  {:<12} {}", "category:".green(), tool.category),
    }
    println!("  {:<12} {}", "keywords:".green(), tool.keywords.join(", "));
    println!("  {:<12} {}", "icon:".green(), tool.icon);
    println!("  {:<12} {}", "route:".green(), tool.route());
}
