use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use cli::output;
use config::Config;
use toolbox::ToolboxError;
use toolbox::clipboard::{ConsoleNotifier, StrategyKind};
use toolbox::tools::ToolCatalog;

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolbox")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolbox.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.unwrap_or("info")))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<ExitCode> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    // The catalog is only loaded by the commands that read it, so `copy`
    // keeps working when the configured catalog file is broken.
    match &cli.command {
        None => {
            output::print_grouped(&*config.catalog()?);
        }
        Some(Commands::List { category, json }) => {
            handle_list_command(&*config.catalog()?, category.as_deref(), *json)?
        }
        Some(Commands::Categories { json }) => handle_categories_command(&*config.catalog()?, *json)?,
        Some(Commands::Search { keyword, json }) => {
            handle_search_command(&*config.catalog()?, keyword, *json, cli.is_verbose())?
        }
        Some(Commands::Show { id, json }) => handle_show_command(&*config.catalog()?, id, *json)?,
        Some(Commands::Copy { text, message, strategy }) => {
            return handle_copy_command(text.as_deref(), message.as_deref(), strategy, config).await;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_list_command(catalog: &ToolCatalog, category: Option<&str>, json: bool) -> Result<()> {
    info!("Listing tools - category: {:?}", category);
    match category {
        Some(id) => {
            let tools = catalog.by_category(id);
            if json {
                let views: Vec<_> = tools.iter().map(|t| output::ToolView::new(t)).collect();
                return output::print_json(&views);
            }
            match catalog.category(id) {
                Some(c) => println!("{}", output::category_line(c, tools.len())),
                None => println!("{} {}", "No tools in category:".yellow(), id),
            }
            output::print_tools(&tools);
        }
        None => {
            if json {
                let views: Vec<_> = catalog.tools().iter().map(output::ToolView::new).collect();
                return output::print_json(&views);
            }
            output::print_grouped(catalog);
        }
    }
    Ok(())
}

fn handle_categories_command(catalog: &ToolCatalog, json: bool) -> Result<()> {
    info!("Listing categories");
    if json {
        return output::print_json(catalog.categories());
    }
    for category in catalog.categories() {
        let count = catalog.by_category(&category.id).len();
        println!("{}", output::category_line(category, count));
    }
    Ok(())
}

fn handle_search_command(catalog: &ToolCatalog, keyword: &str, json: bool, verbose: bool) -> Result<()> {
    info!("Searching tools for: {:?}", keyword);
    let found = catalog.search(keyword);
    if json {
        let views: Vec<_> = found.iter().map(|t| output::ToolView::new(t)).collect();
        return output::print_json(&views);
    }
    if found.is_empty() {
        println!("{} {}", "No tools match:".yellow(), keyword);
        return Ok(());
    }
    if verbose {
        println!("{} {} of {}", "Matched:".green(), found.len(), catalog.len());
    }
    output::print_tools(&found);
    Ok(())
}

fn handle_show_command(catalog: &ToolCatalog, id: &str, json: bool) -> Result<()> {
    info!("Showing tool: {}", id);
    let tool = catalog
        .get(id)
        .ok_or_else(|| ToolboxError::ToolNotFound(id.to_string()))?;
    if json {
        return output::print_json(&output::ToolView::new(tool));
    }
    output::print_tool_details(tool, catalog.category(&tool.category));
    Ok(())
}

async fn handle_copy_command(
    text: Option<&str>,
    message: Option<&str>,
    strategies: &[StrategyKind],
    config: &Config,
) -> Result<ExitCode> {
    let text = match text {
        Some(t) => t.to_string(),
        None => read_stdin()?,
    };
    info!("Copying {} bytes to clipboard", text.len());

    let copier = if strategies.is_empty() {
        config.copier(Arc::new(ConsoleNotifier))
    } else {
        info!("Strategy order overridden: {:?}", strategies);
        let mut config = config.clone();
        config.clipboard.strategies = strategies.to_vec();
        config.copier(Arc::new(ConsoleNotifier))
    };
    let message = message.unwrap_or(config.clipboard.success_message.as_str());
    if copier.copy_with_message(&text, message).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    let trimmed = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text.as_str())
        .len();
    text.truncate(trimmed);
    Ok(text)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging once the configured level is known
    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")
}
