use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use toolbox::clipboard::{
    ClipboardCopier, CommandClipboard, DEFAULT_SUCCESS_MESSAGE, Notifier, StrategyKind,
};
use toolbox::tools::ToolCatalog;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub catalog: CatalogConfig,
    pub clipboard: ClipboardConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog that replaces the built-in one
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub success_message: String,
    pub strategies: Vec<StrategyKind>,
    pub command: Option<CopyCommandConfig>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            strategies: StrategyKind::default_order(),
            command: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyCommandConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            catalog: CatalogConfig::default(),
            clipboard: ClipboardConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<Cow<'static, ToolCatalog>> {
        match &self.catalog.path {
            Some(path) => {
                let catalog = ToolCatalog::from_file(path)
                    .context(format!("Failed to load catalog from {}", path.display()))?;
                Ok(Cow::Owned(catalog))
            }
            None => Ok(Cow::Borrowed(ToolCatalog::builtin())),
        }
    }

    /// Clipboard copier with the configured strategy order
    pub fn copier(&self, notifier: Arc<dyn Notifier>) -> ClipboardCopier {
        let command = self
            .clipboard
            .command
            .as_ref()
            .map(|c| CommandClipboard::new(c.program.clone(), c.args.clone()));
        ClipboardCopier::with_order(notifier, &self.clipboard.strategies, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbox::clipboard::RecordingNotifier;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert!(config.catalog.path.is_none());
        assert_eq!(config.clipboard.success_message, "已复制");
        assert_eq!(
            config.clipboard.strategies,
            vec![StrategyKind::System, StrategyKind::Command]
        );
        assert!(config.output.color);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbox.yml");
        fs::write(
            &path,
            r#"
log_level: debug
clipboard:
  success_message: copied
  strategies: [command]
  command:
    program: wl-copy
output:
  color: false
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.clipboard.success_message, "copied");
        assert_eq!(config.clipboard.strategies, vec![StrategyKind::Command]);
        let command = config.clipboard.command.as_ref().unwrap();
        assert_eq!(command.program, "wl-copy");
        assert!(command.args.is_empty());
        assert!(!config.output.color);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbox.yml");
        fs::write(&path, "output:\n  color: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.clipboard.success_message, "已复制");
        assert_eq!(config.clipboard.strategies.len(), 2);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let path = PathBuf::from("/nonexistent/toolbox.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_invalid_strategy_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbox.yml");
        fs::write(&path, "clipboard:\n  strategies: [telepathy]\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_builtin_catalog_by_default() {
        let catalog = Config::default().catalog().unwrap();
        assert!(matches!(catalog, Cow::Borrowed(_)));
        assert_eq!(catalog.len(), 28);
    }

    #[test]
    fn test_catalog_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.toml");
        fs::write(
            &catalog_path,
            r#"
[[category]]
id = "text"
name = "Text"
icon = "Document"

[[tool]]
id = "word-count"
name = "Word Count"
description = "Count words"
icon = "DataLine"
category = "text"
"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.catalog.path = Some(catalog_path);
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("word-count").is_some());
    }

    #[test]
    fn test_copier_uses_configured_command() {
        let mut config = Config::default();
        config.clipboard.strategies = vec![StrategyKind::Command];
        config.clipboard.command = Some(CopyCommandConfig {
            program: "my-copy".to_string(),
            args: vec!["--quiet".to_string()],
        });

        let copier = config.copier(Arc::new(RecordingNotifier::new()));
        assert_eq!(copier.strategy_names(), vec!["my-copy"]);
    }
}
