//! Clipboard write strategies

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolboxError};

/// One way of putting text on the clipboard
#[async_trait]
pub trait ClipboardStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Probe whether this strategy can run in the current environment
    fn is_available(&self) -> bool;

    /// Write text to the clipboard
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Names the built-in strategies in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Native platform clipboard
    System,
    /// External copy utility fed through stdin
    Command,
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" | "native" => Ok(Self::System),
            "command" | "cmd" | "legacy" => Ok(Self::Command),
            other => Err(format!("unknown clipboard strategy '{}'", other)),
        }
    }
}

impl StrategyKind {
    /// Modern path first, legacy fallback second
    pub fn default_order() -> Vec<Self> {
        vec![Self::System, Self::Command]
    }
}

/// Scripted outcome for [`MockStrategy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOutcome {
    Succeed,
    Fail,
    Panic,
    Unavailable,
}

/// Strategy with a fixed outcome, for tests
#[derive(Debug)]
pub struct MockStrategy {
    name: String,
    outcome: MockOutcome,
    calls: AtomicUsize,
}

impl MockStrategy {
    pub fn new(name: impl Into<String>, outcome: MockOutcome) -> Self {
        Self {
            name: name.into(),
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `write_text` was invoked
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClipboardStrategy for MockStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.outcome != MockOutcome::Unavailable
    }

    async fn write_text(&self, _text: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            MockOutcome::Succeed => Ok(()),
            MockOutcome::Panic => panic!("{} blew up", self.name),
            MockOutcome::Fail => Err(ToolboxError::Clipboard(format!("{} rejected write", self.name))),
            MockOutcome::Unavailable => {
                Err(ToolboxError::Clipboard(format!("{} is unavailable", self.name)))
            }
        }
    }
}
