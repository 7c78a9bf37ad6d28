//! Ordered fallback chain over clipboard strategies

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{debug, info, warn};

use super::command::CommandClipboard;
use super::notify::Notifier;
use super::strategy::{ClipboardStrategy, StrategyKind};
use super::system::SystemClipboard;
use super::{COPY_FAILED_MESSAGE, DEFAULT_SUCCESS_MESSAGE};

/// Copies text using the first strategy that works and reports the outcome.
///
/// `copy` never fails: strategy errors are logged and the next strategy is
/// tried. Exactly one notification is emitted per call.
pub struct ClipboardCopier {
    strategies: Vec<Arc<dyn ClipboardStrategy>>,
    notifier: Arc<dyn Notifier>,
}

impl ClipboardCopier {
    /// Create a copier with no strategies
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            strategies: Vec::new(),
            notifier,
        }
    }

    /// Append a strategy to the end of the chain
    pub fn with_strategy(mut self, strategy: Arc<dyn ClipboardStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Native clipboard first, then any copy utility found on PATH
    pub fn detect(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_order(notifier, &StrategyKind::default_order(), None)
    }

    /// Build a chain in the given order. `command` replaces the detected
    /// copy utility for [`StrategyKind::Command`].
    pub fn with_order(
        notifier: Arc<dyn Notifier>,
        order: &[StrategyKind],
        command: Option<CommandClipboard>,
    ) -> Self {
        let mut copier = Self::new(notifier);
        for kind in order {
            match kind {
                StrategyKind::System => {
                    copier = copier.with_strategy(Arc::new(SystemClipboard::new()));
                }
                StrategyKind::Command => match command.clone().or_else(CommandClipboard::detect) {
                    Some(cmd) => copier = copier.with_strategy(Arc::new(cmd)),
                    None => debug!("No copy utility found, skipping command strategy"),
                },
            }
        }
        copier
    }

    /// Names of the configured strategies, in order
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Copy with the default success message
    pub async fn copy(&self, text: &str) -> bool {
        self.copy_with_message(text, DEFAULT_SUCCESS_MESSAGE).await
    }

    /// Copy text, emitting `success_message` if any strategy succeeds
    pub async fn copy_with_message(&self, text: &str, success_message: &str) -> bool {
        for strategy in &self.strategies {
            if !strategy.is_available() {
                debug!("Clipboard strategy '{}' unavailable, skipping", strategy.name());
                continue;
            }

            match AssertUnwindSafe(strategy.write_text(text)).catch_unwind().await {
                Ok(Ok(())) => {
                    info!(
                        "Copied {} bytes via '{}'",
                        text.len(),
                        strategy.name()
                    );
                    self.notifier.success(success_message);
                    return true;
                }
                Ok(Err(e)) => {
                    warn!("Clipboard strategy '{}' failed: {}", strategy.name(), e);
                }
                Err(panic) => {
                    warn!(
                        "Clipboard strategy '{}' panicked: {}",
                        strategy.name(),
                        panic_message(panic.as_ref())
                    );
                }
            }
        }

        warn!("All clipboard strategies failed");
        self.notifier.error(COPY_FAILED_MESSAGE);
        false
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}
