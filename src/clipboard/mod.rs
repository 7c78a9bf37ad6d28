//! Clipboard helper - best-effort text copy with a fallback chain
//!
//! Strategies are tried in order: the native platform clipboard first, then
//! an external copy utility. The outcome is reported through a [`Notifier`]
//! and returned as a `bool`; failures never propagate to the caller.

mod command;
mod copier;
mod notify;
mod strategy;
mod system;

use std::sync::Arc;

pub use command::CommandClipboard;
pub use copier::ClipboardCopier;
pub use notify::{ConsoleNotifier, Notification, Notifier, RecordingNotifier};
pub use strategy::{ClipboardStrategy, MockOutcome, MockStrategy, StrategyKind};
pub use system::SystemClipboard;

/// Success message used when the caller does not supply one
pub const DEFAULT_SUCCESS_MESSAGE: &str = "已复制";

/// Message shown when every strategy failed
pub const COPY_FAILED_MESSAGE: &str = "复制失败，请手动复制";

/// Copy text using the detected strategies, reporting to the console
pub async fn copy_to_clipboard(text: &str, success_message: Option<&str>) -> bool {
    let copier = ClipboardCopier::detect(Arc::new(ConsoleNotifier));
    copier
        .copy_with_message(text, success_message.unwrap_or(DEFAULT_SUCCESS_MESSAGE))
        .await
}
