//! Native platform clipboard

use std::ffi::OsStr;

use async_trait::async_trait;
use log::debug;

use crate::error::{Result, ToolboxError};

use super::strategy::ClipboardStrategy;

/// Writes through the platform clipboard API via `arboard`.
///
/// On X11 without a clipboard manager the contents only live as long as the
/// process that set them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

/// Whether an X11 or Wayland session is reachable from this process.
#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
fn display_present(display: Option<&OsStr>, wayland: Option<&OsStr>) -> bool {
    [display, wayland].into_iter().flatten().any(|v| !v.is_empty())
}

#[async_trait]
impl ClipboardStrategy for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    // Must not open the clipboard: it runs on the async thread and the real
    // connection is made inside `write_text`.
    #[cfg(all(unix, not(target_os = "macos")))]
    fn is_available(&self) -> bool {
        let display = std::env::var_os("DISPLAY");
        let wayland = std::env::var_os("WAYLAND_DISPLAY");
        let present = display_present(display.as_deref(), wayland.as_deref());
        if !present {
            debug!("System clipboard unavailable: no DISPLAY or WAYLAND_DISPLAY");
        }
        present
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    fn is_available(&self) -> bool {
        true
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ToolboxError::Clipboard(format!("clipboard init: {}", e)))?;
            clipboard
                .set_text(text)
                .map_err(|e| ToolboxError::Clipboard(format!("clipboard set: {}", e)))
        })
        .await
        .map_err(|e| ToolboxError::Clipboard(format!("clipboard task failed: {}", e)))?
    }
}
