//! Clipboard writes through an external copy utility
//!
//! Used when the native clipboard cannot be reached. Each write spawns its own
//! utility process, feeds it the text on stdin and waits for it to exit.

use std::process::Stdio;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use log::debug;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};

use crate::error::{Result, ToolboxError};

use super::strategy::ClipboardStrategy;

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];
const XSEL_ARGS: &[&str] = &["--clipboard", "--input"];

/// A spawned copy utility. Killed on drop if it has not exited.
struct CopyProcess {
    child: Child,
    live: Arc<AtomicUsize>,
}

impl CopyProcess {
    fn spawn(cmd: &mut Command, live: Arc<AtomicUsize>) -> std::io::Result<Self> {
        let child = cmd.spawn()?;
        live.fetch_add(1, Ordering::SeqCst);
        Ok(Self { child, live })
    }
}

impl Drop for CopyProcess {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.start_kill();
        }
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Pipes text into a command such as `pbcopy` or `xclip`
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
    live: Arc<AtomicUsize>,
}

impl CommandClipboard {
    /// Create a strategy for an explicit program and arguments
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Known copy utilities for this platform, most preferred first
    pub fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
        if cfg!(target_os = "macos") {
            vec![("pbcopy", NO_ARGS)]
        } else if cfg!(target_os = "windows") {
            vec![("clip", NO_ARGS)]
        } else {
            let mut candidates = Vec::new();
            if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                candidates.push(("wl-copy", NO_ARGS));
            }
            candidates.push(("xclip", XCLIP_ARGS));
            candidates.push(("xsel", XSEL_ARGS));
            candidates
        }
    }

    /// First known copy utility found on PATH
    pub fn detect() -> Option<Self> {
        Self::candidates()
            .into_iter()
            .find(|(program, _)| which::which(program).is_ok())
            .map(|(program, args)| {
                debug!("Detected copy utility: {}", program);
                Self::new(program, args.iter().copied())
            })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Copy processes spawned by this strategy that have not been cleaned up
    pub fn live_processes(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClipboardStrategy for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        // Utilities like xclip leave a daemon behind holding the selection;
        // it inherits stdout/stderr, so those must not be pipes we wait on.
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let mut process = CopyProcess::spawn(&mut cmd, Arc::clone(&self.live)).map_err(|e| {
            ToolboxError::Clipboard(format!("Failed to spawn {}: {}", self.program, e))
        })?;

        let mut stdin = process
            .child
            .stdin
            .take()
            .ok_or_else(|| ToolboxError::Clipboard(format!("{} has no stdin", self.program)))?;
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| ToolboxError::Clipboard(format!("Failed to write to {}: {}", self.program, e)))?;
        stdin
            .shutdown()
            .await
            .map_err(|e| ToolboxError::Clipboard(format!("Failed to close {} stdin: {}", self.program, e)))?;
        drop(stdin);

        let status = process
            .child
            .wait()
            .await
            .map_err(|e| ToolboxError::Clipboard(format!("Failed to wait for {}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolboxError::Clipboard(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let clipboard = CommandClipboard::new("xclip", ["-selection", "clipboard"]);
        assert_eq!(clipboard.program(), "xclip");
        assert_eq!(clipboard.args(), ["-selection", "clipboard"]);
        assert_eq!(clipboard.name(), "xclip");
        assert_eq!(clipboard.live_processes(), 0);
    }

    #[test]
    fn test_candidates_not_empty() {
        assert!(!CommandClipboard::candidates().is_empty());
    }

    #[test]
    fn test_missing_program_unavailable() {
        let clipboard = CommandClipboard::new("definitely-not-a-copy-tool", Vec::<String>::new());
        assert!(!clipboard.is_available());
    }

    #[tokio::test]
    async fn test_missing_program_write_fails() {
        let clipboard = CommandClipboard::new("definitely-not-a-copy-tool", Vec::<String>::new());
        let err = clipboard.write_text("hello").await.unwrap_err();
        assert!(err.to_string().contains("Failed to spawn"));
        assert_eq!(clipboard.live_processes(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_utility_leaves_no_process() {
        let clipboard = CommandClipboard::new("cat", Vec::<String>::new());
        assert!(clipboard.is_available());
        clipboard.write_text("hello 世界").await.unwrap();
        assert_eq!(clipboard.live_processes(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_utility_leaves_no_process() {
        let clipboard = CommandClipboard::new("sh", ["-c", "cat > /dev/null; exit 3"]);
        let err = clipboard.write_text("hello").await.unwrap_err();
        assert!(err.to_string().contains("exited with"));
        assert_eq!(clipboard.live_processes(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_concurrent_writes_are_independent() {
        let clipboard = CommandClipboard::new("cat", Vec::<String>::new());
        let (a, b) = tokio::join!(clipboard.write_text("one"), clipboard.write_text("two"));
        assert!(a.is_ok());
        assert!(b.is_ok());
        assert_eq!(clipboard.live_processes(), 0);
    }
}
