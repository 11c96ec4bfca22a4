//! # Clipboard Service
//!
//! Write-only seam over the system clipboard. The system implementation
//! wraps arboard; the memory implementation backs tests and headless
//! environments where no clipboard is available.

use anyhow::Result;

/// Destination for copied field values
pub trait Clipboard: Send {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: String) -> Result<()>;
}

/// System clipboard backed by arboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open a handle to the system clipboard
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| anyhow::anyhow!("failed to access system clipboard: {e}"))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<()> {
        tracing::debug!("copying {} characters to system clipboard", text.len());
        self.inner
            .set_text(text)
            .map_err(|e| anyhow::anyhow!("failed to set clipboard text: {e}"))
    }
}

/// In-memory stand-in for the system clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty memory clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: String) -> Result<()> {
        self.content = Some(text);
        Ok(())
    }
}
