//! Clipboard access for copying text
//!
//! Provides a seam over the Web Clipboard API so the copy flow can run against an
//! in-memory clipboard in tests.

use async_trait::async_trait;

/// Error type for clipboard writes
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardError {
    /// No window or navigator to reach the clipboard through
    Unavailable,
    /// The browser refused the write (permissions, insecure context, ...)
    Rejected(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "Clipboard is not available"),
            ClipboardError::Rejected(e) => write!(f, "Clipboard write rejected: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Write-only, asynchronous, fallible clipboard
#[async_trait(?Send)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard via `navigator.clipboard`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebClipboard;

#[async_trait(?Send)]
impl ClipboardWriter for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
    }
}
