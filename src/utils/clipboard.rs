// src/utils/clipboard.rs
use std::thread;
use std::time::Duration;

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    log::debug!("Copied {} characters to the clipboard", text.chars().count());
    Ok(())
}

/// Copies `text`, waits `timeout_secs`, then clears the clipboard unless
/// something else was copied in the meantime. Blocks the caller.
pub fn copy_to_clipboard_with_timeout(text: &str, timeout_secs: u64) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    if timeout_secs == 0 {
        return Ok(());
    }

    thread::sleep(Duration::from_secs(timeout_secs));
    clear_if_unchanged(&mut clipboard, text)
}

/// Background variant for long-running sessions.
pub fn clear_clipboard_after(text: String, timeout_secs: u64) {
    if timeout_secs == 0 {
        return;
    }

    thread::spawn(move || {
        thread::sleep(Duration::from_secs(timeout_secs));
        let result = Clipboard::new()
            .map_err(ClipboardError::from)
            .and_then(|mut clipboard| clear_if_unchanged(&mut clipboard, &text));
        if let Err(e) = result {
            log::warn!("Failed to clear clipboard: {}", e);
        }
    });
}

fn clear_if_unchanged(clipboard: &mut Clipboard, text: &str) -> Result<()> {
    // Non-text contents read as an error and are left alone
    if clipboard.get_text().map_or(false, |current| current == text) {
        clipboard.clear()?;
        log::debug!("Cleared clipboard");
    }
    Ok(())
}
