//! 系统剪贴板
//!
//! Best effort, fire and forget: one attempt, no retry.

use tracing::debug;

use crate::errors::{LinkfrontError, Result};
use crate::services::messages;

/// Copy `text` and return the confirmation message to show.
#[cfg(feature = "clipboard")]
pub fn copy_text(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(LinkfrontError::clipboard("Nothing to copy"));
    }
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| LinkfrontError::clipboard(format!("Clipboard unavailable: {}", e)))?;
    clipboard
        .set_text(text)
        .map_err(|e| LinkfrontError::clipboard(format!("Failed to copy: {}", e)))?;
    debug!("Copied {} bytes to clipboard", text.len());
    Ok(messages::copied(text))
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_text(text: &str) -> Result<String> {
    debug!("Clipboard support disabled, not copying {} bytes", text.len());
    Err(LinkfrontError::clipboard(
        "Built without clipboard support",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(matches!(
            copy_text(""),
            Err(LinkfrontError::Clipboard(_))
        ));
    }
}
