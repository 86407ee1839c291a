//! Host Dialogs
//!
//! Blocking prompt/confirm requests. Both calls suspend the UI thread until
//! the user answers, so no other input is handled in between.

use log::warn;

pub trait Dialogs {
    /// Ask for a line of text, pre-filled with `seed`. `None` means cancelled.
    fn prompt(&self, message: &str, seed: &str) -> Option<String>;

    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;
}

/// `window.prompt` / `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn prompt(&self, message: &str, seed: &str) -> Option<String> {
        let Some(win) = web_sys::window() else {
            warn!("[DIALOG] no window, prompt treated as cancelled");
            return None;
        };
        match win.prompt_with_message_and_default(message, seed) {
            Ok(answer) => answer,
            Err(e) => {
                warn!("[DIALOG] prompt failed: {:?}", e);
                None
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        let Some(win) = web_sys::window() else {
            warn!("[DIALOG] no window, confirm treated as declined");
            return false;
        };
        match win.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                warn!("[DIALOG] confirm failed: {:?}", e);
                false
            }
        }
    }
}
