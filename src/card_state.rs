//! Card Interaction State
//!
//! Per-card menu/favorite/content flags and the transitions the card's
//! buttons and menu drive. Kept free of DOM types so it can be tested on
//! the host.

use crate::dialog::Dialogs;

/// Ephemeral state owned by one post card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    post_id: u32,
    menu_visible: bool,
    is_favorite: bool,
    /// Local copy of the post body; edits never reach the list's `Post`
    displayed_content: String,
}

impl CardState {
    pub fn new(post_id: u32, content: impl Into<String>) -> Self {
        Self {
            post_id,
            menu_visible: false,
            is_favorite: false,
            displayed_content: content.into(),
        }
    }

    pub fn post_id(&self) -> u32 {
        self.post_id
    }

    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn displayed_content(&self) -> &str {
        &self.displayed_content
    }

    /// Trigger button; the only way to open the menu
    pub fn toggle_menu(&mut self) {
        self.menu_visible = !self.menu_visible;
    }

    /// Pointer-down outside the menu region
    pub fn close_menu(&mut self) {
        self.menu_visible = false;
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }

    /// Apply a prompt answer. Cancel (`None`) and empty text are ignored.
    pub fn apply_edit(&mut self, answer: Option<String>) -> bool {
        match answer {
            Some(text) if !text.is_empty() => {
                self.displayed_content = text;
                true
            }
            _ => false,
        }
    }

    /// Prompt for new content seeded with the current text, then apply it
    pub fn edit(&mut self, dialogs: &dyn Dialogs, message: &str) -> bool {
        let answer = dialogs.prompt(message, &self.displayed_content);
        self.apply_edit(answer)
    }

    /// Ask for confirmation; `Some(id)` is the post the list should remove.
    ///
    /// The card never removes anything itself.
    pub fn request_delete(&self, dialogs: &dyn Dialogs, message: &str) -> Option<u32> {
        if dialogs.confirm(message) {
            Some(self.post_id)
        } else {
            None
        }
    }
}
