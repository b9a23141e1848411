//! Group board view state
//!
//! Holds only ephemeral view state. Everything that depends on the current
//! groups (which group is active, which book is selected) is recomputed from
//! the groups passed in on every call, so a group that disappears between
//! renders is never shown as active.

use crate::book::{Book, BookId, Group};
use crate::config::DEFAULT_SAVED_TIMESTAMP_FORMAT;
use crate::prompt::Prompter;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{debug, warn};

/// Message shown when the last group would be deleted
pub const LAST_GROUP_MESSAGE: &str = "You cannot delete the only group.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupBoardError {
    #[error("You cannot delete the only group.")]
    LastGroup,
}

/// Request to persist a comment on a book within a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSave {
    pub book_id: BookId,
    pub group_name: String,
    pub text: String,
}

/// View state for the group board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupBoardState {
    /// Group the user picked. `None` means "first group".
    requested_group: Option<String>,
    selected_book: Option<BookId>,
    draft_comment: String,
    saved_message: Option<String>,
    new_group_name: String,
}

impl GroupBoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active group: the requested one if it still exists, else the first.
    pub fn active_group<'a>(&self, groups: &'a [Group]) -> Option<&'a Group> {
        self.requested_group
            .as_deref()
            .and_then(|name| groups.iter().find(|g| g.name == name))
            .or_else(|| groups.first())
    }

    /// Name of the active group, empty when there are no groups
    pub fn active_group_name<'a>(&self, groups: &'a [Group]) -> &'a str {
        self.active_group(groups)
            .map(|g| g.name.as_str())
            .unwrap_or("")
    }

    pub fn active_books<'a>(&self, groups: &'a [Group]) -> &'a [Book] {
        self.active_group(groups)
            .map(|g| g.books.as_slice())
            .unwrap_or(&[])
    }

    /// The selected book, looked up in the active group's current books
    pub fn selected_book<'a>(&self, groups: &'a [Group]) -> Option<&'a Book> {
        let id = self.selected_book?;
        self.active_group(groups)?.book(id)
    }

    pub fn draft_comment(&self) -> &str {
        &self.draft_comment
    }

    pub fn saved_message(&self) -> Option<&str> {
        self.saved_message.as_deref()
    }

    pub fn new_group_name(&self) -> &str {
        &self.new_group_name
    }

    /// Switch to another group, dropping the selection and draft.
    pub fn select_group(&mut self, name: &str) {
        debug!("Selecting group {name}");
        self.requested_group = Some(name.to_string());
        self.selected_book = None;
        self.draft_comment.clear();
    }

    /// Toggle selection of a book. Selecting loads its stored comment into
    /// the draft; deselecting clears the draft.
    pub fn click_book(&mut self, book: &Book) {
        if self.selected_book == Some(book.id) {
            self.selected_book = None;
            self.draft_comment.clear();
        } else {
            self.selected_book = Some(book.id);
            self.draft_comment = book.comment_text().to_string();
        }
    }

    /// Replace the draft. Any "Saved on" message is cleared.
    pub fn edit_comment(&mut self, text: impl Into<String>) {
        self.draft_comment = text.into();
        self.saved_message = None;
    }

    /// Save the draft for the selected book.
    ///
    /// Returns `None` without a selection. `timestamp_format` is a chrono
    /// format string; an invalid one falls back to the default layout.
    pub fn save_comment(
        &mut self,
        groups: &[Group],
        now: DateTime<Local>,
        timestamp_format: &str,
    ) -> Option<CommentSave> {
        let book_id = self.selected_book(groups)?.id;
        let group_name = self.active_group_name(groups).to_string();

        // Re-select the same book so the view refreshes from the new props
        self.selected_book = Some(book_id);
        self.saved_message = Some(format!(
            "Saved on {}",
            format_timestamp(now, timestamp_format)
        ));

        debug!("Saving comment on book {book_id} in group {group_name}");
        Some(CommentSave {
            book_id,
            group_name,
            text: self.draft_comment.clone(),
        })
    }

    pub fn set_new_group_name(&mut self, text: impl Into<String>) {
        self.new_group_name = text.into();
    }

    /// Take the trimmed new-group name. Blank input is left untouched and
    /// yields `None`.
    pub fn add_group(&mut self) -> Option<String> {
        let name = self.new_group_name.trim();
        if name.is_empty() {
            return None;
        }
        let name = name.to_string();
        self.new_group_name.clear();
        debug!("Requesting new group {name}");
        Some(name)
    }

    /// Ask to delete the active group.
    ///
    /// Returns `Ok(None)` when the user declines, `Ok(Some(name))` with the
    /// group to delete, or [`GroupBoardError::LastGroup`] (after alerting)
    /// when only one group remains.
    pub fn delete_active_group(
        &mut self,
        groups: &[Group],
        prompter: &impl Prompter,
    ) -> Result<Option<String>, GroupBoardError> {
        let name = self.active_group_name(groups).to_string();

        let message = format!("Are you sure you want to delete the group \"{name}\"?");
        if !prompter.confirm(&message) {
            return Ok(None);
        }

        if groups.len() <= 1 {
            warn!("Refusing to delete the only group {name:?}");
            prompter.alert(LAST_GROUP_MESSAGE);
            return Err(GroupBoardError::LastGroup);
        }

        // Fall back to whichever group is first once this one is gone
        self.requested_group = None;
        self.selected_book = None;
        self.draft_comment.clear();

        Ok(Some(name))
    }

    /// Book removal request for a tile in the active group
    pub fn remove_book(&self, groups: &[Group], book_id: BookId) -> (BookId, String) {
        (book_id, self.active_group_name(groups).to_string())
    }
}

fn format_timestamp(now: DateTime<Local>, format: &str) -> String {
    let valid = !StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    let format = if valid {
        format
    } else {
        warn!("Invalid timestamp format {format:?}, using default");
        DEFAULT_SAVED_TIMESTAMP_FORMAT
    };
    now.format(format).to_string()
}
