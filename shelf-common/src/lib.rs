//! shelf-common - Book collection model and view-state logic
//!
//! Pure data structures with no UI runtime. The Dioxus components in
//! shelf-ui hold these in signals and forward the requests they produce
//! to parent-supplied callbacks.

pub mod book;
pub mod collection;
pub mod config;
pub mod group_board;
pub mod prompt;
pub mod rating;
pub mod tabs;

pub use book::{Book, BookId, Cover, Group, Rating};
pub use collection::{Collection, CollectionError};
pub use config::ShelfConfig;
pub use group_board::{CommentSave, GroupBoardError, GroupBoardState};
pub use prompt::Prompter;
pub use rating::{RatingChange, StarRating};
pub use tabs::{active_tab, tab_buttons, TabButton, Tabbed};
