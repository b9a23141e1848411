//! Shared UI components

pub mod book_card;
pub mod group_board;
pub mod prompt;
pub mod tab_container;

pub use book_card::BookCard;
pub use group_board::GroupBoardView;
pub use prompt::PromptHandle;
pub use tab_container::{TabContainer, TabPane};
