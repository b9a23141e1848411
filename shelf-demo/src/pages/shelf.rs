//! Shelf page - owns the collection and wires the view callbacks

use crate::prompt::BrowserPrompter;
use crate::{config, demo_data};
use dioxus::prelude::*;
use shelf_common::{BookId, CommentSave, RatingChange};
use shelf_ui::{BookCard, GroupBoardView, PromptHandle, TabContainer, TabPane};
use tracing::{info, warn};

#[component]
pub fn Shelf() -> Element {
    let shelf_config = use_hook(config::load);
    let prompter = use_hook(|| PromptHandle::new(BrowserPrompter));
    let mut collection = use_signal(demo_data::collection);
    let mut active_tab = use_signal(|| shelf_config.initial_tab.clone());

    let groups = collection.read().groups().to_vec();
    let books: Vec<_> = collection
        .read()
        .books()
        .map(|(group, book)| (group.name.clone(), book.clone()))
        .collect();

    let books_pane = rsx! {
        div { class: "grid grid-cols-[repeat(auto-fill,minmax(200px,1fr))] gap-6",
            for (group_name, book) in books {
                div { key: "{book.id}", class: "flex flex-col gap-1",
                    BookCard {
                        book: book.clone(),
                        on_rating_change: move |change: RatingChange| {
                            let updated = collection.write().rate(&change.isbn, change.rating);
                            if updated == 0 {
                                warn!("No book with isbn {} to rate", change.isbn);
                            }
                        },
                        on_delete: move |book_id: BookId| {
                            let result = collection.write().delete_book(book_id);
                            if let Err(e) = result {
                                warn!("Failed to delete book: {e}");
                            }
                        },
                    }
                    p { class: "text-xs text-gray-500", "{group_name}" }
                }
            }
        }
    };

    let groups_pane = rsx! {
        GroupBoardView {
            groups,
            prompter,
            timestamp_format: shelf_config.saved_timestamp_format.clone(),
            on_delete: move |(book_id, group): (BookId, String)| {
                let result = collection.write().remove_book(book_id, &group);
                if let Err(e) = result {
                    warn!("Failed to remove book: {e}");
                }
            },
            on_add_group: move |name: String| {
                let result = collection.write().add_group(&name);
                if let Err(e) = result {
                    warn!("Failed to add group: {e}");
                }
            },
            on_delete_group: move |name: String| {
                let result = collection.write().delete_group(&name);
                if let Err(e) = result {
                    warn!("Failed to delete group: {e}");
                }
            },
            on_save_comment: move |save: CommentSave| {
                let result = collection
                    .write()
                    .save_comment(save.book_id, &save.group_name, &save.text);
                if let Err(e) = result {
                    warn!("Failed to save comment: {e}");
                }
            },
        }
    };

    rsx! {
        div { class: "container mx-auto flex flex-col py-10 gap-6",
            h1 { class: "text-3xl font-bold text-white", "My Books" }
            TabContainer {
                tabs: vec![
                    TabPane::new("books", "All Books", books_pane),
                    TabPane::new("groups", "Groups", groups_pane),
                ],
                active_tab: active_tab(),
                on_select: move |key: String| {
                    info!("Switching to tab {key}");
                    active_tab.set(key);
                },
            }
        }
    }
}
