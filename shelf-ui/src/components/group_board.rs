//! Group board view - groups of books with per-book comments
//!
//! ## State Pattern
//! `groups` always comes from the parent. The component keeps only a
//! `GroupBoardState` signal and derives the active group and selected book
//! from the current props on every render.

use crate::components::prompt::PromptHandle;
use chrono::Local;
use dioxus::prelude::*;
use shelf_common::config::DEFAULT_SAVED_TIMESTAMP_FORMAT;
use shelf_common::{Book, BookId, CommentSave, Group, GroupBoardState};
use tracing::debug;

/// Group board view component
#[component]
pub fn GroupBoardView(
    groups: Vec<Group>,
    // Confirmation before deleting a group, alert when deleting the last one
    prompter: PromptHandle,
    // Called with (book_id, group_name) when a book is removed from its group
    on_delete: EventHandler<(BookId, String)>,
    // Called with a non-empty trimmed name
    on_add_group: EventHandler<String>,
    on_delete_group: EventHandler<String>,
    on_save_comment: EventHandler<CommentSave>,
    #[props(default = DEFAULT_SAVED_TIMESTAMP_FORMAT.to_string())] timestamp_format: String,
) -> Element {
    let mut state = use_signal(GroupBoardState::new);

    let (active_name, books, selected, draft, saved_message, new_group_name) = {
        let board = state.read();
        (
            board.active_group_name(&groups).to_string(),
            board.active_books(&groups).to_vec(),
            board.selected_book(&groups).cloned(),
            board.draft_comment().to_string(),
            board.saved_message().map(str::to_string),
            board.new_group_name().to_string(),
        )
    };
    let selected_id = selected.as_ref().map(|b| b.id);

    rsx! {
        div { class: "flex flex-col gap-6", "data-testid": "group-board",
            div { class: "flex gap-2",
                input {
                    r#type: "text",
                    class: "flex-1 bg-gray-800/50 rounded-lg px-3 py-2 text-gray-300 placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-accent/50",
                    value: "{new_group_name}",
                    placeholder: "New Group Name",
                    oninput: move |e| state.write().set_new_group_name(e.value()),
                }
                button {
                    class: "px-4 py-2 rounded-lg bg-indigo-600 hover:bg-indigo-500 text-white",
                    onclick: move |_| {
                        let name = state.write().add_group();
                        if let Some(name) = name {
                            on_add_group.call(name);
                        }
                    },
                    "Add Group"
                }
            }

            div { class: "flex gap-1 overflow-x-auto",
                for group in groups.iter() {
                    button {
                        key: "{group.name}",
                        class: group_button_class(group.name == active_name),
                        onclick: {
                            let name = group.name.clone();
                            move |_| state.write().select_group(&name)
                        },
                        "{group.name}"
                    }
                }
            }

            div { class: "flex flex-col gap-6",
                div { class: "grid grid-cols-[repeat(auto-fill,minmax(160px,1fr))] gap-4",
                    for book in books {
                        GroupBookTile {
                            key: "{book.id}",
                            is_selected: selected_id == Some(book.id),
                            book: book.clone(),
                            on_click: {
                                let book = book.clone();
                                move |_| state.write().click_book(&book)
                            },
                            on_remove: {
                                let groups = groups.clone();
                                move |book_id: BookId| {
                                    let request = state.read().remove_book(&groups, book_id);
                                    on_delete.call(request);
                                }
                            },
                        }
                    }
                }

                if let Some(book) = selected {
                    div { class: "bg-gray-800 rounded-lg p-4 flex flex-col gap-3",
                        "data-testid": "comment-section",
                        h3 { class: "font-bold text-white", "{book.title}" }
                        textarea {
                            class: "w-full h-32 bg-gray-900 text-gray-200 text-sm p-3 rounded-lg border border-gray-600 resize-none focus:outline-none focus:border-blue-500",
                            value: "{draft}",
                            placeholder: "Leave a review...",
                            oninput: move |e| state.write().edit_comment(e.value()),
                        }
                        button {
                            class: "self-start px-4 py-2 rounded-lg bg-indigo-600 hover:bg-indigo-500 text-white",
                            onclick: {
                                let groups = groups.clone();
                                let timestamp_format = timestamp_format.clone();
                                move |_| {
                                    let save = state
                                        .write()
                                        .save_comment(&groups, Local::now(), &timestamp_format);
                                    if let Some(save) = save {
                                        on_save_comment.call(save);
                                    }
                                }
                            },
                            "Save Comment"
                        }
                        if let Some(message) = saved_message {
                            p { class: "text-sm text-green-400", "data-testid": "saved-message",
                                "{message}"
                            }
                        }
                    }
                }
            }

            button {
                class: "self-start px-4 py-2 rounded-lg bg-red-600 hover:bg-red-500 text-white",
                onclick: {
                    let groups = groups.clone();
                    move |_| {
                        let result = state.write().delete_active_group(&groups, &prompter);
                        match result {
                            Ok(Some(name)) => on_delete_group.call(name),
                            Ok(None) => debug!("Group deletion cancelled"),
                            Err(e) => debug!("Group deletion rejected: {e}"),
                        }
                    }
                },
                "Delete Group"
            }
        }
    }
}

fn group_button_class(is_active: bool) -> &'static str {
    if is_active {
        "active px-3 py-1.5 text-sm rounded-lg bg-surface-raised text-white whitespace-nowrap"
    } else {
        "px-3 py-1.5 text-sm rounded-lg text-gray-400 hover:text-white hover:bg-hover whitespace-nowrap"
    }
}

/// A book tile inside the active group
#[component]
fn GroupBookTile(
    book: Book,
    is_selected: bool,
    on_click: EventHandler<()>,
    on_remove: EventHandler<BookId>,
) -> Element {
    let book_id = book.id;
    let cover_url = book.cover_url().to_string();

    let tile_class = if is_selected {
        "bg-gray-700 ring-2 ring-indigo-500 rounded-lg overflow-hidden cursor-pointer p-3 flex flex-col gap-2"
    } else {
        "bg-gray-800 hover:bg-gray-700 rounded-lg overflow-hidden cursor-pointer p-3 flex flex-col gap-2"
    };

    rsx! {
        div {
            class: "{tile_class}",
            "data-testid": "group-book",
            onclick: move |_| on_click.call(()),
            img {
                class: "w-full aspect-[2/3] object-cover bg-gray-700",
                src: "{cover_url}",
                alt: "{book.title}",
            }
            h3 { class: "font-bold text-white truncate", "{book.title}" }
            p { class: "text-gray-400 text-sm truncate", "{book.author}" }
            button {
                class: "px-3 py-1.5 text-sm rounded-lg bg-gray-700 hover:bg-gray-600 text-gray-300",
                onclick: move |evt| {
                    // Keep the tile from toggling selection
                    evt.stop_propagation();
                    on_remove.call(book_id);
                },
                "Remove Book"
            }
        }
    }
}
