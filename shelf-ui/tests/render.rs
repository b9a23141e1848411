use dioxus::prelude::*;
use shelf_common::{Book, Cover, Group, Prompter, Rating};
use shelf_ui::{BookCard, GroupBoardView, PromptHandle, TabContainer, TabPane};

struct Decline;

impl Prompter for Decline {
    fn confirm(&self, _message: &str) -> bool {
        false
    }

    fn alert(&self, _message: &str) {}
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn book(id: u64, title: &str, author: &str, rating: u8, cover: Option<&str>) -> Book {
    Book {
        id,
        isbn: format!("isbn-{id}"),
        title: title.to_string(),
        author: author.to_string(),
        cover: cover.map(|large| Cover {
            large: large.to_string(),
        }),
        rating: Rating::from(rating),
        comment: None,
    }
}

fn groups() -> Vec<Group> {
    vec![
        Group {
            name: "Fiction".to_string(),
            books: vec![book(1, "Dune", "Frank Herbert", 3, Some("/covers/dune.jpg"))],
        },
        Group {
            name: "History".to_string(),
            books: vec![book(2, "SPQR", "Mary Beard", 4, None)],
        },
    ]
}

#[test]
fn book_card_renders_metadata_and_filled_stars() {
    fn app() -> Element {
        rsx! {
            BookCard {
                book: book(1, "Dune", "Frank Herbert", 3, Some("/covers/dune.jpg")),
                on_rating_change: |_| {},
                on_delete: |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Dune"));
    assert!(html.contains("Author: Frank Herbert"));
    assert!(html.contains("/covers/dune.jpg"));
    assert_eq!(html.matches("star filled").count(), 3);
    assert_eq!(html.matches('★').count(), 5);
    assert!(html.contains("Delete"));
}

#[test]
fn book_card_unrated_book_shows_one_star() {
    fn app() -> Element {
        rsx! {
            BookCard {
                book: book(2, "SPQR", "Mary Beard", 0, None),
                on_rating_change: |_| {},
                on_delete: |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Author: Mary Beard"));
    assert_eq!(html.matches("star filled").count(), 1);
}

#[test]
fn group_board_shows_only_first_group_books() {
    fn app() -> Element {
        rsx! {
            GroupBoardView {
                groups: groups(),
                prompter: PromptHandle::new(Decline),
                on_delete: |_| {},
                on_add_group: |_| {},
                on_delete_group: |_| {},
                on_save_comment: |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Fiction"));
    assert!(html.contains("History"));
    assert!(html.contains("Dune"));
    assert!(!html.contains("SPQR"));
    assert!(html.contains("Remove Book"));
    assert!(html.contains("Add Group"));
    assert!(html.contains("Delete Group"));
    assert!(!html.contains("comment-section"));
}

#[test]
fn tab_container_renders_only_active_pane() {
    fn app() -> Element {
        rsx! {
            TabContainer {
                tabs: vec![
                    TabPane::new("books", "All Books", rsx! { p { "books pane" } }),
                    TabPane::new("groups", "Groups", rsx! { p { "groups pane" } }),
                ],
                active_tab: "groups".to_string(),
                on_select: |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("All Books"));
    assert!(html.contains("Groups"));
    assert!(html.contains("groups pane"));
    assert!(!html.contains("books pane"));
}

#[test]
fn tab_container_renders_nothing_for_unknown_key() {
    fn app() -> Element {
        rsx! {
            TabContainer {
                tabs: vec![TabPane::new("books", "All Books", rsx! { p { "books pane" } })],
                active_tab: "settings".to_string(),
                on_select: |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("All Books"));
    assert!(!html.contains("books pane"));
}
