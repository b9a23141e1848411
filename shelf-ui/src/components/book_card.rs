//! Book card component - pure view with callbacks

use dioxus::prelude::*;
use shelf_common::{Book, BookId, RatingChange, StarRating};

/// Individual book card with an interactive 1-5 star rating
///
/// The displayed rating updates as soon as a star is clicked, before the
/// parent has applied the change.
#[component]
pub fn BookCard(
    book: Book,
    // Called with (isbn, rating) when a star is clicked
    on_rating_change: EventHandler<RatingChange>,
    // Called with the book id when Delete is clicked
    on_delete: EventHandler<BookId>,
) -> Element {
    let initial = StarRating::new(&book);
    let mut rating = use_signal(move || initial);
    let stars = rating.read().stars();

    let book_id = book.id;
    let cover_url = book.cover_url().to_string();

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden shadow-lg p-4 flex flex-col gap-2",
            "data-testid": "book-card",
            h3 {
                class: "font-bold text-white text-lg truncate",
                title: "{book.title}",
                "{book.title}"
            }
            p { class: "text-gray-400 text-sm truncate", "Author: {book.author}" }
            img {
                class: "w-full aspect-[2/3] object-cover bg-gray-700",
                src: "{cover_url}",
                alt: "{book.title}",
            }
            div { class: "flex gap-1 text-xl", "data-testid": "star-rating",
                for (star, filled) in stars {
                    span {
                        key: "{star}",
                        class: star_class(filled),
                        onclick: move |_| {
                            let change = rating.write().click(star);
                            if let Some(change) = change {
                                on_rating_change.call(change);
                            }
                        },
                        "★"
                    }
                }
            }
            button {
                class: "self-start px-3 py-1.5 text-sm rounded-lg bg-red-600 hover:bg-red-500 text-white",
                onclick: move |_| on_delete.call(book_id),
                "Delete"
            }
        }
    }
}

fn star_class(filled: bool) -> &'static str {
    if filled {
        "star filled text-yellow-400 cursor-pointer"
    } else {
        "star text-gray-600 cursor-pointer"
    }
}
