//! shelf demo - Web app for the book collection views
//!
//! Renders the shared components over an in-memory collection seeded from
//! fixture data.

mod config;
mod demo_data;
mod pages;
mod prompt;
mod storage;

use dioxus::prelude::*;
use pages::Shelf;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Shelf {} }
    }
}

fn main() {
    dioxus::launch(App);
}
