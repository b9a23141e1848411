//! Tab container - controlled tabbed layout shell

use dioxus::prelude::*;
use shelf_common::tabs::{active_tab as find_active_tab, tab_buttons, Tabbed};

/// A labeled pane shown by [`TabContainer`]
#[derive(Clone, PartialEq)]
pub struct TabPane {
    pub key: String,
    pub label: String,
    pub content: Element,
}

impl TabPane {
    pub fn new(key: impl Into<String>, label: impl Into<String>, content: Element) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            content,
        }
    }
}

impl Tabbed for TabPane {
    fn tab_key(&self) -> &str {
        &self.key
    }

    fn tab_label(&self) -> &str {
        &self.label
    }
}

/// One button per pane and the pane matching `active_tab`.
///
/// Holds no state: the parent owns `active_tab` and updates it from
/// `on_select`.
#[component]
pub fn TabContainer(
    tabs: Vec<TabPane>,
    active_tab: String,
    on_select: EventHandler<String>,
) -> Element {
    let buttons = tab_buttons(&tabs, &active_tab);
    let content = find_active_tab(&tabs, &active_tab).map(|pane| pane.content.clone());

    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "flex gap-1 bg-gray-800/50 rounded-lg p-1", "data-testid": "tab-buttons",
                for tab in buttons {
                    button {
                        key: "{tab.key}",
                        class: tab_button_class(tab.is_active),
                        onclick: {
                            let key = tab.key.clone();
                            move |_| on_select.call(key.clone())
                        },
                        "{tab.label}"
                    }
                }
            }
            div { "data-testid": "tab-content", {content} }
        }
    }
}

fn tab_button_class(is_active: bool) -> &'static str {
    if is_active {
        "active px-3 py-1.5 text-sm rounded-lg bg-indigo-600 text-white"
    } else {
        "px-3 py-1.5 text-sm rounded-lg text-gray-400 hover:text-white hover:bg-gray-700/50"
    }
}
