//! Tab lookup for controlled tab containers

/// Something that can be shown as a tab
pub trait Tabbed {
    fn tab_key(&self) -> &str;
    fn tab_label(&self) -> &str;
}

/// Button shown in a tab strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub key: String,
    pub label: String,
    pub is_active: bool,
}

/// One button per tab, in order, flagging the one matching `active`
pub fn tab_buttons<T: Tabbed>(tabs: &[T], active: &str) -> Vec<TabButton> {
    tabs.iter()
        .map(|tab| TabButton {
            key: tab.tab_key().to_string(),
            label: tab.tab_label().to_string(),
            is_active: tab.tab_key() == active,
        })
        .collect()
}

/// The tab whose key matches `active`, if any
pub fn active_tab<'a, T: Tabbed>(tabs: &'a [T], active: &str) -> Option<&'a T> {
    tabs.iter().find(|tab| tab.tab_key() == active)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pane(&'static str, &'static str);

    impl Tabbed for Pane {
        fn tab_key(&self) -> &str {
            self.0
        }
        fn tab_label(&self) -> &str {
            self.1
        }
    }

    fn panes() -> Vec<Pane> {
        vec![Pane("books", "All Books"), Pane("groups", "Groups")]
    }

    #[test]
    fn test_active_tab_matches_key() {
        let panes = panes();
        assert_eq!(active_tab(&panes, "groups").map(|p| p.1), Some("Groups"));
    }

    #[test]
    fn test_no_tab_when_key_unknown() {
        let panes = panes();
        assert!(active_tab(&panes, "settings").is_none());
    }

    #[test]
    fn test_buttons_flag_only_active() {
        let buttons = tab_buttons(&panes(), "books");
        assert_eq!(buttons.len(), 2);
        assert!(buttons[0].is_active);
        assert!(!buttons[1].is_active);
        assert_eq!(buttons[1].label, "Groups");
    }
}
