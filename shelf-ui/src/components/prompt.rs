//! Prompter handle usable as a component prop

use shelf_common::Prompter;
use std::rc::Rc;

/// Shared confirmation/alert capability passed down to views
#[derive(Clone)]
pub struct PromptHandle(pub Rc<dyn Prompter>);

impl PromptHandle {
    pub fn new(prompter: impl Prompter + 'static) -> Self {
        Self(Rc::new(prompter))
    }
}

impl PartialEq for PromptHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Prompter for PromptHandle {
    fn confirm(&self, message: &str) -> bool {
        self.0.confirm(message)
    }

    fn alert(&self, message: &str) {
        self.0.alert(message)
    }
}
