//! Blocking user prompts as an injectable capability

/// Confirmation and alert prompts.
///
/// The browser's native `confirm`/`alert` are one implementation; tests
/// supply scripted answers.
pub trait Prompter {
    /// Ask a yes/no question. Returns `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user must acknowledge.
    fn alert(&self, message: &str);
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

impl<P: Prompter + ?Sized> Prompter for std::rc::Rc<P> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}
