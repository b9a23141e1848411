//! shelf-ui - Book collection view components
//!
//! Pure, props-based components. Book and group data always comes from the
//! parent, and every mutation is reported through callbacks.

pub mod components;

pub use components::*;
