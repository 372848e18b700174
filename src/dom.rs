//! Element capabilities the enhancements need from the page.
//!
//! DESIGN
//! ======
//! Controllers never look elements up themselves. They receive handles that
//! implement these traits, so the same logic runs against DOM elements
//! in the browser and against an in-memory page in tests.

use crate::error::Result;

/// Outcome of a guarded form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    /// Let the browser submit the form.
    #[default]
    Proceed,
    /// Cancel the default submission.
    Blocked,
}

/// Class membership on an element (`element.classList`).
pub trait ClassList {
    /// # Errors
    ///
    /// Returns `Dom` if the class token is rejected.
    fn add_class(&self, class: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns `Dom` if the class token is rejected.
    fn remove_class(&self, class: &str) -> Result<()>;

    /// Flip membership and return whether the class is now present.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the class token is rejected.
    fn toggle_class(&self, class: &str) -> Result<bool>;

    fn has_class(&self, class: &str) -> bool;
}

/// Replaceable inner markup (`element.innerHTML`).
pub trait Markup {
    fn set_inner_html(&self, html: &str);
}

/// Boolean `data-*` flags used to mark one-time initialization.
pub trait DataFlags {
    fn has_flag(&self, name: &str) -> bool;

    /// # Errors
    ///
    /// Returns `Dom` if the attribute cannot be written.
    fn set_flag(&self, name: &str) -> Result<()>;
}

/// Event subscription. Handlers stay attached for the page lifetime.
pub trait EventHooks {
    /// # Errors
    ///
    /// Returns `Dom` if the listener cannot be registered.
    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<()>;

    /// Run `handler` on submit; a `Blocked` result cancels the submission.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the listener cannot be registered.
    fn on_submit(&self, handler: Box<dyn FnMut() -> Submission>) -> Result<()>;
}
