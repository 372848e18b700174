//! Confirmation gates on form submission.
//!
//! A guard asks one fixed question when a matching form is submitted. If the
//! user declines, the submission is cancelled; otherwise it proceeds as
//! normal. Guards never touch persisted state. Approve and reject forms use
//! the same attach path and differ only in selector and message.

use std::rc::Rc;

use crate::dom::{EventHooks, Submission};
use crate::error::Result;

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Blocking yes/no prompt (`window.confirm` in the browser).
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormGuard {
    message: String,
}

impl FormGuard {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Ask the question and map the answer onto the submission.
    pub fn check(&self, confirmer: &dyn Confirmer) -> Submission {
        if confirmer.confirm(&self.message) {
            Submission::Proceed
        } else {
            log::debug!("submission cancelled: {}", self.message);
            Submission::Blocked
        }
    }
}

/// Attach `guard` to every form in `forms`. Returns the number attached.
///
/// # Errors
///
/// Returns `Dom` if a submit listener cannot be registered; forms before the
/// failing one stay guarded.
pub fn attach_guard<E: EventHooks>(forms: &[E], guard: FormGuard, confirmer: &Rc<dyn Confirmer>) -> Result<usize> {
    let guard = Rc::new(guard);
    for form in forms {
        let guard = Rc::clone(&guard);
        let confirmer = Rc::clone(confirmer);
        form.on_submit(Box::new(move || guard.check(confirmer.as_ref())))?;
    }
    Ok(forms.len())
}
