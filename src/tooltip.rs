//! One-time tooltip widget initialization.
//!
//! Every trigger element found at load gets exactly one widget with default
//! options. Initialized elements are flagged so a repeated pass skips them.
//! Elements added to the page later are not picked up.

use crate::dom::DataFlags;
use crate::error::Result;

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

/// `data-*` flag marking an element whose widget already exists.
pub const TOOLTIP_FLAG: &str = "chrome-tooltip";

/// Constructs a tooltip widget on a trigger (`new bootstrap.Tooltip(el)`).
pub trait TooltipFactory<E> {
    /// # Errors
    ///
    /// Returns `TooltipUnavailable` if the widget library is missing, or
    /// `Dom` if construction throws.
    fn create(&self, trigger: &E) -> Result<()>;
}

/// Initialize widgets on `triggers`, returning how many were created.
///
/// # Errors
///
/// Stops at the first failing trigger. Earlier triggers keep their widgets.
pub fn init_tooltips<E, F>(triggers: &[E], factory: &F) -> Result<usize>
where
    E: DataFlags,
    F: TooltipFactory<E> + ?Sized,
{
    let mut created = 0;
    for trigger in triggers {
        if trigger.has_flag(TOOLTIP_FLAG) {
            continue;
        }
        factory.create(trigger)?;
        trigger.set_flag(TOOLTIP_FLAG)?;
        created += 1;
    }
    if created > 0 {
        log::debug!("initialized {created} tooltip(s)");
    }
    Ok(created)
}
