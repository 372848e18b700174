//! Boot sequence tying the enhancements to a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PageHost` is the only place elements are looked up. The boot sequence
//! resolves everything once and hands concrete handles to the controllers.
//!
//! Two phases, matching when the page can run them:
//! 1. `attach_guards` at script start.
//! 2. `content_loaded` once the document is parsed: stylesheet, theme toggle,
//!    click handler, tooltips, in that order.
//!
//! ERROR HANDLING
//! ==============
//! The first fault in a phase aborts the rest of that phase. A second
//! `content_loaded` is ignored even if the first one failed, so handlers are
//! never attached twice.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::ChromeConfig;
use crate::dom::{ClassList, DataFlags, EventHooks, Markup};
use crate::error::{ChromeError, Result};
use crate::guard::{Confirmer, FormGuard, attach_guard};
use crate::preference::PreferenceStore;
use crate::theme::{Theme, ThemeToggle};
use crate::tooltip::{TooltipFactory, init_tooltips};

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

/// Element lookup and document-level mutations.
pub trait PageHost {
    type Element: ClassList + Markup + DataFlags + EventHooks + Clone + 'static;

    fn body(&self) -> Option<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns `Dom` for an invalid selector.
    fn select_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    /// Link a stylesheet into `<head>` unless already linked. Returns whether
    /// a link was added.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the document has no head or the link cannot be built.
    fn ensure_stylesheet(&self, href: &str) -> Result<bool>;
}

pub type PageToggle<P, H> = ThemeToggle<P, <H as PageHost>::Element, <H as PageHost>::Element>;

/// Result of a successful content-loaded phase.
pub struct Loaded<P, H: PageHost> {
    pub toggle: Rc<PageToggle<P, H>>,
    pub theme: Theme,
    pub tooltips: usize,
}

pub struct Chrome<H> {
    host: H,
    config: ChromeConfig,
    loaded: Cell<bool>,
}

impl<H: PageHost> Chrome<H> {
    pub fn new(host: H, config: ChromeConfig) -> Self {
        Self { host, config, loaded: Cell::new(false) }
    }

    #[must_use]
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Attach every configured confirmation guard. Returns forms guarded.
    ///
    /// # Errors
    ///
    /// Returns `Dom` for a bad selector or a listener that cannot be added.
    pub fn attach_guards(&self, confirmer: &Rc<dyn Confirmer>) -> Result<usize> {
        let mut total = 0;
        for guard in &self.config.guards {
            let forms = self.host.select_all(&guard.selector)?;
            let attached = attach_guard(&forms, FormGuard::new(guard.message.as_str()), confirmer)?;
            log::debug!("guarded {attached} form(s) matching {}", guard.selector);
            total += attached;
        }
        Ok(total)
    }

    /// Run the content-loaded phase. Returns `None` if it already ran.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` if the toggle button is absent, `MissingBody`
    /// without a body, `TooltipUnavailable` if triggers exist but the widget
    /// library does not, or `Dom`/`Storage` from the page.
    pub fn content_loaded<P, F>(&self, prefs: P, tooltips: &F) -> Result<Option<Loaded<P, H>>>
    where
        P: PreferenceStore + 'static,
        F: TooltipFactory<H::Element> + ?Sized,
    {
        if self.loaded.replace(true) {
            log::debug!("content already loaded; skipping");
            return Ok(None);
        }

        let button = self
            .host
            .element_by_id(&self.config.toggle_id)
            .ok_or_else(|| ChromeError::MissingElement { id: self.config.toggle_id.clone() })?;
        let body = self.host.body().ok_or(ChromeError::MissingBody)?;

        if let Some(href) = &self.config.dark_stylesheet {
            if self.host.ensure_stylesheet(href)? {
                log::debug!("linked stylesheet {href}");
            }
        }

        let toggle = Rc::new(ThemeToggle::new(prefs, body, button.clone(), &self.config));
        let theme = toggle.load()?;

        let handler_toggle = Rc::clone(&toggle);
        button.on_click(Box::new(move || {
            if let Err(err) = handler_toggle.toggle() {
                log::error!("dark mode toggle failed: {err}");
            }
        }))?;

        let triggers = self.host.select_all(&self.config.tooltip_selector)?;
        let tooltips = init_tooltips(&triggers, tooltips)?;

        log::info!("page chrome ready: theme={theme:?} tooltips={tooltips}");
        Ok(Some(Loaded { toggle, theme, tooltips }))
    }
}
