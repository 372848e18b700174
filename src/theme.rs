//! Dark mode toggle controller.
//!
//! Two states, `Light` and `Dark`. The initial state comes from the stored
//! preference; afterwards only button clicks change it. The body class is the
//! source of truth: a click toggles the class and then reads membership back,
//! so the stored value and icon can never drift from what is rendered.

use crate::config::{ChromeConfig, IconSet};
use crate::dom::{ClassList, Markup};
use crate::error::Result;
use crate::preference::PreferenceStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Owns the body, the toggle button, and the preference store.
pub struct ThemeToggle<P, B, I> {
    prefs: P,
    body: B,
    button: I,
    class: String,
    icons: IconSet,
}

impl<P, B, I> ThemeToggle<P, B, I>
where
    P: PreferenceStore,
    B: ClassList,
    I: Markup,
{
    pub fn new(prefs: P, body: B, button: I, config: &ChromeConfig) -> Self {
        Self {
            prefs,
            body,
            button,
            class: config.theme_class.clone(),
            icons: config.icons.clone(),
        }
    }

    /// Apply the stored preference to body and button.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the body class cannot be changed.
    pub fn load(&self) -> Result<Theme> {
        let theme = Theme::from_enabled(self.prefs.read());
        match theme {
            Theme::Dark => self.body.add_class(&self.class)?,
            Theme::Light => self.body.remove_class(&self.class)?,
        }
        self.button.set_inner_html(self.icon(theme));
        log::debug!("theme loaded: {theme:?}");
        Ok(theme)
    }

    /// Click handler body: flip the class, sync the icon, persist.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the class cannot be toggled, or `Storage` if the new
    /// state cannot be persisted. The page has already switched theme in the
    /// latter case.
    pub fn toggle(&self) -> Result<Theme> {
        self.body.toggle_class(&self.class)?;
        let theme = self.current();
        self.button.set_inner_html(self.icon(theme));
        self.prefs.write(theme.is_dark())?;
        log::debug!("theme toggled to {theme:?}");
        Ok(theme)
    }

    /// State as rendered on the body right now.
    #[must_use]
    pub fn current(&self) -> Theme {
        Theme::from_enabled(self.body.has_class(&self.class))
    }

    #[must_use]
    pub fn icon(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.icons.sun,
            Theme::Light => &self.icons.moon,
        }
    }

    #[must_use]
    pub fn prefs(&self) -> &P {
        &self.prefs
    }
}
