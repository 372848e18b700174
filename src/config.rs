//! Page contract: element ids, classes, storage key, icons, guard prompts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server-rendered templates fix these identifiers. `Default` matches the
//! shipped templates; a page can override any field by passing a JSON object
//! to the wasm entry point. Missing fields keep their defaults.

use serde::Deserialize;

use crate::error::{ChromeError, Result};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOGGLE_ID: &str = "dark-mode-toggle";
pub const DEFAULT_THEME_CLASS: &str = "dark-mode";
pub const DEFAULT_STORAGE_KEY: &str = "darkMode";
pub const DEFAULT_TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
pub const SUN_ICON: &str = r#"<i class="bi bi-sun"></i>"#;
pub const MOON_ICON: &str = r#"<i class="bi bi-moon"></i>"#;
pub const APPROVE_SELECTOR: &str = ".approve-form";
pub const APPROVE_MESSAGE: &str = "Are you sure you want to approve this suggestion?";
pub const REJECT_SELECTOR: &str = ".reject-form";
pub const REJECT_MESSAGE: &str = "Are you sure you want to reject this suggestion?";

/// Markup placed inside the toggle button for each theme.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconSet {
    /// Shown while dark mode is on.
    pub sun: String,
    /// Shown while dark mode is off.
    pub moon: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self { sun: SUN_ICON.to_owned(), moon: MOON_ICON.to_owned() }
    }
}

/// One confirmation gate: every form matching `selector` asks `message`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    pub selector: String,
    pub message: String,
}

impl GuardConfig {
    #[must_use]
    pub fn new(selector: &str, message: &str) -> Self {
        Self { selector: selector.to_owned(), message: message.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChromeConfig {
    pub toggle_id: String,
    pub theme_class: String,
    pub storage_key: String,
    pub tooltip_selector: String,
    pub icons: IconSet,
    pub guards: Vec<GuardConfig>,
    /// Stylesheet to link into `<head>` at load. `None` when the template
    /// already links it.
    pub dark_stylesheet: Option<String>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            theme_class: DEFAULT_THEME_CLASS.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            tooltip_selector: DEFAULT_TOOLTIP_SELECTOR.to_owned(),
            icons: IconSet::default(),
            guards: vec![
                GuardConfig::new(APPROVE_SELECTOR, APPROVE_MESSAGE),
                GuardConfig::new(REJECT_SELECTOR, REJECT_MESSAGE),
            ],
            dark_stylesheet: None,
        }
    }
}

impl ChromeConfig {
    /// Parse a JSON override object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed JSON or unknown fields, and
    /// `InvalidConfig` when [`ChromeConfig::validate`] fails.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty identifiers; they would match nothing or everything.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("toggle_id", &self.toggle_id),
            ("theme_class", &self.theme_class),
            ("storage_key", &self.storage_key),
            ("tooltip_selector", &self.tooltip_selector),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ChromeError::InvalidConfig(format!("{field} must not be empty")));
            }
        }
        if self.theme_class.contains(char::is_whitespace) {
            return Err(ChromeError::InvalidConfig("theme_class must be a single class name".to_owned()));
        }
        for (idx, guard) in self.guards.iter().enumerate() {
            if guard.selector.trim().is_empty() {
                return Err(ChromeError::InvalidConfig(format!("guards[{idx}].selector must not be empty")));
            }
            if guard.message.trim().is_empty() {
                return Err(ChromeError::InvalidConfig(format!("guards[{idx}].message must not be empty")));
            }
        }
        if self.dark_stylesheet.as_deref().is_some_and(|href| href.trim().is_empty()) {
            return Err(ChromeError::InvalidConfig("dark_stylesheet must not be empty".to_owned()));
        }
        Ok(())
    }
}
