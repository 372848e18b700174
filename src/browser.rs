//! Browser bindings and the wasm entry points.
//!
//! This module is the only place that touches `web_sys`. It implements the
//! page traits for `web_sys::Element`, wraps `localStorage`, `window.confirm`
//! and the global `bootstrap.Tooltip` constructor, and schedules the boot
//! phases against `DOMContentLoaded`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, Storage, Window};

use crate::chrome::{Chrome, PageHost};
use crate::config::ChromeConfig;
use crate::dom::{ClassList, DataFlags, EventHooks, Markup, Submission};
use crate::error::{ChromeError, Result, describe_js};
use crate::guard::Confirmer;
use crate::preference::{KeyValueStore, StoredPreference};
use crate::tooltip::TooltipFactory;

// =============================================================================
// ELEMENTS
// =============================================================================

impl ClassList for Element {
    fn add_class(&self, class: &str) -> Result<()> {
        Ok(self.class_list().add_1(class)?)
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        Ok(self.class_list().remove_1(class)?)
    }

    fn toggle_class(&self, class: &str) -> Result<bool> {
        Ok(self.class_list().toggle(class)?)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl Markup for Element {
    fn set_inner_html(&self, html: &str) {
        Element::set_inner_html(self, html);
    }
}

impl DataFlags for Element {
    fn has_flag(&self, name: &str) -> bool {
        self.has_attribute(&format!("data-{name}"))
    }

    fn set_flag(&self, name: &str) -> Result<()> {
        Ok(self.set_attribute(&format!("data-{name}"), "true")?)
    }
}

impl EventHooks for Element {
    fn on_click(&self, mut handler: Box<dyn FnMut()>) -> Result<()> {
        let cb = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
        self.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    }

    fn on_submit(&self, mut handler: Box<dyn FnMut() -> Submission>) -> Result<()> {
        let cb = Closure::wrap(Box::new(move |event: Event| {
            if handler() == Submission::Blocked {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>);
        self.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    }
}

// =============================================================================
// PAGE
// =============================================================================

pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PageHost for BrowserPage {
    type Element = Element;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn select_all(&self, selector: &str) -> Result<Vec<Element>> {
        let nodes = self.document.query_selector_all(selector)?;
        let mut out = Vec::with_capacity(nodes.length() as usize);
        for idx in 0..nodes.length() {
            let Some(node) = nodes.item(idx) else {
                continue;
            };
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
        Ok(out)
    }

    fn ensure_stylesheet(&self, href: &str) -> Result<bool> {
        let existing = format!(r#"link[rel="stylesheet"][href="{href}"]"#);
        if self.document.query_selector(&existing)?.is_some() {
            return Ok(false);
        }
        let head = self
            .document
            .head()
            .ok_or_else(|| ChromeError::Dom("document has no <head>".to_owned()))?;
        let link = self.document.create_element("link")?;
        link.set_attribute("rel", "stylesheet")?;
        link.set_attribute("href", href)?;
        head.append_child(&link)?;
        Ok(true)
    }
}

// =============================================================================
// COLLABORATORS
// =============================================================================

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {}", describe_js(&err));
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| ChromeError::Storage(describe_js(&err)))
    }
}

/// `window.confirm`. A prompt that throws counts as declined.
pub struct WindowConfirm {
    window: Window,
}

impl Confirmer for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        match self.window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("confirm prompt failed: {}", describe_js(&err));
                false
            }
        }
    }
}

/// `new bootstrap.Tooltip(el)`, resolved from the global scope on each call.
pub struct BootstrapTooltips;

impl BootstrapTooltips {
    fn constructor() -> Result<js_sys::Function> {
        let bootstrap = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))?;
        if bootstrap.is_undefined() || bootstrap.is_null() {
            return Err(ChromeError::TooltipUnavailable);
        }
        js_sys::Reflect::get(&bootstrap, &JsValue::from_str("Tooltip"))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| ChromeError::TooltipUnavailable)
    }
}

impl TooltipFactory<Element> for BootstrapTooltips {
    fn create(&self, trigger: &Element) -> Result<()> {
        let ctor = Self::constructor()?;
        js_sys::Reflect::construct(&ctor, &js_sys::Array::of1(trigger))?;
        Ok(())
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Boot with the default page contract.
///
/// # Errors
///
/// Throws if the browser globals are missing or a guard cannot be attached.
#[wasm_bindgen]
pub fn start() -> std::result::Result<(), JsValue> {
    init_logging();
    boot(ChromeConfig::default()).map_err(report)
}

/// Boot with a JSON object overriding parts of the page contract.
///
/// # Errors
///
/// Throws on invalid JSON/config, or as [`start`].
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config: &str) -> std::result::Result<(), JsValue> {
    init_logging();
    ChromeConfig::from_json(config).and_then(boot).map_err(report)
}

fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

fn report(err: ChromeError) -> JsValue {
    log::error!("page chrome init failed: {err}");
    err.into()
}

fn boot(config: ChromeConfig) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| ChromeError::Dom("no window".to_owned()))?;
    let document = window.document().ok_or_else(|| ChromeError::Dom("no document".to_owned()))?;
    let storage = window
        .local_storage()?
        .ok_or_else(|| ChromeError::Storage("localStorage unavailable".to_owned()))?;

    let prefs = StoredPreference::new(BrowserStorage::new(storage), config.storage_key.clone());
    let chrome = Rc::new(Chrome::new(BrowserPage::new(document.clone()), config));

    let confirmer: Rc<dyn Confirmer> = Rc::new(WindowConfirm { window });
    chrome.attach_guards(&confirmer)?;

    if document.ready_state() != "loading" {
        chrome.content_loaded(prefs, &BootstrapTooltips)?;
        return Ok(());
    }

    let mut pending = Some(prefs);
    let cb = Closure::wrap(Box::new(move |_event: Event| {
        let Some(prefs) = pending.take() else {
            return;
        };
        if let Err(err) = chrome.content_loaded(prefs, &BootstrapTooltips) {
            log::error!("page chrome init failed: {err}");
        }
    }) as Box<dyn FnMut(Event)>);

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}
