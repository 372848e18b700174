//! In-memory page used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::chrome::PageHost;
use crate::dom::{ClassList, DataFlags, EventHooks, Markup, Submission};
use crate::error::{ChromeError, Result};
use crate::guard::Confirmer;
use crate::preference::KeyValueStore;
use crate::tooltip::TooltipFactory;

type ClickHandler = Box<dyn FnMut()>;
type SubmitHandler = Box<dyn FnMut() -> Submission>;

#[derive(Default)]
struct ElementState {
    id: String,
    selectors: Vec<String>,
    classes: Vec<String>,
    inner_html: String,
    flags: BTreeSet<String>,
}

/// Shared-handle element. Clones refer to the same node.
#[derive(Clone, Default)]
pub struct FakeElement {
    state: Rc<RefCell<ElementState>>,
    clicks: Rc<RefCell<Vec<ClickHandler>>>,
    submits: Rc<RefCell<Vec<SubmitHandler>>>,
}

impl FakeElement {
    pub fn new(id: &str) -> Self {
        let el = Self::default();
        el.state.borrow_mut().id = id.to_owned();
        el
    }

    /// Make this element match `selector` in [`FakePage::select_all`].
    pub fn matching(self, selector: &str) -> Self {
        self.state.borrow_mut().selectors.push(selector.to_owned());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.state.borrow_mut().classes.push(class.to_owned());
        self
    }

    pub fn id(&self) -> String {
        self.state.borrow().id.clone()
    }

    pub fn inner_html(&self) -> String {
        self.state.borrow().inner_html.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    pub fn click_handlers(&self) -> usize {
        self.clicks.borrow().len()
    }

    pub fn submit_handlers(&self) -> usize {
        self.submits.borrow().len()
    }

    /// Dispatch a click to every handler.
    pub fn click(&self) {
        for handler in self.clicks.borrow_mut().iter_mut() {
            handler();
        }
    }

    /// Dispatch a submit; any `Blocked` handler cancels the submission.
    pub fn submit(&self) -> Submission {
        let mut outcome = Submission::Proceed;
        for handler in self.submits.borrow_mut().iter_mut() {
            if handler() == Submission::Blocked {
                outcome = Submission::Blocked;
            }
        }
        outcome
    }

    fn matches(&self, selector: &str) -> bool {
        self.state.borrow().selectors.iter().any(|s| s == selector)
    }
}

impl ClassList for FakeElement {
    fn add_class(&self, class: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.state.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }

    fn toggle_class(&self, class: &str) -> Result<bool> {
        if self.has_class(class) {
            self.remove_class(class)?;
            Ok(false)
        } else {
            self.add_class(class)?;
            Ok(true)
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }
}

impl Markup for FakeElement {
    fn set_inner_html(&self, html: &str) {
        html.clone_into(&mut self.state.borrow_mut().inner_html);
    }
}

impl DataFlags for FakeElement {
    fn has_flag(&self, name: &str) -> bool {
        self.state.borrow().flags.contains(name)
    }

    fn set_flag(&self, name: &str) -> Result<()> {
        self.state.borrow_mut().flags.insert(name.to_owned());
        Ok(())
    }
}

impl EventHooks for FakeElement {
    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<()> {
        self.clicks.borrow_mut().push(handler);
        Ok(())
    }

    fn on_submit(&self, handler: Box<dyn FnMut() -> Submission>) -> Result<()> {
        self.submits.borrow_mut().push(handler);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakePage {
    pub body: Option<FakeElement>,
    pub elements: Vec<FakeElement>,
    pub stylesheets: RefCell<Vec<String>>,
}

impl FakePage {
    /// A page with a body and the toggle button, nothing else.
    pub fn with_toggle(toggle_id: &str) -> Self {
        Self {
            body: Some(FakeElement::new("body")),
            elements: vec![FakeElement::new(toggle_id)],
            stylesheets: RefCell::default(),
        }
    }

    pub fn add(&mut self, element: FakeElement) -> FakeElement {
        self.elements.push(element.clone());
        element
    }

    pub fn body_el(&self) -> FakeElement {
        self.body.clone().unwrap_or_default()
    }
}

impl PageHost for FakePage {
    type Element = FakeElement;

    fn body(&self) -> Option<FakeElement> {
        self.body.clone()
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements.iter().find(|el| el.id() == id).cloned()
    }

    fn select_all(&self, selector: &str) -> Result<Vec<FakeElement>> {
        if selector.is_empty() {
            return Err(ChromeError::Dom("empty selector".to_owned()));
        }
        Ok(self.elements.iter().filter(|el| el.matches(selector)).cloned().collect())
    }

    fn ensure_stylesheet(&self, href: &str) -> Result<bool> {
        let mut sheets = self.stylesheets.borrow_mut();
        if sheets.iter().any(|s| s == href) {
            return Ok(false);
        }
        sheets.push(href.to_owned());
        Ok(true)
    }
}

/// Confirmer with a scripted answer that records every prompt.
#[derive(Default)]
pub struct FakeConfirmer {
    pub answer: Cell<bool>,
    pub prompts: RefCell<Vec<String>>,
}

impl FakeConfirmer {
    pub fn answering(answer: bool) -> Rc<Self> {
        Rc::new(Self { answer: Cell::new(answer), prompts: RefCell::default() })
    }
}

impl Confirmer for FakeConfirmer {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_owned());
        self.answer.get()
    }
}

/// Tooltip factory recording the ids it was called with.
#[derive(Default)]
pub struct FakeTooltips {
    pub unavailable: bool,
    pub created: RefCell<Vec<String>>,
}

impl TooltipFactory<FakeElement> for FakeTooltips {
    fn create(&self, trigger: &FakeElement) -> Result<()> {
        if self.unavailable {
            return Err(ChromeError::TooltipUnavailable);
        }
        self.created.borrow_mut().push(trigger.id());
        Ok(())
    }
}

/// Store whose writes always fail, like a full `localStorage`.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub value: Option<String>,
}

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, _key: &str) -> Option<String> {
        self.value.clone()
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(ChromeError::Storage("quota exceeded".to_owned()))
    }
}
