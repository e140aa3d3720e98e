//! In-memory backend: a minimal stand-in document for native targets.
//!
//! Carries just enough of a document to exercise the display layer:
//! elements with ids in a flat body, a page title, change listeners on
//! checkboxes, and a simulated fullscreen capability that stays off unless
//! a test switches it on.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

// ─── Document ────────────────────────────────────────────────────────────

/// Handle to an in-memory document. Clones refer to the same document.
#[derive(Clone, Debug)]
pub struct Document {
    inner: Rc<DocumentInner>,
}

#[derive(Debug, Default)]
struct DocumentInner {
    title: RefCell<String>,
    body: RefCell<Vec<Node>>,
    fullscreen_enabled: Cell<bool>,
    fullscreen_element: RefCell<Option<String>>,
}

#[derive(Debug)]
enum Node {
    Canvas(Canvas),
    Checkbox(Checkbox),
    Plain(String),
}

impl Node {
    fn id(&self) -> &str {
        match self {
            Node::Canvas(canvas) => &canvas.inner.id,
            Node::Checkbox(checkbox) => &checkbox.inner.id,
            Node::Plain(id) => id,
        }
    }
}

impl Document {
    /// Fresh document with an empty body, an empty title and no fullscreen
    /// capability.
    pub fn new() -> Self {
        Self {
            inner: Rc::default(),
        }
    }

    /// Look up a canvas by id. Elements with the right id but a different
    /// kind are ignored.
    pub fn canvas_by_id(&self, id: &str) -> Option<Canvas> {
        self.inner.body.borrow().iter().find_map(|node| match node {
            Node::Canvas(canvas) if canvas.inner.id == id => Some(canvas.clone()),
            _ => None,
        })
    }

    /// Create a canvas with the given id and append it to the body. Fresh
    /// canvases start at 300x150, the size a real canvas element gets.
    pub fn create_canvas(&self, id: &str) -> Canvas {
        let canvas = Canvas {
            inner: Rc::new(CanvasInner {
                id: id.to_string(),
                width: Cell::new(300),
                height: Cell::new(150),
                context: Context2d::new(),
                document: Rc::downgrade(&self.inner),
            }),
        };
        self.inner
            .body
            .borrow_mut()
            .push(Node::Canvas(canvas.clone()));
        canvas
    }

    /// Look up a checkbox by id.
    pub fn checkbox_by_id(&self, id: &str) -> Option<Checkbox> {
        self.inner.body.borrow().iter().find_map(|node| match node {
            Node::Checkbox(checkbox) if checkbox.inner.id == id => Some(checkbox.clone()),
            _ => None,
        })
    }

    /// Remove the first element with the given id from the body. Returns
    /// whether anything was removed.
    pub fn remove_element_by_id(&self, id: &str) -> bool {
        let mut body = self.inner.body.borrow_mut();
        match body.iter().position(|node| node.id() == id) {
            Some(index) => {
                body.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn title(&self) -> String {
        self.inner.title.borrow().clone()
    }

    pub fn set_title(&self, title: &str) {
        *self.inner.title.borrow_mut() = title.to_string();
    }

    /// Whether this host can present elements in fullscreen at all.
    pub fn fullscreen_enabled(&self) -> bool {
        self.inner.fullscreen_enabled.get()
    }

    /// Whether some element is currently presented in fullscreen.
    pub fn fullscreen_active(&self) -> bool {
        self.inner.fullscreen_element.borrow().is_some()
    }

    pub fn exit_fullscreen(&self) {
        self.inner.fullscreen_element.borrow_mut().take();
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Seeding and inspection ──────────────────────────────────────────────
//
// Hooks for setting up page states a browser would bring along on its own.

impl Document {
    /// Switch the simulated fullscreen capability on or off.
    pub fn set_fullscreen_enabled(&self, enabled: bool) {
        self.inner.fullscreen_enabled.set(enabled);
    }

    /// Append a bare element carrying only an id, such as a loading
    /// indicator.
    pub fn insert_element(&self, id: &str) {
        self.inner
            .body
            .borrow_mut()
            .push(Node::Plain(id.to_string()));
    }

    /// Append a checkbox with the given id, initially unchecked.
    pub fn insert_checkbox(&self, id: &str) -> Checkbox {
        let checkbox = Checkbox {
            inner: Rc::new(CheckboxInner {
                id: id.to_string(),
                checked: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
            }),
        };
        self.inner
            .body
            .borrow_mut()
            .push(Node::Checkbox(checkbox.clone()));
        checkbox
    }

    /// Ids of all body elements, in document order.
    pub fn body_ids(&self) -> Vec<String> {
        self.inner
            .body
            .borrow()
            .iter()
            .map(|node| node.id().to_string())
            .collect()
    }
}

// ─── Canvas ──────────────────────────────────────────────────────────────

/// Handle to an in-memory canvas. Clones refer to the same element and
/// compare equal.
#[derive(Clone, Debug)]
pub struct Canvas {
    inner: Rc<CanvasInner>,
}

#[derive(Debug)]
struct CanvasInner {
    id: String,
    width: Cell<u32>,
    height: Cell<u32>,
    context: Context2d,
    document: Weak<DocumentInner>,
}

impl Canvas {
    pub fn id(&self) -> String {
        self.inner.id.clone()
    }

    pub fn width(&self) -> u32 {
        self.inner.width.get()
    }

    pub fn height(&self) -> u32 {
        self.inner.height.get()
    }

    pub fn set_width(&self, width: u32) {
        self.inner.width.set(width);
    }

    pub fn set_height(&self, height: u32) {
        self.inner.height.set(height);
    }

    /// The element's 2D rendering context. Every call hands out the same
    /// context.
    pub fn context_2d(&self) -> Context2d {
        self.inner.context.clone()
    }

    /// Ask the document to present this element in fullscreen. Refused
    /// when the capability is off.
    pub fn request_fullscreen(&self) -> bool {
        let Some(document) = self.inner.document.upgrade() else {
            return false;
        };
        if !document.fullscreen_enabled.get() {
            return false;
        }
        *document.fullscreen_element.borrow_mut() = Some(self.inner.id.clone());
        true
    }
}

impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

// ─── 2D context ──────────────────────────────────────────────────────────

/// Handle to a canvas 2D rendering context.
#[derive(Clone, Debug)]
pub struct Context2d {
    inner: Rc<ContextInner>,
}

#[derive(Debug)]
struct ContextInner {
    image_smoothing: Cell<bool>,
}

impl Context2d {
    /// Fresh context with smoothing on, the context default.
    fn new() -> Self {
        Self {
            inner: Rc::new(ContextInner {
                image_smoothing: Cell::new(true),
            }),
        }
    }

    pub fn image_smoothing_enabled(&self) -> bool {
        self.inner.image_smoothing.get()
    }

    pub fn set_image_smoothing_enabled(&self, enabled: bool) {
        self.inner.image_smoothing.set(enabled);
    }
}

impl PartialEq for Context2d {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

// ─── Checkbox ────────────────────────────────────────────────────────────

/// Handle to an in-memory checkbox.
#[derive(Clone)]
pub struct Checkbox {
    inner: Rc<CheckboxInner>,
}

struct CheckboxInner {
    id: String,
    checked: Cell<bool>,
    listeners: RefCell<Vec<Box<dyn FnMut(&ChangeEvent)>>>,
}

impl Checkbox {
    pub fn checked(&self) -> bool {
        self.inner.checked.get()
    }

    pub fn set_checked(&self, checked: bool) {
        self.inner.checked.set(checked);
    }

    /// Register a listener for change events fired through
    /// [`Checkbox::emit_change`].
    pub fn on_change(&self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.inner.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Fire a change event to every registered listener, in registration
    /// order. Returns whether some listener suppressed the default action.
    ///
    /// Listeners run outside the registry borrow, so they may register
    /// further listeners or flip the checkbox themselves.
    pub fn emit_change(&self) -> bool {
        let event = ChangeEvent {
            default_prevented: Cell::new(false),
        };
        let mut dispatched = self.inner.listeners.take();
        for listener in dispatched.iter_mut() {
            listener(&event);
        }
        let mut added = self.inner.listeners.take();
        dispatched.append(&mut added);
        self.inner.listeners.replace(dispatched);
        event.default_prevented.get()
    }
}

impl PartialEq for Checkbox {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("id", &self.inner.id)
            .field("checked", &self.inner.checked.get())
            .finish_non_exhaustive()
    }
}

// ─── Change event ────────────────────────────────────────────────────────

/// A change event delivered to a [`Checkbox`] listener.
#[derive(Debug)]
pub struct ChangeEvent {
    default_prevented: Cell<bool>,
}

impl ChangeEvent {
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_canvas_has_the_element_default_size() {
        let document = Document::new();
        let canvas = document.create_canvas("screen");
        assert_eq!((canvas.width(), canvas.height()), (300, 150));
    }

    #[test]
    fn lookup_matches_element_kind_as_well_as_id() {
        let document = Document::new();
        document.insert_element("plain");
        assert!(document.canvas_by_id("plain").is_none());
        assert!(document.checkbox_by_id("plain").is_none());

        let canvas = document.create_canvas("screen");
        assert_eq!(document.canvas_by_id("screen"), Some(canvas));
    }

    #[test]
    fn remove_element_reports_what_it_did() {
        let document = Document::new();
        document.insert_element("loader");
        assert!(document.remove_element_by_id("loader"));
        assert!(!document.remove_element_by_id("loader"));
        assert!(document.body_ids().is_empty());
    }

    #[test]
    fn fullscreen_needs_the_capability() {
        let document = Document::new();
        let canvas = document.create_canvas("screen");
        assert!(!canvas.request_fullscreen());
        assert!(!document.fullscreen_active());

        document.set_fullscreen_enabled(true);
        assert!(canvas.request_fullscreen());
        assert!(document.fullscreen_active());

        document.exit_fullscreen();
        assert!(!document.fullscreen_active());
    }

    #[test]
    fn change_events_reach_listeners_in_order() {
        let document = Document::new();
        let checkbox = document.insert_checkbox("toggle");
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        checkbox.on_change(move |_| log.borrow_mut().push("first"));
        let log = Rc::clone(&seen);
        checkbox.on_change(move |event| {
            log.borrow_mut().push("second");
            event.prevent_default();
        });

        assert!(checkbox.emit_change());
        assert_eq!(*seen.borrow(), ["first", "second"]);
    }

    #[test]
    fn listeners_survive_repeated_emits() {
        let document = Document::new();
        let checkbox = document.insert_checkbox("toggle");
        let count = Rc::new(Cell::new(0));

        let hits = Rc::clone(&count);
        checkbox.on_change(move |_| hits.set(hits.get() + 1));

        checkbox.emit_change();
        checkbox.emit_change();
        assert_eq!(count.get(), 2);
    }
}
