//! Browser backend: thin wrappers over `web-sys` DOM handles.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, HtmlInputElement};

// ─── Document ────────────────────────────────────────────────────────────

/// Handle to the page's document.
#[derive(Clone, Debug)]
pub struct Document {
    inner: web_sys::Document,
}

impl Document {
    /// The document of the current browsing context.
    ///
    /// Panics when called outside a window environment (for example a
    /// worker), which is a programming error on the embedder's side.
    pub fn current() -> Self {
        let window = web_sys::window().expect("no window in this environment");
        let inner = window.document().expect("window has no document");
        Self { inner }
    }

    /// Look up a `<canvas>` by id. Elements with the right id but a
    /// different tag are ignored.
    pub fn canvas_by_id(&self, id: &str) -> Option<Canvas> {
        let element = self.inner.get_element_by_id(id)?;
        element
            .dyn_into::<HtmlCanvasElement>()
            .ok()
            .map(|inner| Canvas { inner })
    }

    /// Create a `<canvas>` with the given id and append it to `<body>`.
    pub fn create_canvas(&self, id: &str) -> Canvas {
        let element = self
            .inner
            .create_element("canvas")
            .expect("creating a canvas element failed");
        let canvas: HtmlCanvasElement = element
            .dyn_into()
            .expect("created element is not a canvas");
        canvas.set_id(id);
        let body = self.inner.body().expect("document has no body");
        body.append_child(&canvas)
            .expect("appending the canvas to <body> failed");
        Canvas { inner: canvas }
    }

    /// Look up an `<input>` by id.
    pub fn checkbox_by_id(&self, id: &str) -> Option<Checkbox> {
        let element = self.inner.get_element_by_id(id)?;
        element
            .dyn_into::<HtmlInputElement>()
            .ok()
            .map(|inner| Checkbox { inner })
    }

    /// Remove the element with the given id from the document. Returns
    /// whether anything was removed.
    pub fn remove_element_by_id(&self, id: &str) -> bool {
        match self.inner.get_element_by_id(id) {
            Some(element) => {
                element.remove();
                true
            }
            None => false,
        }
    }

    pub fn title(&self) -> String {
        self.inner.title()
    }

    pub fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }

    /// Whether this host can present elements in fullscreen at all.
    pub fn fullscreen_enabled(&self) -> bool {
        self.inner.fullscreen_enabled()
    }

    /// Whether some element is currently presented in fullscreen.
    pub fn fullscreen_active(&self) -> bool {
        self.inner.fullscreen_element().is_some()
    }

    /// Ask the host to leave fullscreen. The transition is asynchronous.
    pub fn exit_fullscreen(&self) {
        self.inner.exit_fullscreen();
    }
}

// ─── Canvas ──────────────────────────────────────────────────────────────

/// Handle to a `<canvas>` element. Clones refer to the same element and
/// compare equal.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    inner: HtmlCanvasElement,
}

impl Canvas {
    pub fn id(&self) -> String {
        self.inner.id()
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Set the width attribute. The host clears the element's pixel
    /// buffer on every such resize.
    pub fn set_width(&self, width: u32) {
        self.inner.set_width(width);
    }

    pub fn set_height(&self, height: u32) {
        self.inner.set_height(height);
    }

    /// The element's 2D rendering context.
    ///
    /// Panics when the host hands out no 2D context, for example because
    /// the element is already bound to a different context kind.
    pub fn context_2d(&self) -> Context2d {
        let context = self
            .inner
            .get_context("2d")
            .expect("querying the 2d context failed")
            .expect("canvas has no 2d context")
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .expect("2d context has an unexpected type");
        Context2d { inner: context }
    }

    /// Ask the host to present this element in fullscreen. Returns whether
    /// the request was issued; the transition itself is asynchronous.
    pub fn request_fullscreen(&self) -> bool {
        self.inner.request_fullscreen().is_ok()
    }
}

// ─── 2D context ──────────────────────────────────────────────────────────

/// Handle to a canvas 2D rendering context.
#[derive(Clone, Debug, PartialEq)]
pub struct Context2d {
    inner: web_sys::CanvasRenderingContext2d,
}

impl Context2d {
    pub fn image_smoothing_enabled(&self) -> bool {
        self.inner.image_smoothing_enabled()
    }

    pub fn set_image_smoothing_enabled(&self, enabled: bool) {
        self.inner.set_image_smoothing_enabled(enabled);
    }
}

// ─── Checkbox ────────────────────────────────────────────────────────────

/// Handle to an `<input type="checkbox">` element.
#[derive(Clone, Debug, PartialEq)]
pub struct Checkbox {
    inner: HtmlInputElement,
}

impl Checkbox {
    pub fn checked(&self) -> bool {
        self.inner.checked()
    }

    pub fn set_checked(&self, checked: bool) {
        self.inner.set_checked(checked);
    }

    /// Register a listener for the element's `change` event.
    ///
    /// The listener is handed over to the JS side and lives for the
    /// lifetime of the page; there is no way to detach it.
    pub fn on_change(&self, mut listener: impl FnMut(&ChangeEvent) + 'static) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            listener(&ChangeEvent { inner: event });
        });
        let function: &js_sys::Function = closure.as_ref().unchecked_ref();
        self.inner
            .add_event_listener_with_callback("change", function)
            .expect("attaching the change listener failed");
        closure.forget();
    }
}

// ─── Change event ────────────────────────────────────────────────────────

/// A `change` event delivered to a [`Checkbox`] listener.
#[derive(Debug)]
pub struct ChangeEvent {
    inner: web_sys::Event,
}

impl ChangeEvent {
    pub fn prevent_default(&self) {
        self.inner.prevent_default();
    }

    pub fn default_prevented(&self) -> bool {
        self.inner.default_prevented()
    }
}
