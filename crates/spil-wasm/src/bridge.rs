//! The `wasm-bindgen` surface: one display controller per page.

use spil_core::dom::Document;
use spil_display::Display;
use wasm_bindgen::prelude::*;

use crate::info::SurfaceInfo;

/// The JS-facing display controller.
///
/// Construct once per page; every display call from JS goes through this
/// struct.
#[wasm_bindgen]
pub struct SpilDisplay {
    display: Display,
}

#[wasm_bindgen]
impl SpilDisplay {
    /// Create the controller and prepare the page: drawing canvas, loader
    /// removal, fullscreen checkbox.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook_setup();

        let display = Display::new(Document::current());
        display.init();
        Self { display }
    }

    /// Re-run page preparation. Safe to call repeatedly.
    pub fn init(&self) {
        self.display.init();
    }

    /// Set the display size in pixels and report the resulting surface as
    /// JSON: `{"width":..,"height":..}`.
    pub fn set_mode(&mut self, width: u32, height: u32) -> String {
        let surface = self.display.set_mode(width, height);
        let (width, height) = surface.borrow().size();
        SurfaceInfo { width, height }.to_json()
    }

    /// Set the page title.
    pub fn set_caption(&self, title: &str) {
        self.display.set_caption(title, None);
    }

    pub fn is_fullscreen(&self) -> bool {
        self.display.is_fullscreen()
    }

    /// Toggle fullscreen. `true` means a request was issued; the
    /// transition itself completes asynchronously.
    pub fn toggle_fullscreen(&self) -> bool {
        self.display.toggle_fullscreen()
    }

    /// Current surface dimensions as JSON: `{"width":..,"height":..}`.
    pub fn surface_info(&mut self) -> String {
        let surface = self.display.surface();
        let (width, height) = surface.borrow().size();
        SurfaceInfo { width, height }.to_json()
    }
}

impl Default for SpilDisplay {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

/// Route panic messages to the browser console.
fn console_error_panic_hook_setup() {
    use std::sync::Once;
    static SET_HOOK: Once = Once::new();
    SET_HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = format!("Spil WASM panic: {info}");
            web_sys::console::error_1(&msg.into());
        }));
    });
}
