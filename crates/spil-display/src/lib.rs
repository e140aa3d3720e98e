//! Create, access and manipulate the display surface.
//!
//! The display layer owns the drawing canvas in the host document:
//! [`Display::init`] creates or adopts it and wires up the page chrome,
//! [`Display::set_mode`] sizes it, and [`Display::surface`] hands out the
//! shared [`Surface`] bound to it. Applications draw onto that surface to
//! reach the screen.
//!
//! ## Fullscreen
//!
//! When the page provides a checkbox with the id `spil-fullscreen-toggle`,
//! `init` registers a change listener on it and fullscreen follows the
//! checkbox. Hosts only grant fullscreen on a user gesture, which the
//! checkbox provides; the host may still deny the request.
//! [`Display::toggle_fullscreen`] reports that a request was issued, not
//! that the transition completed.

pub mod config;
pub mod fullscreen;

use std::rc::Rc;

use spil_core::dom::Document;
use spil_core::surface::{Surface, SurfaceHandle};

pub use config::DisplayConfig;

const NO_CANVAS: &str = "no display canvas in the document; call Display::init first";

/// Access point for the drawing canvas and its surface.
///
/// Holds the host document handle and the lazily-created surface. The
/// surface is built exactly once; every later request returns the same
/// shared handle.
pub struct Display {
    document: Document,
    config: DisplayConfig,
    surface: Option<SurfaceHandle>,
}

impl Display {
    /// Display accessor over `document` with the default element ids.
    pub fn new(document: Document) -> Self {
        Self::with_config(document, DisplayConfig::default())
    }

    pub fn with_config(document: Document, config: DisplayConfig) -> Self {
        Self {
            document,
            config,
            surface: None,
        }
    }

    /// The host document this display works on.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Ensure the drawing canvas exists and the page chrome is wired up.
    ///
    /// Creates the canvas with the configured id when the document has
    /// none; calling this twice never yields a second canvas. Removes the
    /// loading indicator if the page still shows one, and registers the
    /// change listener on the fullscreen checkbox when present. The
    /// listener compares the checkbox against the real fullscreen state on
    /// every change, so repeated registration stays harmless.
    pub fn init(&self) {
        let canvas = match self.document.canvas_by_id(&self.config.canvas_id) {
            Some(canvas) => canvas,
            None => {
                log::info!("creating display canvas #{}", self.config.canvas_id);
                self.document.create_canvas(&self.config.canvas_id)
            }
        };

        if self.document.remove_element_by_id(&self.config.loader_id) {
            log::debug!("removed loading indicator #{}", self.config.loader_id);
        }

        if let Some(checkbox) = self
            .document
            .checkbox_by_id(&self.config.fullscreen_toggle_id)
        {
            let document = self.document.clone();
            let toggle = checkbox.clone();
            checkbox.on_change(move |event| {
                if toggle.checked() != fullscreen::is_active(&document) {
                    fullscreen::toggle(&document, &canvas);
                }
                event.prevent_default();
            });
        }
    }

    /// Set the pixel size of the display and return its surface.
    ///
    /// The canvas is resized in place, so every clone of the surface
    /// handle observes the new size. Panics when the canvas does not exist
    /// yet; [`Display::init`] must run first.
    pub fn set_mode(&mut self, width: u32, height: u32) -> SurfaceHandle {
        debug_assert!(
            width > 0 && height > 0,
            "display dimensions must be positive"
        );
        let canvas = self
            .document
            .canvas_by_id(&self.config.canvas_id)
            .expect(NO_CANVAS);
        canvas.set_width(width);
        canvas.set_height(height);
        log::debug!("display mode set to {width}x{height}");
        self.surface()
    }

    /// Set the page title shown by the host.
    pub fn set_caption(&self, title: &str, icon: Option<&str>) {
        // TODO favicon support; icon paths need the asset loader
        let _ = icon;
        self.document.set_title(title);
    }

    /// Whether the display is currently presented in fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        fullscreen::is_active(&self.document)
    }

    /// Switch between windowed and fullscreen presentation.
    ///
    /// Returns `false` when the host exposes no fullscreen capability at
    /// all, in which case no host call is made. A `true` return means the
    /// request was issued; the transition completes asynchronously. Panics
    /// when entering fullscreen without a display canvas;
    /// [`Display::init`] must run first.
    pub fn toggle_fullscreen(&self) -> bool {
        if fullscreen::is_active(&self.document) {
            fullscreen::exit(&self.document)
        } else {
            let canvas = self
                .document
                .canvas_by_id(&self.config.canvas_id)
                .expect(NO_CANVAS);
            fullscreen::enter(&self.document, &canvas)
        }
    }

    /// The display surface. Drawing on it draws on the screen.
    ///
    /// Built on the first call from the canvas's current dimensions, bound
    /// to the canvas and its 2D context, with the configured smoothing
    /// applied. Every later call returns the same shared handle. Panics
    /// when the canvas does not exist yet; [`Display::init`] must run
    /// first.
    pub fn surface(&mut self) -> SurfaceHandle {
        if let Some(handle) = &self.surface {
            return Rc::clone(handle);
        }

        let canvas = self
            .document
            .canvas_by_id(&self.config.canvas_id)
            .expect(NO_CANVAS);
        let context = canvas.context_2d();
        let mut surface = Surface::new(canvas.width(), canvas.height());
        surface.bind(canvas, context);
        surface.set_smoothing(self.config.smoothing);
        log::debug!(
            "display surface created at {}x{}",
            surface.width(),
            surface.height()
        );

        let handle = surface.into_handle();
        self.surface = Some(Rc::clone(&handle));
        handle
    }
}
