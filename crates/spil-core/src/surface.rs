//! The drawable surface primitive.
//!
//! `Surface` is the unit applications draw onto. This crate carries the
//! narrow construction and binding interface the display layer needs:
//! build from pixel dimensions, attach the canvas and its 2D context once,
//! and apply a smoothing setting. Blitting and pixel access belong to the
//! drawing layers above.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{Canvas, Context2d};

/// Shared handle to a display surface. Clones refer to the same surface.
pub type SurfaceHandle = Rc<RefCell<Surface>>;

/// A rectangular drawing target, optionally bound to a canvas element.
#[derive(Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    smoothing: bool,
    canvas: Option<Canvas>,
    context: Option<Context2d>,
}

impl Surface {
    /// Create an unbound surface with the given pixel dimensions and
    /// smoothing on.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            smoothing: true,
            canvas: None,
            context: None,
        }
    }

    /// Attach the canvas and its 2D context. The display layer calls this
    /// exactly once; the bindings never change afterwards.
    pub fn bind(&mut self, canvas: Canvas, context: Context2d) {
        self.canvas = Some(canvas);
        self.context = Some(context);
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn context(&self) -> Option<&Context2d> {
        self.context.as_ref()
    }

    /// Width in pixels. Bound surfaces read through the shared canvas, so
    /// a resize of the element is visible here immediately.
    pub fn width(&self) -> u32 {
        self.canvas.as_ref().map_or(self.width, Canvas::width)
    }

    /// Height in pixels, read through the canvas once bound.
    pub fn height(&self) -> u32 {
        self.canvas.as_ref().map_or(self.height, Canvas::height)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Whether image smoothing is requested for this surface.
    pub fn smoothing(&self) -> bool {
        self.smoothing
    }

    /// Set image smoothing and push the setting to the bound context.
    pub fn set_smoothing(&mut self, smoothing: bool) {
        self.smoothing = smoothing;
        self.apply_smoothing();
    }

    /// Re-apply the current smoothing setting to the bound context, for
    /// example after the context was reset by a canvas resize.
    pub fn apply_smoothing(&self) {
        if let Some(context) = &self.context {
            context.set_image_smoothing_enabled(self.smoothing);
        }
    }

    /// Wrap into the shared handle form the display layer hands out.
    pub fn into_handle(self) -> SurfaceHandle {
        Rc::new(RefCell::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn unbound_surface_keeps_its_constructed_size() {
        let surface = Surface::new(320, 240);
        assert_eq!(surface.size(), (320, 240));
        assert!(surface.canvas().is_none());
    }

    #[test]
    fn bound_surface_reads_sizes_through_the_canvas() {
        let document = Document::new();
        let canvas = document.create_canvas("screen");
        canvas.set_width(640);
        canvas.set_height(400);

        let mut surface = Surface::new(canvas.width(), canvas.height());
        surface.bind(canvas.clone(), canvas.context_2d());
        assert_eq!(surface.size(), (640, 400));

        canvas.set_width(800);
        canvas.set_height(600);
        assert_eq!(surface.size(), (800, 600));
    }
}
