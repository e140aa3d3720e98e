//! Integration tests for surface construction and canvas binding.

use pretty_assertions::assert_eq;
use spil_core::dom::Document;
use spil_core::surface::Surface;

fn bound_surface() -> (Document, Surface) {
    let document = Document::new();
    let canvas = document.create_canvas("screen");
    let context = canvas.context_2d();

    let mut surface = Surface::new(canvas.width(), canvas.height());
    surface.bind(canvas, context);
    (document, surface)
}

#[test]
fn binding_preserves_the_canvas_dimensions() {
    let (document, surface) = bound_surface();
    let canvas = document.canvas_by_id("screen").expect("canvas was created");
    assert_eq!(surface.size(), (canvas.width(), canvas.height()));
}

#[test]
fn canvas_resizes_are_visible_through_the_surface() {
    let (document, surface) = bound_surface();
    let canvas = document.canvas_by_id("screen").expect("canvas was created");

    canvas.set_width(1024);
    canvas.set_height(768);
    assert_eq!(surface.size(), (1024, 768));
}

#[test]
fn smoothing_reaches_the_bound_context() {
    let (_document, mut surface) = bound_surface();
    let context = surface.context().expect("surface is bound").clone();
    assert!(context.image_smoothing_enabled(), "smoothing defaults to on");

    surface.set_smoothing(false);
    assert!(!context.image_smoothing_enabled());

    surface.set_smoothing(true);
    assert!(context.image_smoothing_enabled());
}

#[test]
fn a_canvas_hands_out_one_context() {
    let document = Document::new();
    let canvas = document.create_canvas("screen");

    let first = canvas.context_2d();
    let second = canvas.context_2d();
    assert_eq!(first, second, "repeated context queries yield the same context");
}
