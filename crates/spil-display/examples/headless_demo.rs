use spil_core::dom::Document;
use spil_display::Display;
use spil_display::config::{FULLSCREEN_TOGGLE_ID, LOADER_ID};

// Walk the display layer through a typical page lifecycle against the
// in-memory document. Run with RUST_LOG=debug to watch the steps.
fn main() {
    env_logger::init();

    let document = Document::new();
    document.set_fullscreen_enabled(true);
    document.insert_element(LOADER_ID);
    let checkbox = document.insert_checkbox(FULLSCREEN_TOGGLE_ID);

    let mut display = Display::new(document);
    display.init();
    display.set_caption("Spil demo", None);

    let surface = display.set_mode(800, 600);
    println!("surface:    {}x{}", surface.borrow().width(), surface.borrow().height());
    println!("title:      {}", display.document().title());
    println!("body:       {:?}", display.document().body_ids());

    println!("fullscreen: {}", display.is_fullscreen());
    checkbox.set_checked(true);
    checkbox.emit_change();
    println!("fullscreen: {} (after checking the toggle)", display.is_fullscreen());

    display.set_mode(1024, 768);
    println!("surface:    {}x{} (same handle)", surface.borrow().width(), surface.borrow().height());
}
