//! Integration tests for fullscreen state, toggling, and the checkbox
//! control.

use spil_core::dom::Document;
use spil_display::Display;
use spil_display::config::FULLSCREEN_TOGGLE_ID;

fn display_with_fullscreen() -> Display {
    let document = Document::new();
    document.set_fullscreen_enabled(true);
    let display = Display::new(document);
    display.init();
    display
}

// ─── direct toggling ─────────────────────────────────────────────────────

#[test]
fn windowed_before_any_toggle() {
    let display = display_with_fullscreen();
    assert!(!display.is_fullscreen());
}

#[test]
fn toggle_without_host_support_reports_failure() {
    // The in-memory document exposes no fullscreen capability by default.
    let display = Display::new(Document::new());
    display.init();

    assert!(!display.toggle_fullscreen());
    assert!(!display.is_fullscreen());
}

#[test]
fn toggle_enters_then_leaves_fullscreen() {
    let display = display_with_fullscreen();

    assert!(display.toggle_fullscreen());
    assert!(display.is_fullscreen());

    assert!(display.toggle_fullscreen());
    assert!(!display.is_fullscreen());
}

// ─── checkbox control ────────────────────────────────────────────────────

fn checkbox_setup(fullscreen_enabled: bool) -> (Display, spil_core::dom::Checkbox) {
    let document = Document::new();
    document.set_fullscreen_enabled(fullscreen_enabled);
    let checkbox = document.insert_checkbox(FULLSCREEN_TOGGLE_ID);

    let display = Display::new(document);
    display.init();
    (display, checkbox)
}

#[test]
fn checkbox_changes_drive_fullscreen() {
    let (display, checkbox) = checkbox_setup(true);

    checkbox.set_checked(true);
    let prevented = checkbox.emit_change();
    assert!(prevented, "the listener must suppress the default action");
    assert!(display.is_fullscreen());

    checkbox.set_checked(false);
    checkbox.emit_change();
    assert!(!display.is_fullscreen());
}

#[test]
fn checkbox_in_agreement_changes_nothing() {
    let (display, checkbox) = checkbox_setup(true);

    // Unchecked and windowed already agree, so nothing may toggle.
    let prevented = checkbox.emit_change();
    assert!(prevented);
    assert!(!display.is_fullscreen());
}

#[test]
fn repeated_init_keeps_the_checkbox_consistent() {
    let (display, checkbox) = checkbox_setup(true);
    display.init();

    // Two registered listeners: the first flips the state, the second
    // sees checkbox and state agreeing and leaves it alone.
    checkbox.set_checked(true);
    checkbox.emit_change();
    assert!(
        display.is_fullscreen(),
        "the display must end up fullscreen, not toggled back"
    );
}

#[test]
fn checkbox_without_host_support_stays_windowed() {
    let (display, checkbox) = checkbox_setup(false);

    checkbox.set_checked(true);
    let prevented = checkbox.emit_change();
    assert!(prevented, "the default action is suppressed either way");
    assert!(!display.is_fullscreen());
}
