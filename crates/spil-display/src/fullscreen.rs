//! Fullscreen state queries and toggling.
//!
//! Everything funnels through the document's single capability probe:
//! when [`Document::fullscreen_enabled`] answers `false`, entering and
//! leaving report failure without issuing any host call. A `true` return
//! from [`enter`] or [`exit`] means the request went out, not that the
//! transition finished; hosts complete it asynchronously and may still
//! deny it.

use spil_core::dom::{Canvas, Document};

/// Whether the document currently presents an element in fullscreen.
pub fn is_active(document: &Document) -> bool {
    document.fullscreen_active()
}

/// Ask the host to present `canvas` in fullscreen. Returns whether a
/// request was issued.
pub fn enter(document: &Document, canvas: &Canvas) -> bool {
    if !document.fullscreen_enabled() {
        return false;
    }
    canvas.request_fullscreen()
}

/// Ask the host to leave fullscreen. Returns `false` when the host has no
/// fullscreen capability to leave.
pub fn exit(document: &Document) -> bool {
    if !document.fullscreen_enabled() {
        return false;
    }
    document.exit_fullscreen();
    true
}

/// Switch between windowed and fullscreen presentation, keyed off the
/// current state.
pub fn toggle(document: &Document, canvas: &Canvas) -> bool {
    if is_active(document) {
        exit(document)
    } else {
        enter(document, canvas)
    }
}
