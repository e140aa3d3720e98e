//! Host document access.
//!
//! On wasm32 the types in this module wrap the browser DOM through
//! `web-sys`. On every other target an in-memory document with the same
//! interface stands in, so the library and its tests run without a browser.
//!
//! The interface is deliberately narrow: element lookup and creation by id,
//! the page title, change events on checkboxes, and the standard Fullscreen
//! API behind a single capability probe ([`Document::fullscreen_enabled`]).
//! Hosts without fullscreen support answer `false` to the probe and no
//! request is ever issued against them.

#[cfg(target_arch = "wasm32")]
#[path = "web.rs"]
mod backend;

#[cfg(not(target_arch = "wasm32"))]
#[path = "headless.rs"]
mod backend;

pub use backend::{Canvas, ChangeEvent, Checkbox, Context2d, Document};
