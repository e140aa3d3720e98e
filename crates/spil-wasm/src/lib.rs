//! WASM bridge for Spil: exposes the display layer to JavaScript.
//!
//! Compiled via `wasm-pack build --target web` and loaded from the HTML
//! shell under `www/`. On other targets only the JSON payload types are
//! compiled; the bridge itself needs a browser.

mod info;

#[cfg(target_arch = "wasm32")]
mod bridge;

pub use info::SurfaceInfo;

#[cfg(target_arch = "wasm32")]
pub use bridge::SpilDisplay;
