//! Display configuration and the well-known element ids.

use serde::{Deserialize, Serialize};

/// Id of the canvas element the display draws to.
pub const CANVAS_ID: &str = "spil-canvas";

/// Id of the transient loading indicator removed once the display is up.
pub const LOADER_ID: &str = "spil-loader";

/// Id of the checkbox that switches fullscreen on and off.
pub const FULLSCREEN_TOGGLE_ID: &str = "spil-fullscreen-toggle";

/// Element ids and surface defaults for a display.
///
/// The defaults match what the stock HTML shell provides; embedders with
/// their own page layout override the ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Id of the drawing canvas, created on demand when missing.
    pub canvas_id: String,
    /// Id of the loading indicator to remove, if the page has one.
    pub loader_id: String,
    /// Id of the checkbox that drives fullscreen toggling, if present.
    pub fullscreen_toggle_id: String,
    /// Image smoothing applied when the surface is first created.
    pub smoothing: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_string(),
            loader_id: LOADER_ID.to_string(),
            fullscreen_toggle_id: FULLSCREEN_TOGGLE_ID.to_string(),
            smoothing: true,
        }
    }
}
