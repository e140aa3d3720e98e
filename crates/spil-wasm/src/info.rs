//! JSON payloads reported across the JS boundary.

use serde::Serialize;

/// Pixel dimensions of the display surface as reported to JS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceInfo {
    pub width: u32,
    pub height: u32,
}

impl SurfaceInfo {
    /// Serialize for the JS side. Falls back to an empty object so the
    /// boundary never throws.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn surface_info_serializes_width_and_height() {
        let info = SurfaceInfo {
            width: 800,
            height: 600,
        };
        assert_eq!(info.to_json(), r#"{"width":800,"height":600}"#);
    }
}
