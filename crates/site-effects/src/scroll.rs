// File: src/scroll.rs
// Purpose: Smooth in-page anchor scrolling below a fixed header

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothScrollOptions {
    pub link_selector: String,
    /// Height reserved for the fixed navbar
    pub offset: f64,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            link_selector: "a[href^=\"#\"]".to_string(),
            offset: 80.0,
        }
    }
}

impl SmoothScrollOptions {
    /// Document offset to scroll to so the target sits just below the header.
    pub fn target_top(&self, rect_top: f64, scroll_y: f64) -> f64 {
        rect_top + scroll_y - self.offset
    }
}

/// Element id an in-page link points to. A bare `#` points nowhere.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
