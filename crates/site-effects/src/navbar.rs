// File: src/navbar.rs
// Purpose: Sticky navbar styling and the mobile hamburger menu

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarOptions {
    pub id: String,
    pub scrolled_class: String,
    /// Scroll offset in pixels past which the navbar counts as scrolled
    pub threshold: f64,
}

impl Default for NavbarOptions {
    fn default() -> Self {
        Self {
            id: "navbar".to_string(),
            scrolled_class: "scrolled".to_string(),
            threshold: 40.0,
        }
    }
}

impl NavbarOptions {
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuOptions {
    pub hamburger_id: String,
    pub nav_links_id: String,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            hamburger_id: "hamburger".to_string(),
            nav_links_id: "navLinks".to_string(),
        }
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// `overflow` for the page body; scrolling is locked while the menu is open.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_past_threshold() {
        let opts = NavbarOptions::default();
        assert!(!opts.is_scrolled(0.0));
        assert!(!opts.is_scrolled(40.0));
        assert!(opts.is_scrolled(40.5));
    }

    #[test]
    fn test_menu_toggle_locks_body() {
        let mut menu = MenuState::default();
        assert_eq!(menu.body_overflow(), "");
        assert!(menu.toggle());
        assert_eq!(menu.body_overflow(), "hidden");
        assert!(!menu.toggle());
        assert_eq!(menu.body_overflow(), "");
    }

    #[test]
    fn test_menu_close_is_idempotent() {
        let mut menu = MenuState::new(true);
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
