//! Portfolio category filter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioOptions {
    pub button_selector: String,
    pub card_selector: String,
    pub active_class: String,
}

impl Default for PortfolioOptions {
    fn default() -> Self {
        Self {
            button_selector: ".filter-btn".to_string(),
            card_selector: ".portfolio-card".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Filter selected by a button's `data-filter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    /// Cards whose `data-category` equals the value; `None` selects
    /// uncategorized cards.
    Only(Option<String>),
}

impl Filter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("all") => Filter::All,
            other => Filter::Only(other.map(str::to_string)),
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted.as_deref() == category,
        }
    }

    /// Inline `display` for a card: empty restores the stylesheet value.
    pub fn display_for(&self, category: Option<&str>) -> &'static str {
        if self.matches(category) {
            ""
        } else {
            "none"
        }
    }
}
