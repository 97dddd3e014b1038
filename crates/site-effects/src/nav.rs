//! Which navigation link is highlighted: by scroll position on single-page
//! layouts, and by file name for multi-page sites.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveNavOptions {
    pub section_selector: String,
    pub link_selector: String,
    /// Links checked against the current page name
    pub page_link_selector: String,
    pub active_class: String,
    /// Pixels above a section's top at which it becomes current
    pub offset: f64,
    /// Scroll tracking is only installed with more than this many sections
    pub min_sections: usize,
}

impl Default for ActiveNavOptions {
    fn default() -> Self {
        Self {
            section_selector: "section[id]".to_string(),
            link_selector: ".nav-links a[href^=\"#\"]".to_string(),
            page_link_selector: ".nav-links a".to_string(),
            active_class: "active".to_string(),
            offset: 90.0,
            min_sections: 2,
        }
    }
}

impl ActiveNavOptions {
    pub fn tracks(&self, section_count: usize) -> bool {
        section_count > self.min_sections
    }

    /// Id of the last section whose top (less the offset) has been scrolled past.
    pub fn current_section<'a, I>(&self, scroll_y: f64, sections: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        sections
            .into_iter()
            .filter(|&(_, top)| scroll_y >= top - self.offset)
            .last()
            .map(|(id, _)| id)
    }
}

/// A hash link is active when it points at the current section. Before any
/// section is reached the current id is empty, so only a bare `#` matches.
pub fn is_active_link(href: &str, current: Option<&str>) -> bool {
    href.strip_prefix('#') == Some(current.unwrap_or(""))
}

/// File name of the current page; the site root maps to `index.html`.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => "index.html",
    }
}

pub fn links_to_page(href: &str, page: &str) -> bool {
    href.contains(page)
}
