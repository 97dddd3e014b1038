// File: src/config.rs
// Purpose: Site behavior configuration parsed from site.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::accordion::AccordionOptions;
use crate::contact::ContactOptions;
use crate::counter::CounterOptions;
use crate::nav::ActiveNavOptions;
use crate::navbar::{MenuOptions, NavbarOptions};
use crate::portfolio::PortfolioOptions;
use crate::reveal::RevealOptions;
use crate::scroll::SmoothScrollOptions;

/// Every behavior the site wires up, with the values the pages use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Highlight the nav link of the current page (multi-page layouts)
    #[serde(default = "default_true")]
    pub mark_current_page: bool,

    #[serde(default)]
    pub navbar: NavbarOptions,

    #[serde(default)]
    pub menu: MenuOptions,

    #[serde(default)]
    pub smooth_scroll: SmoothScrollOptions,

    #[serde(default)]
    pub reveal: RevealOptions,

    #[serde(default)]
    pub counters: CounterOptions,

    #[serde(default)]
    pub faq: AccordionOptions,

    #[serde(default)]
    pub active_nav: ActiveNavOptions,

    #[serde(default)]
    pub portfolio: PortfolioOptions,

    #[serde(default)]
    pub contact: ContactOptions,
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mark_current_page: true,
            navbar: NavbarOptions::default(),
            menu: MenuOptions::default(),
            smooth_scroll: SmoothScrollOptions::default(),
            reveal: RevealOptions::default(),
            counters: CounterOptions::default(),
            faq: AccordionOptions::default(),
            active_nav: ActiveNavOptions::default(),
            portfolio: PortfolioOptions::default(),
            contact: ContactOptions::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // A missing file means the defaults
        if !path.exists() {
            debug!(?path, "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./site.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("site.toml")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
