// Site Effects
// Browser-independent state behind the site's interactive behaviors.
// The DOM side lives in site-wasm; everything here is plain data and
// arithmetic so it can be tested natively.

pub mod accordion;
pub mod config;
pub mod contact;
pub mod counter;
pub mod nav;
pub mod navbar;
pub mod portfolio;
pub mod reveal;
pub mod scroll;

pub use accordion::{Accordion, AccordionChange, AccordionOptions};
pub use config::SiteConfig;
pub use contact::{ContactFlow, ContactOptions, Stage, Submission};
pub use counter::{CounterAnimation, CounterFrame, CounterOptions};
pub use nav::ActiveNavOptions;
pub use navbar::{MenuOptions, MenuState, NavbarOptions};
pub use portfolio::{Filter, PortfolioOptions};
pub use reveal::RevealOptions;
pub use scroll::SmoothScrollOptions;

// Re-export the form layer so the bindings need a single dependency path
pub use site_forms;
