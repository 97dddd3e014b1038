// In-page navigation: smooth anchor scrolling, the active section link,
// and the current page link.

use site_effects::nav::{current_page, is_active_link, links_to_page, ActiveNavOptions};
use site_effects::scroll::{anchor_id, SmoothScrollOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;

pub fn init_smooth(window: &Window, document: &Document, options: &SmoothScrollOptions) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, &options.link_selector)? {
        let (window, document, options, link) =
            (window.clone(), document.clone(), options.clone(), anchor.clone());
        dom::listen(&anchor, "click", move |event: Event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_id(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();

            let top = options.target_top(
                target.get_bounding_client_rect().top(),
                window.scroll_y().unwrap_or_default(),
            );
            let scroll = ScrollToOptions::new();
            scroll.set_top(top);
            scroll.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&scroll);
        })?;
    }
    Ok(())
}

/// Highlight the link of the section being read. Only installed on
/// single-page layouts.
pub fn init_active_nav(window: &Window, document: &Document, options: &ActiveNavOptions) -> Result<(), JsValue> {
    let sections = dom::query_all(document, &options.section_selector)?;
    if !options.tracks(sections.len()) {
        return Ok(());
    }
    let links = dom::query_all(document, &options.link_selector)?;
    if links.is_empty() {
        return Ok(());
    }

    let scroll_window = window.clone();
    let options = options.clone();
    dom::listen_passive(window, "scroll", move |_| {
        let scroll_y = scroll_window.scroll_y().unwrap_or_default();
        let positions: Vec<(String, f64)> = sections
            .iter()
            .map(|section| {
                let top = section
                    .dyn_ref::<HtmlElement>()
                    .map(|el| f64::from(el.offset_top()))
                    .unwrap_or_default();
                (section.id(), top)
            })
            .collect();
        let current = options.current_section(
            scroll_y,
            positions.iter().map(|(id, top)| (id.as_str(), *top)),
        );

        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            dom::report(
                link.class_list()
                    .toggle_with_force(&options.active_class, is_active_link(&href, current))
                    .map(|_| ()),
            );
        }
    })
}

pub fn mark_current_page(window: &Window, document: &Document, options: &ActiveNavOptions) -> Result<(), JsValue> {
    let pathname = window.location().pathname()?;
    let page = current_page(&pathname);
    for link in dom::query_all(document, &options.page_link_selector)? {
        if let Some(href) = link.get_attribute("href") {
            if links_to_page(&href, page) {
                link.class_list().add_1(&options.active_class)?;
            }
        }
    }
    Ok(())
}
