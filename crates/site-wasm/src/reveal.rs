// Scroll reveal: stagger siblings, add the visible class once in view

use site_effects::reveal::{parse_delay, RevealOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom;

const DELAY_ATTR: &str = "data-reveal-delay";

pub fn init(document: &Document, options: &RevealOptions) -> Result<(), JsValue> {
    let targets = dom::query_all(document, &options.selector)?;

    for el in &targets {
        stagger(el, options)?;
    }

    let visible_class = options.visible_class.clone();
    dom::observe_once(
        &targets,
        options.threshold,
        Some(options.root_margin.as_str()),
        move |target: Element| {
            let delay = parse_delay(target.get_attribute(DELAY_ATTR).as_deref());
            let class = visible_class.clone();
            dom::report(dom::set_timeout(delay, move || {
                dom::report(target.class_list().add_1(&class));
            }));
        },
    )
}

fn stagger(el: &Element, options: &RevealOptions) -> Result<(), JsValue> {
    let Some(parent) = el.parent_element() else {
        return Ok(());
    };
    let siblings = dom::query_all_in(&parent, &format!(":scope > {}", options.selector))?;
    let delay = siblings
        .iter()
        .position(|s| s == el)
        .and_then(|index| options.stagger_delay(index, siblings.len()));
    if let Some(delay) = delay {
        el.set_attribute(DELAY_ATTR, &delay.to_string())?;
    }
    Ok(())
}
