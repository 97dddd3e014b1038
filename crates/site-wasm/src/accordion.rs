// FAQ accordion

use site_effects::accordion::{Accordion, AccordionOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom;

pub fn init(document: &Document, options: &AccordionOptions) -> Result<(), JsValue> {
    for trigger in dom::query_all(document, &options.trigger_selector)? {
        let document = document.clone();
        let options = options.clone();
        let button = trigger.clone();
        dom::listen(&trigger, "click", move |_| {
            dom::report(toggle(&document, &options, &button));
        })?;
    }
    Ok(())
}

fn toggle(document: &Document, options: &AccordionOptions, button: &Element) -> Result<(), JsValue> {
    let Some(item) = button.closest(&options.item_selector)? else {
        return Ok(());
    };
    let items = dom::query_all(document, &options.item_selector)?;
    let Some(index) = items.iter().position(|i| *i == item) else {
        return Ok(());
    };

    // The page is the source of truth; other scripts may have opened items.
    let open = items
        .iter()
        .map(|i| i.class_list().contains(&options.active_class))
        .collect();
    let change = Accordion::from_open_flags(open).toggle(index);

    for i in change.closed {
        let item = &items[i];
        item.class_list().remove_1(&options.active_class)?;
        if let Some(trigger) = item.query_selector(&options.trigger_selector)? {
            trigger.set_attribute("aria-expanded", "false")?;
        }
    }
    if let Some(i) = change.opened {
        items[i].class_list().add_1(&options.active_class)?;
        button.set_attribute("aria-expanded", "true")?;
    }
    Ok(())
}
