// Portfolio filter buttons

use std::rc::Rc;

use site_effects::portfolio::{Filter, PortfolioOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

pub fn init(document: &Document, options: &PortfolioOptions) -> Result<(), JsValue> {
    let buttons = Rc::new(dom::query_all(document, &options.button_selector)?);
    let cards = Rc::new(dom::query_all(document, &options.card_selector)?);
    if buttons.is_empty() || cards.is_empty() {
        return Ok(());
    }

    for button in buttons.iter() {
        let (all, cards, options, clicked) =
            (buttons.clone(), cards.clone(), options.clone(), button.clone());
        dom::listen(button, "click", move |_| {
            dom::report(select(&all, &cards, &clicked, &options));
        })?;
    }
    Ok(())
}

fn select(
    buttons: &[Element],
    cards: &[Element],
    clicked: &Element,
    options: &PortfolioOptions,
) -> Result<(), JsValue> {
    for button in buttons {
        button.class_list().remove_1(&options.active_class)?;
    }
    clicked.class_list().add_1(&options.active_class)?;

    let filter = Filter::parse(clicked.get_attribute("data-filter").as_deref());
    for card in cards {
        let category = card.get_attribute("data-category");
        if let Some(card) = card.dyn_ref::<HtmlElement>() {
            card.style()
                .set_property("display", filter.display_for(category.as_deref()))?;
        }
    }
    Ok(())
}
