// Navbar scroll state and hamburger menu

use site_effects::navbar::{MenuOptions, MenuState, NavbarOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;

const HAMBURGER_ACTIVE: &str = "active";
const MENU_OPEN: &str = "open";

pub fn init_scroll(window: &Window, document: &Document, options: &NavbarOptions) -> Result<(), JsValue> {
    let Some(navbar) = document.get_element_by_id(&options.id) else {
        return Ok(());
    };
    let scroll_window = window.clone();
    let options = options.clone();
    dom::listen_passive(window, "scroll", move |_| {
        let scrolled = options.is_scrolled(scroll_window.scroll_y().unwrap_or_default());
        dom::report(
            navbar
                .class_list()
                .toggle_with_force(&options.scrolled_class, scrolled)
                .map(|_| ()),
        );
    })
}

pub fn init_menu(document: &Document, options: &MenuOptions) -> Result<(), JsValue> {
    let (Some(hamburger), Some(nav_links)) = (
        document.get_element_by_id(&options.hamburger_id),
        document.get_element_by_id(&options.nav_links_id),
    ) else {
        return Ok(());
    };
    let body = document.body();

    let (button, links, page) = (hamburger.clone(), nav_links.clone(), body.clone());
    dom::listen(&hamburger, "click", move |_| {
        // The menu's `open` class decides the state; `active` on the button is
        // forced to match instead of toggled on its own, so markup that ships
        // them out of sync is brought back in line on the first click.
        let mut menu = MenuState::new(links.class_list().contains(MENU_OPEN));
        menu.toggle();
        dom::report(apply(menu, &button, &links, page.as_ref()));
    })?;

    for link in dom::query_all_in(&nav_links, "a")? {
        let (hamburger, nav_links, body) = (hamburger.clone(), nav_links.clone(), body.clone());
        dom::listen(&link, "click", move |_| {
            dom::report(apply(MenuState::default(), &hamburger, &nav_links, body.as_ref()));
        })?;
    }
    Ok(())
}

fn apply(
    menu: MenuState,
    hamburger: &Element,
    nav_links: &Element,
    body: Option<&HtmlElement>,
) -> Result<(), JsValue> {
    hamburger
        .class_list()
        .toggle_with_force(HAMBURGER_ACTIVE, menu.is_open())?;
    nav_links
        .class_list()
        .toggle_with_force(MENU_OPEN, menu.is_open())?;
    if let Some(body) = body {
        body.style().set_property("overflow", menu.body_overflow())?;
    }
    Ok(())
}
