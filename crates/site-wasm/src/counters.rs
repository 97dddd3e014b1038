// Statistic counters: animate once when scrolled into view

use std::cell::RefCell;
use std::rc::Rc;

use site_effects::counter::{parse_target, CounterAnimation, CounterOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom;

pub fn init(document: &Document, options: &CounterOptions) -> Result<(), JsValue> {
    let targets = dom::query_all(document, &options.selector)?;
    let duration_ms = options.duration_ms;

    dom::observe_once(&targets, options.threshold, None, move |el: Element| {
        let Some(target) = el.get_attribute("data-target").as_deref().and_then(parse_target) else {
            return;
        };
        dom::report(animate(el, CounterAnimation::new(target, duration_ms)));
    })
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drive the element's text from `requestAnimationFrame` until the
/// animation reports done.
pub fn animate(el: Element, animation: CounterAnimation) -> Result<(), JsValue> {
    let window = dom::window()?;
    let start = window.performance().map(|p| p.now()).unwrap_or_default();

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let frame_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        let frame = animation.frame(timestamp - start);
        el.set_text_content(Some(&frame.value.to_string()));

        if frame.done {
            // Drop our own closure; nothing else references it.
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(cb) = next.borrow().as_ref() {
            dom::report(
                frame_window
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .map(|_| ()),
            );
        }
    }));

    if let Some(cb) = callback.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
