//! Contact form presentation.
//!
//! Reads field values from the form, runs them through [`ContactFlow`], and
//! renders the outcome: inline error messages on rejection, a pending label
//! and a delayed success panel on acceptance.

use std::cell::RefCell;
use std::rc::Rc;

use site_effects::contact::{
    clear_event_for, ContactFlow, ContactOptions, Submission, ERROR_MESSAGE_CLASS,
    FIELD_ERROR_CLASS,
};
use site_forms::{FieldValues, RuleSet};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlFormElement, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::dom;

pub fn init(document: &Document, options: &ContactOptions) -> Result<(), JsValue> {
    let Some(form) = document.get_element_by_id(&options.form_id) else {
        return Ok(());
    };
    let form: HtmlFormElement = form
        .dyn_into()
        .map_err(|_| JsValue::from_str("contact form element is not a <form>"))?;

    init_live_clearing(&form, &options.rules)?;

    let flow = Rc::new(RefCell::new(ContactFlow::new(options.clone())));
    let (document, submitted) = (document.clone(), form.clone());
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        dom::report(on_submit(&document, &submitted, &flow));
    })
}

/// The named control of the form, as `form.elements[name]` resolves it: an
/// element, or a `RadioNodeList` for a radio group.
fn control(form: &HtmlFormElement, name: &str) -> Option<JsValue> {
    let control = js_sys::Reflect::get(&form.elements(), &JsValue::from_str(name)).ok()?;
    if control.is_undefined() || control.is_null() {
        None
    } else {
        Some(control)
    }
}

/// Elements behind a control: itself, or every radio of a group.
fn members(control: &JsValue) -> Vec<Element> {
    if let Some(el) = control.dyn_ref::<Element>() {
        return vec![el.clone()];
    }
    match control.dyn_ref::<NodeList>() {
        Some(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        None => Vec::new(),
    }
}

/// Element that carries a field's error state. For a radio group it is
/// the first radio.
fn field(form: &HtmlFormElement, name: &str) -> Option<Element> {
    control(form, name).and_then(|c| members(&c).into_iter().next())
}

/// `value` of the control. A radio group reports its checked radio, or
/// the empty string when none is checked.
fn field_value(control: &JsValue) -> String {
    js_sys::Reflect::get(control, &JsValue::from_str("value"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Values of the fields the rules mention; fields missing from the form are left out.
pub fn read_values(form: &HtmlFormElement, rules: &RuleSet) -> FieldValues {
    rules
        .field_names()
        .filter_map(|name| control(form, name).map(|c| (name, field_value(&c))))
        .collect()
}

pub fn show_error(document: &Document, field: &Element, message: &str) -> Result<(), JsValue> {
    field.class_list().add_1(FIELD_ERROR_CLASS)?;
    if let Some(parent) = field.parent_element() {
        if let Some(existing) = parent.query_selector(&format!(".{}", ERROR_MESSAGE_CLASS))? {
            existing.remove();
        }
    }
    let span = document.create_element("span")?;
    span.set_class_name(ERROR_MESSAGE_CLASS);
    span.set_text_content(Some(message));
    field.insert_adjacent_element("afterend", &span)?;
    Ok(())
}

pub fn clear_errors(form: &HtmlFormElement) -> Result<(), JsValue> {
    for el in dom::query_all_in(form, &format!(".{}", FIELD_ERROR_CLASS))? {
        el.class_list().remove_1(FIELD_ERROR_CLASS)?;
    }
    for el in dom::query_all_in(form, &format!(".{}", ERROR_MESSAGE_CLASS))? {
        el.remove();
    }
    Ok(())
}

/// Remove a field's error as soon as the user edits it.
pub fn init_live_clearing(form: &HtmlFormElement, rules: &RuleSet) -> Result<(), JsValue> {
    for name in rules.field_names() {
        let Some(control) = control(form, name) else {
            continue;
        };
        let members = members(&control);
        let Some(target) = members.first().cloned() else {
            continue;
        };
        for el in &members {
            let target = target.clone();
            dom::listen(el, clear_event_for(&el.tag_name()), move |_| {
                dom::report(clear_field(&target));
            })?;
        }
    }
    Ok(())
}

fn clear_field(field: &Element) -> Result<(), JsValue> {
    field.class_list().remove_1(FIELD_ERROR_CLASS)?;
    if let Some(sibling) = field.next_element_sibling() {
        if sibling.class_list().contains(ERROR_MESSAGE_CLASS) {
            sibling.remove();
        }
    }
    Ok(())
}

fn on_submit(
    document: &Document,
    form: &HtmlFormElement,
    flow: &Rc<RefCell<ContactFlow>>,
) -> Result<(), JsValue> {
    clear_errors(form)?;

    let values = read_values(form, flow.borrow().rules());
    let submission = flow.borrow_mut().submit(&values);

    match submission {
        Submission::Rejected(result) => {
            for (name, message) in result.errors() {
                if let Some(el) = field(form, name) {
                    show_error(document, &el, message)?;
                }
            }
            if let Some(first) = form.query_selector(&format!(".{}", FIELD_ERROR_CLASS))? {
                let scroll = ScrollIntoViewOptions::new();
                scroll.set_behavior(ScrollBehavior::Smooth);
                scroll.set_block(ScrollLogicalPosition::Center);
                first.scroll_into_view_with_scroll_into_view_options(&scroll);
            }
        }
        Submission::Accepted {
            pending_label,
            delay_ms,
        } => {
            if let Some(button) = form.query_selector("[type=\"submit\"]")? {
                button.set_attribute("disabled", "")?;
                button.set_text_content(Some(&pending_label));
            }

            let (document, form, flow) = (document.clone(), form.clone(), flow.clone());
            dom::set_timeout(delay_ms, move || {
                flow.borrow_mut().complete();
                dom::report(show_success(&document, &form, flow.borrow().options()));
            })?;
        }
        Submission::Ignored => {}
    }
    Ok(())
}

fn show_success(
    document: &Document,
    form: &HtmlFormElement,
    options: &ContactOptions,
) -> Result<(), JsValue> {
    form.style().set_property("display", "none")?;
    if let Some(success) = document.get_element_by_id(&options.success_id) {
        success.class_list().add_1(&options.success_class)?;
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use site_effects::contact::Stage;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const CONTACT_FIELDS: &str = r#"
        <div><input name="name" value=""></div>
        <div><input name="email" value="not-an-email"></div>
        <div><input name="phone" value=""></div>
        <div>
            <select name="service">
                <option value="">Choose</option>
                <option value="web">Web</option>
            </select>
        </div>
        <div><textarea name="message">Short</textarea></div>
        <button type="submit">Send</button>
    "#;

    fn mount(html: &str) -> (Document, HtmlFormElement) {
        let document = dom::document().unwrap();
        let form = document.create_element("form").unwrap();
        form.set_inner_html(html);
        document.body().unwrap().append_child(&form).unwrap();
        (document, form.dyn_into().unwrap())
    }

    fn dispatch(el: &Element, event: &str) {
        el.dispatch_event(&Event::new(event).unwrap()).unwrap();
    }

    fn message_after(el: &Element) -> Option<String> {
        el.next_element_sibling()
            .filter(|s| s.class_list().contains(ERROR_MESSAGE_CLASS))
            .and_then(|s| s.text_content())
    }

    fn set_value(el: &Element, value: &str) {
        js_sys::Reflect::set(el, &"value".into(), &value.into()).unwrap();
    }

    fn flow() -> Rc<RefCell<ContactFlow>> {
        Rc::new(RefCell::new(ContactFlow::new(ContactOptions::default())))
    }

    #[wasm_bindgen_test]
    fn show_error_marks_field_and_inserts_one_message() {
        let (document, form) = mount(CONTACT_FIELDS);
        let name = field(&form, "name").unwrap();

        show_error(&document, &name, "This field is required.").unwrap();
        show_error(&document, &name, "This field is required.").unwrap();

        assert!(name.class_list().contains(FIELD_ERROR_CLASS));
        assert_eq!(message_after(&name).as_deref(), Some("This field is required."));
        let parent = name.parent_element().unwrap();
        assert_eq!(
            dom::query_all_in(&parent, &format!(".{}", ERROR_MESSAGE_CLASS)).unwrap().len(),
            1
        );
        let span = name.next_element_sibling().unwrap();
        assert_eq!(span.tag_name(), "SPAN");
        form.remove();
    }

    #[wasm_bindgen_test]
    fn clear_errors_removes_classes_and_messages() {
        let (document, form) = mount(CONTACT_FIELDS);
        for name in ["name", "email"] {
            show_error(&document, &field(&form, name).unwrap(), "bad").unwrap();
        }

        clear_errors(&form).unwrap();

        assert!(dom::query_all_in(&form, &format!(".{}", FIELD_ERROR_CLASS)).unwrap().is_empty());
        assert!(dom::query_all_in(&form, &format!(".{}", ERROR_MESSAGE_CLASS)).unwrap().is_empty());
        form.remove();
    }

    #[wasm_bindgen_test]
    fn read_values_skips_fields_the_form_lacks() {
        let (_, form) = mount(r#"<input name="name" value="Asha"><input name="email" value="">"#);

        let values = read_values(&form, &RuleSet::contact_form());

        assert_eq!(values.len(), 2);
        assert_eq!(values.get("name"), Some("Asha"));
        assert_eq!(values.get("email"), Some(""));
        assert_eq!(values.get("phone"), None);
        form.remove();
    }

    #[wasm_bindgen_test]
    fn radio_group_reports_checked_value() {
        let (document, form) = mount(
            r#"<div>
                <input type="radio" name="plan" value="basic">
                <input type="radio" name="plan" value="pro">
            </div>"#,
        );
        let rules = RuleSet::new().field("plan", ["required"]).unwrap();

        assert_eq!(read_values(&form, &rules).get("plan"), Some(""));

        let first = field(&form, "plan").unwrap();
        assert_eq!(first.get_attribute("value").as_deref(), Some("basic"));

        init_live_clearing(&form, &rules).unwrap();
        show_error(&document, &first, "This field is required.").unwrap();

        let pro = form.query_selector(r#"input[value="pro"]"#).unwrap().unwrap();
        js_sys::Reflect::set(&pro, &"checked".into(), &true.into()).unwrap();
        dispatch(&pro, "input");

        assert_eq!(read_values(&form, &rules).get("plan"), Some("pro"));
        assert!(!first.class_list().contains(FIELD_ERROR_CLASS));
        assert_eq!(message_after(&first), None);
        form.remove();
    }

    #[wasm_bindgen_test]
    fn editing_a_field_clears_its_error() {
        let (document, form) = mount(CONTACT_FIELDS);
        init_live_clearing(&form, &RuleSet::contact_form()).unwrap();

        let name = field(&form, "name").unwrap();
        show_error(&document, &name, "This field is required.").unwrap();
        dispatch(&name, "input");
        assert!(!name.class_list().contains(FIELD_ERROR_CLASS));
        assert_eq!(message_after(&name), None);

        // Selects clear on change, not input
        let service = field(&form, "service").unwrap();
        show_error(&document, &service, "This field is required.").unwrap();
        dispatch(&service, "input");
        assert!(service.class_list().contains(FIELD_ERROR_CLASS));
        dispatch(&service, "change");
        assert!(!service.class_list().contains(FIELD_ERROR_CLASS));
        assert_eq!(message_after(&service), None);
        form.remove();
    }

    #[wasm_bindgen_test]
    fn rejected_submit_renders_each_error() {
        let (document, form) = mount(CONTACT_FIELDS);
        let flow = flow();

        on_submit(&document, &form, &flow).unwrap();

        let email = field(&form, "email").unwrap();
        assert_eq!(message_after(&email).as_deref(), Some("Enter a valid email address."));
        let name = field(&form, "name").unwrap();
        assert_eq!(message_after(&name).as_deref(), Some("This field is required."));
        let message = field(&form, "message").unwrap();
        assert_eq!(message_after(&message).as_deref(), Some("Must be at least 10 characters."));

        // Optional phone passes while empty
        let phone = field(&form, "phone").unwrap();
        assert!(!phone.class_list().contains(FIELD_ERROR_CLASS));

        let button = form.query_selector("[type=\"submit\"]").unwrap().unwrap();
        assert!(!button.has_attribute("disabled"));
        assert_eq!(flow.borrow().stage(), Stage::Editing);

        // A second attempt replaces, rather than stacks, the messages
        on_submit(&document, &form, &flow).unwrap();
        assert_eq!(
            dom::query_all_in(&form, &format!(".{}", ERROR_MESSAGE_CLASS)).unwrap().len(),
            4
        );
        form.remove();
    }

    #[wasm_bindgen_test]
    fn accepted_submit_disables_button_and_shows_label() {
        let (document, form) = mount(CONTACT_FIELDS);
        set_value(&field(&form, "name").unwrap(), "Asha Rao");
        set_value(&field(&form, "email").unwrap(), "asha@example.com");
        set_value(&field(&form, "service").unwrap(), "web");
        set_value(&field(&form, "message").unwrap(), "Need a new storefront.");
        let flow = flow();

        on_submit(&document, &form, &flow).unwrap();

        let button = form.query_selector("[type=\"submit\"]").unwrap().unwrap();
        assert!(button.has_attribute("disabled"));
        assert_eq!(button.text_content().as_deref(), Some("Sending…"));
        assert!(dom::query_all_in(&form, &format!(".{}", ERROR_MESSAGE_CLASS)).unwrap().is_empty());
        assert_eq!(flow.borrow().stage(), Stage::Sending);

        // Pending sends ignore further submits
        on_submit(&document, &form, &flow).unwrap();
        assert_eq!(flow.borrow().stage(), Stage::Sending);
        form.remove();
    }
}
