//! # site-wasm
//!
//! WebAssembly bindings for the site.
//!
//! `initSite` attaches every page behavior described by a [`SiteConfig`];
//! `validateForm` and friends expose the same rule-based validation the
//! contact form uses, so other scripts can share it.
//!
//! ```javascript
//! import init, { initSite, validateForm } from './site_wasm.js';
//!
//! await init();
//! initSite();
//!
//! const result = validateForm(
//!     { name: 'A', email: 'bad' },
//!     { name: ['required', 'minLength:2'], email: ['required', 'email'] },
//! );
//! // { valid: false, errors: { name: 'Must be at least 2 characters.', ... } }
//! ```

mod accordion;
mod contact;
mod counters;
mod dom;
mod navbar;
mod portfolio;
mod reveal;
mod scroll;

use serde::Serialize;
use site_effects::SiteConfig;
use site_forms::{validators, FieldValues, FormValidator, Rule, RuleSet};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Attach the site behaviors.
///
/// `config` is an optional object shaped like `site.toml`; missing sections
/// keep their defaults. Behaviors whose elements are absent from the page
/// are skipped. Before the document has parsed, wiring waits for
/// `DOMContentLoaded`.
#[wasm_bindgen(js_name = initSite)]
pub fn init_site(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    let window = dom::window()?;
    let document = dom::document()?;

    if still_loading(&document) {
        let (ready_window, ready_document) = (window.clone(), document.clone());
        let mut config = Some(config);
        return dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(config) = config.take() {
                dom::report(wire(&ready_window, &ready_document, &config));
            }
        });
    }
    wire(&window, &document, &config)
}

fn still_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

fn parse_config(config: JsValue) -> Result<SiteConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SiteConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse site config: {}", e)))
}

fn wire(window: &Window, document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    navbar::init_scroll(window, document, &config.navbar)?;
    navbar::init_menu(document, &config.menu)?;
    scroll::init_smooth(window, document, &config.smooth_scroll)?;
    reveal::init(document, &config.reveal)?;
    counters::init(document, &config.counters)?;
    accordion::init(document, &config.faq)?;
    portfolio::init(document, &config.portfolio)?;
    contact::init(document, &config.contact)?;
    scroll::init_active_nav(window, document, &config.active_nav)?;
    if config.mark_current_page {
        scroll::mark_current_page(window, document, &config.active_nav)?;
    }
    Ok(())
}

/// The built-in configuration, as a plain object.
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<JsValue, JsValue> {
    to_js(&SiteConfig::default())
}

/// Validate a set of field values.
///
/// `rules` is either an array of `{ name, rules }` entries or an object
/// mapping field names to rule lists; both keep the declared field order.
///
/// # Returns
/// `{ valid, errors }`, with at most one message per field.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue, rules: JsValue) -> Result<JsValue, JsValue> {
    let values: FieldValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    let rules = parse_rules(rules)?;

    to_js(&FormValidator::global().validate(&values, &rules))
}

/// Validate one value against a rule list.
///
/// # Returns
/// The first failing message, or `undefined` when the value passes.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(value: &str, rules: JsValue) -> Result<Option<String>, JsValue> {
    let rules = parse_rule_list(rules)?;
    Ok(FormValidator::global().validate_field(value, &rules))
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(email: &str) -> bool {
    validators::is_valid_email(email)
}

#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone(phone: &str) -> bool {
    validators::is_valid_phone(phone)
}

fn parse_rules(rules: JsValue) -> Result<RuleSet, JsValue> {
    if js_sys::Array::is_array(&rules) {
        return serde_wasm_bindgen::from_value(rules)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)));
    }

    let object: js_sys::Object = rules
        .dyn_into()
        .map_err(|_| JsValue::from_str("rules must be an array or an object"))?;

    // Object.entries keeps insertion order, which decides the first error
    let mut set = RuleSet::new();
    for entry in js_sys::Object::entries(&object).iter() {
        let entry: js_sys::Array = entry.unchecked_into();
        let name = entry
            .get(0)
            .as_string()
            .ok_or_else(|| JsValue::from_str("field name must be a string"))?;
        let field_rules = parse_rule_list(entry.get(1))?;
        set.push(name, field_rules)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
    }
    Ok(set)
}

fn parse_rule_list(rules: JsValue) -> Result<Vec<Rule>, JsValue> {
    serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))
}

/// Plain objects rather than `Map`s, so results read naturally in JS.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn js(json: &str) -> JsValue {
        js_sys::JSON::parse(json).unwrap()
    }

    fn errors_of(result: &JsValue) -> js_sys::Object {
        js_sys::Reflect::get(result, &"errors".into()).unwrap().unchecked_into()
    }

    #[wasm_bindgen_test]
    fn validate_form_accepts_object_rules() {
        let result = validate_form(
            js(r#"{"name": "A", "email": "bad"}"#),
            js(r#"{"name": ["required", "minLength:2"], "email": ["required", "email"]}"#),
        )
        .unwrap();

        let valid = js_sys::Reflect::get(&result, &"valid".into()).unwrap();
        assert_eq!(valid.as_bool(), Some(false));

        let errors = errors_of(&result);
        assert_eq!(
            js_sys::Reflect::get(&errors, &"name".into()).unwrap().as_string().as_deref(),
            Some("Must be at least 2 characters.")
        );
        assert_eq!(
            js_sys::Reflect::get(&errors, &"email".into()).unwrap().as_string().as_deref(),
            Some("Enter a valid email address.")
        );
    }

    #[wasm_bindgen_test]
    fn validate_form_accepts_array_rules() {
        let result = validate_form(
            js(r#"{"phone": "9876543210"}"#),
            js(r#"[{"name": "phone", "rules": ["required", "phone"]}]"#),
        )
        .unwrap();

        let valid = js_sys::Reflect::get(&result, &"valid".into()).unwrap();
        assert_eq!(valid.as_bool(), Some(true));
        assert_eq!(js_sys::Object::keys(&errors_of(&result)).length(), 0);
    }

    #[wasm_bindgen_test]
    fn validate_form_rejects_bad_rule_arguments() {
        let result = validate_form(js(r#"{"name": "x"}"#), js(r#"{"name": ["minLength:abc"]}"#));
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn validate_field_returns_first_message() {
        assert_eq!(
            validate_field("", js(r#"["required", "email"]"#)).unwrap().as_deref(),
            Some("This field is required.")
        );
        assert_eq!(validate_field("", js(r#"["email"]"#)).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn format_checks() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("5876543210"));
        assert!(!is_valid_phone("12345"));
    }

    #[wasm_bindgen_test]
    fn default_config_round_trips() {
        let config = parse_config(default_config().unwrap()).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(parse_config(JsValue::UNDEFINED).unwrap(), SiteConfig::default());
    }

    #[wasm_bindgen_test]
    fn page_has_finished_parsing() {
        let document = dom::document().unwrap();
        assert_ne!(document.ready_state(), "");
        assert!(!still_loading(&document));
    }

    #[wasm_bindgen_test]
    fn init_site_tolerates_an_empty_page() {
        assert!(init_site(JsValue::UNDEFINED).is_ok());
    }
}
