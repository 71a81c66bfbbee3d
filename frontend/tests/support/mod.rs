// Shared helpers for the browser component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::JsCast;
use yew::platform::time::sleep;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let the Yew scheduler flush pending renders.
pub async fn settle() {
    sleep(Duration::ZERO).await;
}

pub fn select_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let list = root.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|node| node.dyn_into::<web_sys::Element>().unwrap())
        .collect()
}

pub fn text(el: &web_sys::Element) -> String {
    el.text_content().unwrap_or_default().trim().to_string()
}

pub fn click(el: &web_sys::Element) {
    el.clone().dyn_into::<web_sys::HtmlElement>().unwrap().click();
}

/// `true` for every answer region that is currently visible.
pub fn answers_visible(root: &web_sys::Element) -> Vec<bool> {
    select_all(root, ".faq-answer")
        .iter()
        .map(|answer| !answer.has_attribute("hidden"))
        .collect()
}

pub fn cta_hrefs(root: &web_sys::Element) -> Vec<String> {
    select_all(root, "a.cta-button")
        .iter()
        .map(|a| a.get_attribute("href").unwrap_or_default())
        .collect()
}

/// Set `window.__APP_CONFIG` with the given contact recipient.
pub fn inject_recipient(recipient: &str) {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"contactRecipient".into(), &recipient.into()).unwrap();
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &config).unwrap();
}

/// Same as [`inject_recipient`], but with the recipient as a JS number.
pub fn inject_recipient_number(recipient: f64) {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"contactRecipient".into(), &recipient.into()).unwrap();
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &config).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
