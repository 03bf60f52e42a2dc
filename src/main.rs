mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Id of the element the app mounts into.
const MOUNT_ID: &str = "app";

fn main() {
    console_error_panic_hook::set_once();

    match document().get_element_by_id(MOUNT_ID) {
        Some(root) => mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget(),
        None => {
            utils::dom::log_warn(&format!("No #{} element, mounting to body", MOUNT_ID));
            mount_to_body(App);
        }
    }
}
