//! Tabaka Storefront Entry Point

mod api;
mod app;
mod cart;
mod checkout;
mod components;
mod config;
mod context;
mod form;
mod item_admin;
mod models;
mod notify;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(rolling_logger::DEFAULT_CAPACITY, LevelFilter::Debug) {
        web_sys::console::error_1(&JsValue::from_str(&format!("logger init failed: {}", err)));
    }
    log::info!("[APP] Starting storefront");
    mount_to_body(App);
}
