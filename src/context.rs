//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::AppConfig;

/// Which screen the shell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Catalog,
    ItemManagement,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// HTTP client bound to the configured base URL
    api: StoredValue<HttpApi, LocalStorage>,
    /// Current screen - read
    pub active_view: ReadSignal<ActiveView>,
    /// Current screen - write
    set_active_view: WriteSignal<ActiveView>,
}

impl AppContext {
    pub fn new(config: &AppConfig, active_view: (ReadSignal<ActiveView>, WriteSignal<ActiveView>)) -> Self {
        Self {
            api: StoredValue::new_local(HttpApi::new(config)),
            active_view: active_view.0,
            set_active_view: active_view.1,
        }
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    pub fn navigate(&self, view: ActiveView) {
        self.set_active_view.set(view);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
