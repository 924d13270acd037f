//! Tabaka Storefront App
//!
//! Shell with navigation bar, the active view and the footer.

use leptos::prelude::*;

use crate::components::{CatalogView, Footer, ItemManagement, NavBar};
use crate::config::AppConfig;
use crate::context::{ActiveView, AppContext};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    let (active_view, set_active_view) = signal(ActiveView::default());

    // Provide context to all children
    provide_context(AppContext::new(&config, (active_view, set_active_view)));

    view! {
        <div class="d-flex flex-column min-vh-100">
            <NavBar />

            // Switching views unmounts the previous one, dropping its state
            <main class="flex-grow-1">
                {move || match active_view.get() {
                    ActiveView::Catalog => view! { <CatalogView /> }.into_any(),
                    ActiveView::ItemManagement => view! { <ItemManagement /> }.into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}
