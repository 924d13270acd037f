//! Navigation Bar Component

use leptos::prelude::*;

use crate::context::{use_app_context, ActiveView};

const LINKS: &[(ActiveView, &str)] = &[
    (ActiveView::Catalog, "Catálogo"),
    (ActiveView::ItemManagement, "Gestión Artículos"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark sticky-top">
            <div class="container-fluid">
                <a
                    class="navbar-brand"
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(ActiveView::Catalog);
                    }
                >
                    "Talento-Tech Tabaka"
                </a>
                <div class="navbar-nav ms-auto">
                    {LINKS.iter().map(|&(target, label)| {
                        let is_active = move || ctx.active_view.get() == target;
                        view! {
                            <a
                                href="#"
                                class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate(target);
                                }
                            >
                                {label}
                            </a>
                        }
                    }).collect_view()}
                </div>
            </div>
        </nav>
    }
}
