//! Catalog View
//!
//! Product grid plus the session cart. The store lives and dies with this
//! component, so leaving the view discards the cart.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::checkout;
use crate::components::{CartPanel, NotFound, ProductCard};
use crate::context::use_app_context;
use crate::models::Item;
use crate::notify;
use crate::store::{
    fetch_catalog, store_add_to_cart, store_apply_load, store_finish_checkout, CatalogState,
    CatalogStateStoreFields, LoadStatus,
};

#[component]
pub fn CatalogView() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(CatalogState::default());

    // Load items once on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let loaded = fetch_catalog(&api).await;
            store_apply_load(&store, loaded);
        });
    });

    let on_select = Callback::new(move |item: Item| {
        log::debug!("[CATALOG] Add item {} to cart", item.id);
        store_add_to_cart(&store, &item);
    });

    let on_checkout = Callback::new(move |_: ()| {
        let cart = store.cart().get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            let outcome = checkout::submit_order(&api, &cart, checkout::today()).await;
            notify::alert(store_finish_checkout(&store, outcome));
        });
    });

    view! {
        {move || match store.status().get() {
            LoadStatus::NotFound => view! { <NotFound /> }.into_any(),
            status => view! {
                <div class="catalog">
                    <div class="catalog-title">
                        <h1>"Catálogo de Productos"</h1>
                    </div>
                    {(status == LoadStatus::Loading).then(|| view! {
                        <p class="text-center text-muted">"Cargando productos..."</p>
                    })}
                    <div class="d-flex flex-wrap justify-content-center mt-3 product-grid">
                        <For
                            each=move || store.items().get()
                            key=|item| item.id
                            children=move |item| view! { <ProductCard item=item on_select=on_select /> }
                        />
                    </div>
                    <CartPanel store=store on_checkout=on_checkout />
                </div>
            }.into_any(),
        }}
    }
}
