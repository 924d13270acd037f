//! Cart Panel Component
//!
//! Sticky footer of the catalog: running total, the cart line list with
//! quantity controls, and the checkout button.

use leptos::prelude::*;

use crate::cart::CartLine;
use crate::models::format_price;
use crate::store::{
    store_remove_line, store_set_quantity, store_total, CatalogStateStoreFields, CatalogStore,
};

#[component]
pub fn CartPanel(
    store: CatalogStore,
    #[prop(into)] on_checkout: Callback<()>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let total = Memo::new(move |_| store_total(&store));
    let line_count = move || store.cart().read().lines().len();

    view! {
        <div class="cart-panel d-flex justify-content-end sticky-bottom mt-4">
            <div class="btn-group dropup">
                <button class="btn btn-dark mb-2" disabled>
                    {move || format!("Precio Total: {}", format_price(total.get()))}
                </button>
                <button
                    class="btn btn-primary dropdown-toggle ms-1 mb-2"
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    {move || format!("Ir al carrito ({})", line_count())}
                </button>
                <Show when=move || open.get()>
                    <ul class="dropdown-menu show cart-lines w-100">
                        <Show when=move || line_count() == 0>
                            <li class="p-2 text-light">"El carrito está vacío."</li>
                        </Show>
                        <For
                            each=move || store.cart().read().lines().to_vec()
                            key=|line| line.item_id
                            children=move |line: CartLine| view! { <CartLineRow store=store item_id=line.item_id /> }
                        />
                    </ul>
                </Show>
            </div>
            <button class="btn btn-success ms-2 mb-2" on:click=move |_| on_checkout.run(())>
                "Finalizar Pedido"
            </button>
        </div>
    }
}

/// One cart line; quantity is read live so the keyed row is not rebuilt
#[component]
fn CartLineRow(store: CatalogStore, item_id: u32) -> impl IntoView {
    let name = store
        .items()
        .read_untracked()
        .iter()
        .find(|item| item.id == item_id)
        .map(|item| item.name.clone())
        .unwrap_or_else(|| format!("#{}", item_id));
    let quantity = move || store.cart().read().quantity_of(item_id).unwrap_or(0);
    let current = move || i64::from(store.cart().read_untracked().quantity_of(item_id).unwrap_or(0));

    view! {
        <li class="p-2 cart-line">
            <span class="list-inline-item">{name} " (x" {quantity} ")"</span>
            <div class="input-group mt-1">
                <button
                    class="btn btn-outline-secondary"
                    on:click=move |_| store_set_quantity(&store, item_id, current() - 1)
                >
                    "-"
                </button>
                <input type="text" class="form-control text-center" prop:value=move || quantity().to_string() readonly=true />
                <button
                    class="btn btn-outline-secondary"
                    on:click=move |_| store_set_quantity(&store, item_id, current() + 1)
                >
                    "+"
                </button>
                <button
                    class="btn btn-outline-danger"
                    on:click=move |_| store_remove_line(&store, item_id)
                >
                    "Quitar"
                </button>
            </div>
            <hr />
        </li>
    }
}
