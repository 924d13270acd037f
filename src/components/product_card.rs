//! Product Card Component

use leptos::prelude::*;

use crate::models::{format_price, Item};

/// One catalog card with a "Seleccionar" action
#[component]
pub fn ProductCard(
    item: Item,
    #[prop(into)] on_select: Callback<Item>,
) -> impl IntoView {
    let image = item.image.clone().unwrap_or_default();
    let name = item.name.clone();
    let description = item.description.clone().unwrap_or_default();
    let price = format_price(item.price);

    view! {
        <div class="card product-card">
            <img src=image class="card-img-top" alt=name.clone() />
            <div class="card-body">
                <h5 class="card-title">{name}</h5>
                <p class="card-text">{description}</p>
                <p class="card-text">
                    <small class="text-muted"><strong>"Precio: "</strong>{price}</small>
                </p>
                <div class="d-flex justify-content-center align-items-center">
                    <button
                        class="btn btn-dark w-50 ms-1 mb-2"
                        on:click=move |_| on_select.run(item.clone())
                    >
                        "Seleccionar"
                    </button>
                </div>
            </div>
        </div>
    }
}
