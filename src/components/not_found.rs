//! Terminal error display for the catalog.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center mt-5 not-found">
            <h1>"Recurso No Encontrado"</h1>
            <img src="/images/error.png" alt="Error" class="not-found-image" />
        </div>
    }
}
