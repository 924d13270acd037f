//! Item Table Component

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{format_price, Item};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100";

#[component]
pub fn ItemTable(
    items: ReadSignal<Vec<Item>>,
    #[prop(into)] on_edit: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <table class="table table-bordered table-hover item-table">
            <thead class="table-dark">
                <tr>
                    <th>"ID"</th>
                    <th>"Nombre"</th>
                    <th>"Descripción"</th>
                    <th>"Precio"</th>
                    <th>"Categoría"</th>
                    <th>"Imagen"</th>
                    <th>"Acciones"</th>
                </tr>
            </thead>
            <tbody>
                {move || items.get().into_iter().map(|item| {
                    let id = item.id;
                    let name = item.name.clone();
                    let image = item.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
                    view! {
                        <tr>
                            <td>{id}</td>
                            <td>{name.clone()}</td>
                            <td>{item.description.unwrap_or_default()}</td>
                            <td>{format_price(item.price)}</td>
                            <td>{item.category.unwrap_or_default()}</td>
                            <td>
                                <img src=image alt=name class="item-thumb" />
                            </td>
                            <td>
                                <button
                                    class="btn btn-warning btn-sm me-2"
                                    on:click=move |_| on_edit.run(id)
                                >
                                    "Editar"
                                </button>
                                <DeleteConfirmButton on_confirm=move |_| on_delete.run(id) />
                            </td>
                        </tr>
                    }
                }).collect_view()}
                <Show when=move || items.with(|list| list.is_empty())>
                    <tr>
                        <td colspan="7" class="text-center">"No hay artículos para mostrar."</td>
                    </tr>
                </Show>
            </tbody>
        </table>
    }
}
