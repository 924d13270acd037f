//! Item Form Component
//!
//! Create/edit form for a single item.

use leptos::prelude::*;

use crate::form::{FormField, ItemForm};

/// (field, label, input type, placeholder)
const FIELDS: &[(FormField, &str, &str, &str)] = &[
    (FormField::Name, "Nombre del Artículo", "text", ""),
    (FormField::Description, "Descripción", "text", ""),
    (FormField::Price, "Precio", "number", ""),
    (FormField::Category, "Categoría", "text", ""),
    (FormField::Image, "URL de la Imagen", "text", "https://ejemplo.com/imagen.jpg"),
];

#[component]
pub fn ItemFormPanel(
    form: ReadSignal<ItemForm>,
    set_form: WriteSignal<ItemForm>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(());
    };

    view! {
        <form class="item-form" on:submit=on_submit>
            <p class="item-form-mode">
                {move || form.with(|f| match f.id {
                    Some(id) => format!("Editando artículo #{}", id),
                    None => "Nuevo artículo".to_string(),
                })}
            </p>
            {FIELDS.iter().map(|&(field, label, input_type, placeholder)| {
                let input_id = format!("item-{:?}", field).to_lowercase();
                view! {
                    <div class="mb-3">
                        <label class="form-label" for=input_id.clone()>{label}</label>
                        <input
                            type=input_type
                            id=input_id
                            class="form-control"
                            step=(field == FormField::Price).then_some("0.01")
                            placeholder=placeholder
                            required=matches!(field, FormField::Name | FormField::Price)
                            prop:value=move || form.with(|f| f.field(field).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.set_field(field, value));
                            }
                        />
                    </div>
                }
            }).collect_view()}
            <button type="submit" class="btn btn-primary me-2">"Guardar"</button>
            <button
                type="button"
                class="btn btn-secondary"
                on:click=move |_| set_form.set(ItemForm::default())
            >
                "Cancelar"
            </button>
        </form>
    }
}
