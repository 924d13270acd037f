//! Item Management View
//!
//! Admin screen: one create/edit form and the table of registered items.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ItemFormPanel, ItemTable};
use crate::context::use_app_context;
use crate::form::ItemForm;
use crate::item_admin::{self, SaveError};
use crate::models::Item;
use crate::notify;

#[component]
pub fn ItemManagement() -> impl IntoView {
    let ctx = use_app_context();
    let (items, set_items) = signal(Vec::<Item>::new());
    let (form, set_form) = signal(ItemForm::default());

    // Initial list load; failures keep the (empty) table
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match item_admin::refresh_items(&api).await {
                Ok(loaded) => set_items.set(loaded),
                Err(err) => log::error!("[ADMIN] Failed to list items: {}", err),
            }
        });
    });

    let on_save = Callback::new(move |_: ()| {
        let current = form.get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            match item_admin::save_item(&api, &current).await {
                Ok(loaded) => {
                    set_form.set(ItemForm::default());
                    set_items.set(loaded);
                }
                Err(err) => {
                    match &err {
                        SaveError::Invalid(reason) => log::warn!("[ADMIN] Rejected form: {}", reason),
                        SaveError::Api(e) => log::error!("[ADMIN] Failed to save item: {}", e),
                        SaveError::Refresh(e) => {
                            log::error!("[ADMIN] Saved, but failed to reload items: {}", e);
                            set_form.set(ItemForm::default());
                        }
                    }
                    if let Some(message) = err.user_message() {
                        notify::alert(message);
                    }
                }
            }
        });
    });

    let on_edit = Callback::new(move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            match item_admin::edit_item(&api, id).await {
                Ok(loaded) => set_form.set(loaded),
                Err(err) => log::error!("[ADMIN] Failed to fetch item {}: {}", id, err),
            }
        });
    });

    let on_delete = Callback::new(move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            match item_admin::delete_item(&api, id).await {
                Ok(loaded) => set_items.set(loaded),
                Err(err) => log::error!("[ADMIN] Failed to delete item {}: {}", id, err),
            }
        });
    });

    view! {
        <div class="container item-management">
            <h2 class="section-title">"Gestión de Artículos"</h2>
            <ItemFormPanel form=form set_form=set_form on_save=on_save />
            <h3>"Artículos Registrados"</h3>
            <ItemTable items=items on_edit=on_edit on_delete=on_delete />
        </div>
    }
}
