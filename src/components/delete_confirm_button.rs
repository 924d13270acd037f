//! Delete Confirm Button Component
//!
//! Inline delete confirmation with confirm/cancel actions.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Seconds before an unanswered prompt reverts to the plain button
const CONFIRM_TIMEOUT_SECS: u64 = 4;

/// Inline delete confirmation button
///
/// Shows "Eliminar" initially. When clicked, shows "¿Eliminar?" with ✓/✗
/// buttons; the prompt reverts by itself if left unanswered.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);
    // Bumped on every prompt so a stale timer cannot close a newer one
    let (prompt_seq, set_prompt_seq) = signal(0u32);

    let open_prompt = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_confirm_delete.set(true);
        set_prompt_seq.update(|n| *n += 1);
        let seq = prompt_seq.get_untracked();
        spawn_local(async move {
            sleep(Duration::from_secs(CONFIRM_TIMEOUT_SECS)).await;
            if prompt_seq.try_get_untracked() == Some(seq) {
                set_confirm_delete.try_set(false);
            }
        });
    };

    view! {
        <Show when=move || !confirm_delete.get()>
            <button class="btn btn-danger btn-sm" on:click=open_prompt>
                "Eliminar"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"¿Eliminar?"</span>
                <button
                    class="btn btn-outline-danger btn-sm ms-1"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="btn btn-outline-secondary btn-sm ms-1"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
