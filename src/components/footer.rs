//! Footer Component
//!
//! Page footer with a toggle for the recent-log diagnostics panel.

use leptos::prelude::*;
use rolling_logger::LogEntry;

/// Lines shown in the diagnostics panel
const DIAGNOSTIC_LINES: usize = 50;

#[component]
pub fn Footer() -> impl IntoView {
    let (entries, set_entries) = signal(Vec::<LogEntry>::new());
    let (open, set_open) = signal(false);

    let toggle = move |_| {
        if !open.get_untracked() {
            // Snapshot at open time; the buffer itself is not reactive
            let recent = rolling_logger::recent();
            let skip = recent.len().saturating_sub(DIAGNOSTIC_LINES);
            set_entries.set(recent.into_iter().skip(skip).collect());
        }
        set_open.update(|o| *o = !*o);
    };

    view! {
        <footer class="footer bg-dark text-light py-2 mt-auto">
            <div class="container d-flex justify-content-between">
                <span>"Talento-Tech Tabaka"</span>
                <button class="btn btn-outline-light btn-sm" on:click=toggle>
                    {move || if open.get() { "Ocultar diagnóstico" } else { "Diagnóstico" }}
                </button>
            </div>
            <Show when=move || open.get()>
                <pre class="container diagnostics small">
                    {move || entries.get().iter().map(LogEntry::line).collect::<Vec<_>>().join("\n")}
                </pre>
            </Show>
        </footer>
    }
}
