use leptos::prelude::*;
use thaw::*;
use verdict::state::{status_class, status_label};

/// Backend availability indicator
#[component]
pub fn StatusPill(online: Signal<bool>) -> impl IntoView {
    view! {
        <Tooltip content=move || {
            if online.get() { "Classifier answered the last health check" } else { "Classifier did not respond" }
        }>
            <div class=move || format!("status-pill {}", status_class(online.get()))>
                <span class="status-dot"></span>
                <span>{move || status_label(online.get())}</span>
            </div>
        </Tooltip>
    }
}
