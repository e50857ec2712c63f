use leptos::prelude::*;
use verdict::theme::Theme;

#[component]
pub fn ThemeSwitcher(
    /// Current theme signal
    theme: RwSignal<Theme>,
) -> impl IntoView {
    let toggle_theme = move |_| theme.update(|t| *t = t.toggled());

    let is_light = move || theme.get().is_light();

    view! {
        <button
            type="button"
            class="theme-toggle"
            on:click=toggle_theme
            aria-label="Toggle light and dark theme"
            title=move || if is_light() { "Switch to dark mode" } else { "Switch to light mode" }
        >
            <span class="theme-icon" aria-hidden="true">
                {move || if is_light() { "☀️" } else { "🌙" }}
            </span>
        </button>
    }
}
