use leptos::prelude::*;
use verdict::state::{char_count, word_count};

/// News text input with live word and character counters.
#[component]
pub fn Composer(
    /// The current text
    value: Signal<String>,
    /// Called on every input event
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="composer">
            <label for="news-input">"News Content"</label>
            <textarea
                id="news-input"
                placeholder="Paste or type a news article snippet here..."
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <div class="composer-meta">
                <span>{move || value.with(|text| word_count(text))} " words"</span>
                <span>{move || value.with(|text| char_count(text))} " characters"</span>
            </div>
        </section>
    }
}
