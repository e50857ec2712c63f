use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use thaw::ConfigProvider;
use verdict::config::ClientConfig;
use verdict::state::Event;
use verdict::theme::Theme;

use crate::components::{
    Composer, ResultCard, SocialLinks, StatusPill, ThemeSwitcher, configured_links,
};
use crate::hooks::{use_detector, use_health_poller};
use crate::theme::{apply_theme, load_theme_from_storage, to_thaw_theme};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(load_theme_from_storage());
    let thaw_theme = RwSignal::new(to_thaw_theme(theme.get_untracked()));

    Effect::new(move |_| {
        let current = theme.get();
        apply_theme(current);
        thaw_theme.set(to_thaw_theme(current));
    });

    view! {
        <Title text="Fake News Detector"/>
        <ConfigProvider theme=thaw_theme>
            <Detector theme=theme show_footer=true/>
        </ConfigProvider>
    }
}

/// The detector screen.
///
/// The theme toggle and the footer are optional so the same component
/// serves both the full page and a bare embedded panel.
#[component]
pub fn Detector(
    /// Theme signal; the toggle is hidden when absent
    #[prop(optional)]
    theme: Option<RwSignal<Theme>>,
    /// Render the footer with social links
    #[prop(optional)]
    show_footer: bool,
) -> impl IntoView {
    let config = StoredValue::new(ClientConfig::for_web());
    let detector = use_detector(config);

    use_health_poller(
        config,
        Callback::new(move |online| detector.dispatch.run(Event::HealthChecked { online })),
    );

    let state = detector.state;
    let text = Signal::derive(move || state.with(|s| s.text.clone()));
    let result = Signal::derive(move || state.with(|s| s.result.clone()));
    let online = Signal::derive(move || state.with(|s| s.backend_online));

    view! {
        <div class="app">
            <header class="top-header">
                <div class="brand">
                    <span class="brand-name">"verdict"</span>
                    <span class="brand-version">{env!("CARGO_PKG_VERSION")}</span>
                </div>
                <div class="header-actions">
                    {theme.map(|theme| view! { <ThemeSwitcher theme/> })}
                </div>
            </header>

            <main class="panel">
                <div class="panel-header">
                    <div>
                        <h1>"Fake News Detector"</h1>
                        <p class="subtitle">"Paste an article and get a credibility verdict"</p>
                    </div>
                    <StatusPill online/>
                </div>

                <Composer value=text on_input=detector.on_text_change/>

                <button
                    type="button"
                    class="analyze-btn"
                    disabled=move || state.with(|s| s.button_disabled())
                    on:click=move |_| detector.on_analyze.run(())
                >
                    {move || state.with(|s| s.button_label())}
                </button>

                {move || {
                    state
                        .with(|s| s.offline_hint())
                        .map(|hint| view! { <p class="offline-hint">{hint}</p> })
                }}

                <ResultCard result/>
            </main>

            {show_footer
                .then(|| {
                    view! {
                        <footer class="footer">
                            <SocialLinks links=configured_links()/>
                            <p class="footer-copy">
                                "© " {
                                    let date = web_sys::js_sys::Date::new_0();
                                    date.get_full_year()
                                } " verdict v" {env!("CARGO_PKG_VERSION")}
                            </p>
                        </footer>
                    }
                })}
        </div>
    }
}
