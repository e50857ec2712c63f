use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use verdict::config::ClientConfig;
use verdict::state::{AppState, Effect, Event};

use crate::api;

/// Return type for use_detector hook
#[derive(Clone, Copy)]
pub struct UseDetectorReturn {
    pub state: RwSignal<AppState>,
    pub dispatch: Callback<Event>,
    pub on_text_change: Callback<String>,
    pub on_analyze: Callback<()>,
}

/// Hook owning the detector state.
///
/// Every change goes through the shared reducer; effects it asks for
/// (the predict call, the failure alert) are carried out here.
///
/// # Example
/// ```rust
/// let detector = use_detector(config);
///
/// view! {
///     <Composer value=text on_input=detector.on_text_change/>
///     <button on:click=move |_| detector.on_analyze.run(())>"Analyze News"</button>
/// }
/// ```
pub fn use_detector(config: StoredValue<ClientConfig>) -> UseDetectorReturn {
    let state = RwSignal::new(AppState::default());

    let dispatch = Callback::new(move |event: Event| dispatch_event(state, config, event));

    let on_text_change = Callback::new(move |text: String| {
        dispatch_event(state, config, Event::TextChanged(text));
    });

    let on_analyze = Callback::new(move |_| {
        dispatch_event(state, config, Event::AnalyzeRequested);
    });

    UseDetectorReturn {
        state,
        dispatch,
        on_text_change,
        on_analyze,
    }
}

fn dispatch_event(state: RwSignal<AppState>, config: StoredValue<ClientConfig>, event: Event) {
    let mut effect = Effect::None;
    state.update(|s| effect = s.apply(event));

    match effect {
        Effect::None => {}
        Effect::SubmitAnalysis { text } => {
            spawn_local(async move {
                let client_config = config.get_value();
                let event = match api::predict(&client_config, &text).await {
                    Ok(result) => Event::AnalyzeSucceeded(result),
                    Err(e) => {
                        warn!("analysis request failed: {}", e);
                        Event::AnalyzeFailed {
                            reason: e.to_string(),
                        }
                    }
                };
                dispatch_event(state, config, event);
            });
        }
        Effect::Alert(message) => {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        }
    }
}
