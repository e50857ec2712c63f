use leptos::prelude::*;
use verdict::analysis::AnalysisResult;

/// Verdict card, rendered only once a result exists.
#[component]
pub fn ResultCard(result: Signal<Option<AnalysisResult>>) -> impl IntoView {
    move || {
        result.get().map(|result| {
            let display = result.probability_display();
            let class = format!("result-card {}", result.verdict().css_class());

            view! {
                <div class="result-stage">
                    <div class=class>
                        <p class="result-label">"Analysis Result"</p>
                        <h2>{result.prediction.clone()}</h2>
                        <div class="probability-block">
                            <p class="confidence">{display.to_string()}</p>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
