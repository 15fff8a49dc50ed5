//! 結果パネルコンポーネント

use face_verify_common::ResultView;
use leptos::prelude::*;

#[component]
pub fn ResultPanel(result: ResultView) -> impl IntoView {
    let [distance, threshold, model, metric] = result.detail_lines().map(str::to_string);

    view! {
        <div id="result" class="result-panel">
            <p id="predictionText" class=result.verdict.css_class()>
                {result.verdict.text()}
            </p>
            <p id="distanceText">{distance}</p>
            <p id="thresholdText">{threshold}</p>
            <p id="modelText">{model}</p>
            <p id="metricText">{metric}</p>
        </div>
    }
}
