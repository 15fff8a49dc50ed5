//! モデル・距離指標の選択コンポーネント
//!
//! select要素にはname属性を付けない。値は送信時に
//! `model_name` / `distance_metric` として明示的に追加する。

use face_verify_common::{DistanceMetric, RecognitionModel};
use gloo::console;
use leptos::prelude::*;

#[component]
pub fn ModelSelector(
    model: ReadSignal<RecognitionModel>,
    set_model: WriteSignal<RecognitionModel>,
    metric: ReadSignal<DistanceMetric>,
    set_metric: WriteSignal<DistanceMetric>,
) -> impl IntoView {
    view! {
        <div class="settings-grid">
            <div class="form-group">
                <label for="model_name">"Recognition Model"</label>
                <select
                    id="model_name"
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<RecognitionModel>() {
                            Ok(value) => set_model.set(value),
                            Err(e) => console::warn!(e.to_string()),
                        }
                    }
                >
                    {RecognitionModel::ALL
                        .into_iter()
                        .map(|m| {
                            view! {
                                <option value=m.as_str() selected=move || model.get() == m>
                                    {m.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="distance_metric">"Distance Metric"</label>
                <select
                    id="distance_metric"
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<DistanceMetric>() {
                            Ok(value) => set_metric.set(value),
                            Err(e) => console::warn!(e.to_string()),
                        }
                    }
                >
                    {DistanceMetric::ALL
                        .into_iter()
                        .map(|m| {
                            view! {
                                <option value=m.as_str() selected=move || metric.get() == m>
                                    {m.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
