//! メインアプリケーションコンポーネント

use face_verify_common::{FormState, ImageSlot};
use gloo::console;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::predict::submit_prediction;
use crate::components::{
    error_panel::ErrorPanel,
    header::Header,
    image_input::{ImageInput, ImageInputProps},
    loading_indicator::LoadingIndicator,
    model_selector::ModelSelector,
    result_panel::ResultPanel,
};
use crate::config::load_config;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // アプリケーション状態
    let (form_state, set_form_state) = signal(FormState::new());
    let (model, set_model) = signal(config.default_model);
    let (metric, set_metric) = signal(config.default_metric);
    let form_ref = NodeRef::<html::Form>::new();
    let endpoint = config.predict_endpoint;

    // 送信ハンドラ
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(form) = form_ref.get() else {
            return;
        };

        // 送信中なら何もしない
        if let Some(Err(e)) = set_form_state.try_update(|state| state.begin_submit()) {
            console::debug!(format!("submit ignored: {}", e));
            return;
        }

        let endpoint = endpoint.clone();
        let model = model.get_untracked();
        let metric = metric.get_untracked();
        console::info!(format!("POST {} (model: {}, metric: {})", endpoint, model, metric));

        spawn_local(async move {
            let outcome = submit_prediction(&endpoint, &form, model, metric).await;
            console::info!(format!("prediction finished: {}", outcome.kind()));
            set_form_state.update(|state| state.finish(outcome));
        });
    };

    view! {
        <div class="container">
            <Header />

            <form id="similarityForm" node_ref=form_ref on:submit=on_submit>
                <div class="image-grid">
                    {ImageSlot::ALL
                        .into_iter()
                        .map(|slot| ImageInput(ImageInputProps::builder().slot(slot).build()))
                        .collect_view()}
                </div>

                <ModelSelector
                    model=model
                    set_model=set_model
                    metric=metric
                    set_metric=set_metric
                />

                <button
                    type="submit"
                    id="predictBtn"
                    class="btn btn-primary"
                    disabled=move || !form_state.with(FormState::submit_enabled)
                >
                    "Compare Faces"
                </button>
            </form>

            <Show when=move || form_state.with(FormState::is_loading)>
                <LoadingIndicator />
            </Show>

            {move || {
                form_state
                    .with(|state| state.result_view().cloned())
                    .map(|result| view! { <ResultPanel result=result /> })
            }}

            {move || {
                form_state
                    .with(|state| state.error_message().map(str::to_string))
                    .map(|message| view! { <ErrorPanel message=message /> })
            }}
        </div>
    }
}
