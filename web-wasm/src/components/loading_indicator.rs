//! 読み込み中表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div id="loading" class="loading">
            <div class="spinner" />
            <p>"Processing..."</p>
        </div>
    }
}
