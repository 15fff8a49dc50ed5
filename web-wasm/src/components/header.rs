//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Face Similarity Checker"</h1>
            <p class="text-muted">"Upload two photos to check whether they show the same person"</p>
        </header>
    }
}
