//! エラーパネルコンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div id="error" class="error-panel">
            <p id="errorText">{message}</p>
        </div>
    }
}
