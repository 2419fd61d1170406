//! 検証エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(error: Memo<Option<String>>) -> impl IntoView {
    view! {
        <div class="error-banner">
            <span class="error-icon">"⚠️"</span>
            <span>{move || error.get()}</span>
        </div>
    }
}
