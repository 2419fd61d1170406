//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Resume Screening Assistant"</h1>
            <p class="header-description">
                "Upload resumes for instant analysis. Get percentage-based scores and detailed insights to help evaluate candidates efficiently."
            </p>
        </header>
    }
}
