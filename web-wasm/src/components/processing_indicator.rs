//! 解析中インジケータコンポーネント

use leptos::prelude::*;

#[component]
pub fn ProcessingIndicator() -> impl IntoView {
    view! {
        <div class="processing">
            <div class="spinner"></div>
            <p class="processing-text">
                "Analyzing resume for skills, experience, and qualifications..."
            </p>
            <div class="processing-steps">
                <div class="processing-step">
                    <span class="pulse-dot"></span>
                    "Parsing document content"
                </div>
                <div class="processing-step">
                    <span class="pulse-dot delay-1"></span>
                    "Extracting key skills and experience"
                </div>
                <div class="processing-step">
                    <span class="pulse-dot delay-2"></span>
                    "Calculating compatibility scores"
                </div>
            </div>
        </div>
    }
}
