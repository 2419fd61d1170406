//! クライアントエラーバナーコンポーネント
//!
//! グローバル捕捉したランタイムエラーの表示。
//! 詳細の展開・クリップボードへのコピー・閉じる操作を持つ。

use leptos::prelude::*;

use crate::client_errors::ClientError;

#[component]
pub fn ClientErrorBanner<F>(
    error: ReadSignal<Option<ClientError>>,
    on_dismiss: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="client-error">
            <div class="client-error-row">
                <span class="error-icon">"⚠️"</span>
                <div class="client-error-text">
                    <div class="client-error-title">"Client-side error"</div>
                    <div class="client-error-message">
                        {move || error.get().map(|e| e.message)}
                    </div>
                </div>
                <button
                    class="btn btn-small btn-outline"
                    aria-label="Dismiss client error"
                    on:click={
                        let on_dismiss = on_dismiss.clone();
                        move |_| on_dismiss(())
                    }
                >
                    "Dismiss"
                </button>
            </div>

            {move || {
                error
                    .get()
                    .and_then(|e| e.details)
                    .map(|details| {
                        view! {
                            <details class="client-error-details">
                                <summary>"Show details"</summary>
                                <pre>{details.clone()}</pre>
                                <button
                                    class="btn btn-small btn-primary"
                                    on:click=move |_| copy_to_clipboard(&details)
                                >
                                    "Copy details"
                                </button>
                            </details>
                        }
                    })
            }}
        </div>
    }
}

/// クリップボードへコピー（結果は待たない）
fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}
