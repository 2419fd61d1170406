//! アクションボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn ActionButtons<FB, FA>(
    can_analyze: Memo<bool>,
    is_processing: Memo<bool>,
    on_browse: FB,
    on_analyze: FA,
) -> impl IntoView
where
    FB: Fn(()) + 'static + Clone,
    FA: Fn(()) + 'static + Clone,
{
    view! {
        <div class="action-buttons">
            <button
                class="btn btn-secondary"
                on:click={
                    let on_browse = on_browse.clone();
                    move |_| on_browse(())
                }
            >
                "Browse Files"
            </button>

            <button
                class="btn btn-primary"
                disabled=move || !can_analyze.get()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if is_processing.get() { "Analyzing..." } else { "Analyze Resume" }}
            </button>
        </div>
    }
}
