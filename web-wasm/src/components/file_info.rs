//! 選択中ファイル情報コンポーネント

use leptos::prelude::*;
use resume_screen_common::UploadedFile;

#[component]
pub fn FileInfo<F>(file: Memo<Option<UploadedFile>>, on_remove: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="file-info">
            {move || {
                file.get()
                    .map(|f| {
                        view! {
                            <div class="file-meta">
                                <div class="file-icon">"📄"</div>
                                <div>
                                    <p class="file-name">{f.name.clone()}</p>
                                    <p class="file-size">{format!("{:.2} MB", f.size_mb())}</p>
                                </div>
                            </div>
                        }
                    })
            }}
            <button
                class="btn btn-small btn-secondary"
                on:click={
                    let on_remove = on_remove.clone();
                    move |_| on_remove(())
                }
            >
                "Remove"
            </button>
        </div>
    }
}
