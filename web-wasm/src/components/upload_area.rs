//! アップロードエリアコンポーネント

use leptos::html;
use leptos::prelude::*;
use resume_screen_common::{UploadedFile, ACCEPT_EXTENSIONS};
use web_sys::DragEvent;

#[component]
pub fn UploadArea<F>(
    file: Memo<Option<UploadedFile>>,
    has_error: Memo<bool>,
    input_ref: NodeRef<html::Input>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(web_sys::File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = {
        let on_file = on_file.clone();
        move |_: web_sys::Event| {
            let Some(input) = input_ref.get() else {
                return;
            };
            if let Some(selected) = input.files().and_then(|files| files.get(0)) {
                on_file(selected);
            }
        }
    };

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(selected) = dt.files().and_then(|files| files.get(0)) {
                    on_file(selected);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // エリアクリックでファイル選択ダイアログを開く
    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if has_error.get() {
                    classes.push("error");
                }
                classes.join(" ")
            }
            on:click=on_click
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <div class="upload-icon">"📄"</div>
            <p class="upload-title">
                {move || {
                    file.get()
                        .map(|f| f.name)
                        .unwrap_or_else(|| "Drag & drop your resume here".to_string())
                }}
            </p>
            <p class="upload-hint">
                {move || {
                    if file.get().is_some() {
                        "Click to change file"
                    } else {
                        "or click to browse files"
                    }
                }}
            </p>
            <p class="upload-note">"Supports PDF, DOC, DOCX (Max 5MB)"</p>
            <input
                type="file"
                class="file-input"
                accept=ACCEPT_EXTENSIONS
                node_ref=input_ref
                on:change=on_change
            />
        </div>
    }
}
