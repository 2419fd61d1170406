//! メインアプリケーションコンポーネント

use gloo::timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use resume_screen_common::{
    build_analysis, ScreeningPhase, ScreeningState, ANALYSIS_DELAY_MS, SAVED_NOTICE_MS,
};

use crate::client_errors::{self, ClientError};
use crate::components::{
    action_buttons::ActionButtons, client_error_banner::ClientErrorBanner,
    error_banner::ErrorBanner, file_info::FileInfo, header::Header,
    processing_indicator::ProcessingIndicator, results_panel::ResultsPanel,
    upload_area::UploadArea,
};
use crate::download;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let state = RwSignal::new(ScreeningState::new());
    let (client_error, set_client_error) = signal(None::<ClientError>);

    // グローバルエラー捕捉（ドロップでリスナー解除）
    let _error_capture = StoredValue::new_local(client_errors::install(set_client_error));

    // 実行中タイマー（ドロップでキャンセル）
    let analysis_timer = StoredValue::new_local(None::<Timeout>);
    let saved_timer = StoredValue::new_local(None::<Timeout>);

    let input_ref = NodeRef::<html::Input>::new();

    // 派生状態
    let phase = Memo::new(move |_| state.with(|s| s.phase()));
    let file = Memo::new(move |_| state.with(|s| s.file().cloned()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(String::from)));
    let has_error = Memo::new(move |_| state.with(|s| s.error().is_some()));
    let analysis = Memo::new(move |_| state.with(|s| s.analysis().cloned()));
    let is_processing = Memo::new(move |_| state.with(|s| s.is_processing()));
    let is_saved = Memo::new(move |_| state.with(|s| s.is_saved()));
    let can_analyze = Memo::new(move |_| state.with(|s| s.can_analyze()));

    // ファイル選択（ダイアログ・ドロップ共通）
    let on_file = move |selected: web_sys::File| {
        state.update(|s| {
            s.select_file(&selected.name(), selected.size() as u64, &selected.type_());
        });
    };

    let on_browse = move |_: ()| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    // 解析開始ハンドラ（遅延後に結果を生成）
    let on_analyze = move |_: ()| {
        let started = state.try_update(|s| s.start_analysis()).unwrap_or(false);
        if !started {
            return;
        }

        let handle = Timeout::new(ANALYSIS_DELAY_MS, move || {
            let result = build_analysis(|| js_sys::Math::random());
            state.try_update(|s| s.finish_analysis(result));
        });
        analysis_timer.set_value(Some(handle));
    };

    // 初期状態へ戻すハンドラ
    let on_reset = move |_: ()| {
        analysis_timer.set_value(None);
        saved_timer.set_value(None);
        state.update(|s| s.reset());
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    // 結果保存ハンドラ（localStorage + JSONダウンロード）
    let on_save = move |_: ()| {
        let Some(result) = state.with_untracked(|s| s.analysis().cloned()) else {
            return;
        };

        match download::save_analysis(&result) {
            Ok(()) => {
                state.update(|s| {
                    s.mark_saved();
                });
                let handle = Timeout::new(SAVED_NOTICE_MS, move || {
                    state.try_update(|s| s.clear_saved());
                });
                saved_timer.set_value(Some(handle));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to save results: {e}").into());
                set_client_error.set(Some(ClientError::message_only(e.to_string())));
            }
        }
    };

    let on_dismiss_client_error = move |_: ()| set_client_error.set(None);

    view! {
        <div class="page">
            <div class="content">
                <Header />

                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">"Resume Analysis"</h2>
                        <p class="card-description">
                            "Upload a candidate's resume to receive an automated evaluation"
                        </p>
                    </div>

                    <Show when=move || client_error.get().is_some()>
                        <ClientErrorBanner error=client_error on_dismiss=on_dismiss_client_error />
                    </Show>

                    <div class="card-content">
                        <Show
                            when=move || phase.get() != ScreeningPhase::Complete
                            fallback=move || {
                                view! {
                                    <ResultsPanel
                                        analysis=analysis
                                        is_saved=is_saved
                                        on_reset=on_reset
                                        on_save=on_save
                                    />
                                }
                            }
                        >
                            <div class="upload-section">
                                <UploadArea
                                    file=file
                                    has_error=has_error
                                    input_ref=input_ref
                                    on_file=on_file
                                />

                                <Show when=move || has_error.get()>
                                    <ErrorBanner error=error />
                                </Show>

                                <Show when=move || phase.get() == ScreeningPhase::Selected>
                                    <FileInfo file=file on_remove=on_reset />
                                </Show>

                                <ActionButtons
                                    can_analyze=can_analyze
                                    is_processing=is_processing
                                    on_browse=on_browse
                                    on_analyze=on_analyze
                                />

                                <Show when=move || phase.get() == ScreeningPhase::Processing>
                                    <ProcessingIndicator />
                                </Show>
                            </div>
                        </Show>
                    </div>
                </div>

                <footer class="footer">
                    <p>"Resume Screening Assistant v1.0 • All analyses are simulated for demonstration purposes"</p>
                </footer>
            </div>
        </div>
    }
}
