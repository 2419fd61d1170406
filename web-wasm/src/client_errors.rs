//! グローバルエラー捕捉
//!
//! window の error / unhandledrejection イベントを監視して
//! 画面上部のバナー表示に流す。ハンドルのドロップでリスナーは解除される。

use gloo::events::EventListener;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ErrorEvent, PromiseRejectionEvent};

/// 捕捉したクライアントエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub message: String,
    pub details: Option<String>,
}

impl ClientError {
    /// 詳細なしのエラー（保存失敗など内部で組み立てる場合）
    pub fn message_only(message: String) -> Self {
        ClientError {
            message,
            details: None,
        }
    }
}

/// 監視ハンドル
///
/// ドロップすると両リスナーが window から外れる。
pub struct ErrorCapture {
    _error: EventListener,
    _rejection: EventListener,
}

/// window にエラーリスナーを登録する
pub fn install(set_error: WriteSignal<Option<ClientError>>) -> Option<ErrorCapture> {
    let window = web_sys::window()?;

    let on_error = EventListener::new(&window, "error", move |event| {
        let Some(event) = event.dyn_ref::<ErrorEvent>() else {
            return;
        };
        let raw = event.error();
        web_sys::console::error_2(&JsValue::from_str("Captured error:"), &raw);

        let message = non_empty(event.message())
            .unwrap_or_else(|| "An unexpected error occurred".to_string());
        let details = error_event_details(&raw, &message);
        let _ = set_error.try_set(Some(ClientError {
            message,
            details: Some(details),
        }));
    });

    let on_rejection = EventListener::new(&window, "unhandledrejection", move |event| {
        let Some(event) = event.dyn_ref::<PromiseRejectionEvent>() else {
            return;
        };
        let reason = event.reason();
        web_sys::console::error_2(&JsValue::from_str("Captured unhandled rejection:"), &reason);

        let _ = set_error.try_set(Some(ClientError {
            message: rejection_message(&reason),
            details: Some(rejection_details(&reason)),
        }));
    });

    Some(ErrorCapture {
        _error: on_error,
        _rejection: on_rejection,
    })
}

/// エラーイベントの詳細文字列（stack → message → 文字列化の順）
fn error_event_details(raw: &JsValue, message: &str) -> String {
    if let Some(stack) = error_stack(raw) {
        return stack;
    }
    if let Some(msg) = error_message(raw) {
        return msg;
    }
    if raw.is_null() || raw.is_undefined() {
        message.to_string()
    } else {
        stringify(raw)
    }
}

fn rejection_message(reason: &JsValue) -> String {
    if reason.is_null() || reason.is_undefined() {
        return "Unhandled Promise rejection".to_string();
    }
    if let Some(msg) = error_message(reason) {
        return msg;
    }
    non_empty(stringify(reason)).unwrap_or_else(|| "Unhandled Promise rejection".to_string())
}

fn rejection_details(reason: &JsValue) -> String {
    error_stack(reason).unwrap_or_else(|| stringify(reason))
}

fn error_message(value: &JsValue) -> Option<String> {
    let err = value.dyn_ref::<js_sys::Error>()?;
    non_empty(String::from(err.message()))
}

/// Error.stack は標準外プロパティなので Reflect で取る
fn error_stack(value: &JsValue) -> Option<String> {
    let err = value.dyn_ref::<js_sys::Error>()?;
    let stack = js_sys::Reflect::get(err.as_ref(), &JsValue::from_str("stack")).ok()?;
    stack.as_string().and_then(non_empty)
}

fn stringify(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::ErrorEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_error_event(message: &str) {
        let init = ErrorEventInit::new();
        init.set_message(message);
        let event = ErrorEvent::new_with_event_init_dict("error", &init)
            .expect("event creation failed");
        web_sys::window()
            .expect("window should exist")
            .dispatch_event(&event)
            .expect("dispatch failed");
    }

    #[wasm_bindgen_test]
    fn wasm_capture_reports_dispatched_error() {
        let (error, set_error) = signal(None::<ClientError>);
        let capture = install(set_error).expect("install should succeed");

        dispatch_error_event("boom");

        let captured = error.get_untracked().expect("error should be captured");
        assert_eq!(captured.message, "boom");
        assert_eq!(captured.details.as_deref(), Some("boom"));
        drop(capture);
    }

    #[wasm_bindgen_test]
    fn wasm_capture_uses_fallback_message() {
        let (error, set_error) = signal(None::<ClientError>);
        let _capture = install(set_error).expect("install should succeed");

        dispatch_error_event("");

        let captured = error.get_untracked().expect("error should be captured");
        assert_eq!(captured.message, "An unexpected error occurred");
    }

    #[wasm_bindgen_test]
    fn wasm_dropped_capture_stops_reporting() {
        let (error, set_error) = signal(None::<ClientError>);
        let capture = install(set_error).expect("install should succeed");
        drop(capture);

        dispatch_error_event("after drop");

        assert!(error.get_untracked().is_none());
    }
}
