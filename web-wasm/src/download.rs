//! 解析結果の保存
//!
//! localStorage への書き込みと JSON ファイルダウンロードを行う。
//! localStorage が使えない環境では書き込みを黙ってスキップする。

use resume_screen_common::{
    export_file_name, to_pretty_json, Error, ResumeAnalysis, Result, EXPORT_MIME, STORAGE_KEY,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// 解析結果を localStorage に書き、JSONファイルとしてダウンロードする
pub fn save_analysis(analysis: &ResumeAnalysis) -> Result<()> {
    let json = to_pretty_json(analysis)?;
    store_local(&json);
    trigger_download(&json)?;
    Ok(())
}

/// localStorage へ保存（利用不可・書き込み失敗は無視）
fn store_local(json: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, json);
        }
    }
}

/// JSON文字列から application/json の Blob を作る
fn json_blob(json: &str) -> Result<Blob> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(json));

    let options = BlobPropertyBag::new();
    options.set_type(EXPORT_MIME);

    Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| Error::Export(format!("Blob creation failed: {e:?}")))
}

/// 一時アンカー経由でダウンロードを発火する
fn trigger_download(json: &str) -> Result<()> {
    let blob = json_blob(json)?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| Error::Export(format!("URL creation failed: {e:?}")))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Export("document unavailable".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| Error::Export(format!("anchor creation failed: {e:?}")))?
        .dyn_into()
        .map_err(|_| Error::Export("anchor cast failed".to_string()))?;

    anchor.set_href(&url);
    anchor.set_download(&export_file_name(&timestamp()));

    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
    }
    anchor.click();
    anchor.remove();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

/// 現在時刻のISO8601文字列
fn timestamp() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use resume_screen_common::build_analysis;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_store_local_roundtrip() {
        let analysis = build_analysis(|| 0.5);
        let json = to_pretty_json(&analysis).expect("JSON serialization failed");
        store_local(&json);

        let storage = web_sys::window()
            .expect("window should exist")
            .local_storage()
            .expect("localStorage access failed")
            .expect("localStorage should exist");
        let stored = storage
            .get_item(STORAGE_KEY)
            .expect("get_item failed")
            .expect("stored value missing");
        assert_eq!(stored, json);

        let restored: ResumeAnalysis =
            serde_json::from_str(&stored).expect("stored JSON should parse");
        assert_eq!(restored, analysis);
    }

    #[wasm_bindgen_test]
    fn wasm_json_blob_has_json_mime() {
        let blob = json_blob("{}").expect("blob creation failed");
        assert_eq!(blob.type_(), EXPORT_MIME);
        assert_eq!(blob.size(), 2.0);
    }

    #[wasm_bindgen_test]
    fn wasm_timestamp_is_iso8601() {
        let ts = timestamp();
        // 例: 2024-01-15T10:30:00.000Z
        assert!(ts.ends_with('Z'));
        assert!(ts.contains('T'));
    }
}
