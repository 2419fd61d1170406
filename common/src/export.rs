//! 解析結果のエクスポート
//!
//! JSON整形・保存キー・ダウンロードファイル名の決定。
//! ブラウザAPI呼び出し（Blob生成・localStorage書き込み）は
//! web-wasm 側が担当する。

use crate::error::Result;
use crate::types::ResumeAnalysis;

/// localStorage の保存キー
pub const STORAGE_KEY: &str = "resumeAnalysis";

/// ダウンロードBlobのMIMEタイプ
pub const EXPORT_MIME: &str = "application/json";

/// 「Saved」表示の継続時間（ミリ秒）
pub const SAVED_NOTICE_MS: u32 = 3_000;

/// 解析結果を整形済みJSONにする（インデント2）
pub fn to_pretty_json(analysis: &ResumeAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

/// ダウンロードファイル名を組み立てる
///
/// ISO8601タイムスタンプ中の `:` と `.` は `-` に置換する
/// （ファイル名として安全にするため）。
pub fn export_file_name(timestamp_iso: &str) -> String {
    let safe = timestamp_iso.replace([':', '.'], "-");
    format!("resume-analysis-{safe}.json")
}
