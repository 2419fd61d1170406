//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// `InvalidType` / `TooLarge` の Display 文字列は
/// そのまま画面に表示されるメッセージになる。
#[derive(Error, Debug)]
pub enum Error {
    /// 許可リスト外のファイル形式
    #[error("Please upload a PDF, DOC, or DOCX file")]
    InvalidType,

    /// 5MBサイズ上限超過
    #[error("File size exceeds 5MB limit")]
    TooLarge,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// エクスポート失敗（シリアライズ・ダウンロード）
    #[error("Export error: {0}")]
    Export(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_display() {
        let error = Error::InvalidType;
        assert_eq!(format!("{}", error), "Please upload a PDF, DOC, or DOCX file");
    }

    #[test]
    fn test_too_large_display() {
        let error = Error::TooLarge;
        assert_eq!(format!("{}", error), "File size exceeds 5MB limit");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_export_display() {
        let error = Error::Export("download failed".to_string());
        assert_eq!(format!("{}", error), "Export error: download failed");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::TooLarge;
        let debug = format!("{:?}", error);
        assert!(debug.contains("TooLarge"));
    }
}
