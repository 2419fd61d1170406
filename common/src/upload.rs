//! アップロードファイルの検証
//!
//! MIMEタイプ許可リストとサイズ上限のチェック。
//! チェック順は「形式 → サイズ」で固定。

use crate::error::{Error, Result};

/// アップロード上限（5MB）
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// file input の accept 属性値
pub const ACCEPT_EXTENSIONS: &str = ".pdf,.doc,.docx";

/// 受け付ける文書形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
}

impl DocumentKind {
    /// MIMEタイプから判定（完全一致のみ）
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(DocumentKind::Pdf),
            "application/msword" => Some(DocumentKind::Doc),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(DocumentKind::Docx)
            }
            _ => None,
        }
    }
}

/// 検証済みアップロードファイル
///
/// `validate` を通った値のみ生成される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
    pub kind: DocumentKind,
}

impl UploadedFile {
    /// ファイルメタデータを検証して受理する
    ///
    /// 形式チェックが先、サイズチェックが後。
    /// 両方に違反するファイルは形式エラーになる。
    pub fn validate(name: &str, size_bytes: u64, mime: &str) -> Result<Self> {
        let kind = DocumentKind::from_mime(mime).ok_or(Error::InvalidType)?;

        if size_bytes > MAX_UPLOAD_BYTES {
            return Err(Error::TooLarge);
        }

        Ok(UploadedFile {
            name: name.to_string(),
            size_bytes,
            kind,
        })
    }

    /// 表示用のMB換算サイズ
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_pdf() {
        let file = UploadedFile::validate("resume.pdf", 1024, "application/pdf")
            .expect("PDFが受理されるはず");
        assert_eq!(file.kind, DocumentKind::Pdf);
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.size_bytes, 1024);
    }

    #[test]
    fn test_accept_doc_and_docx() {
        let doc = UploadedFile::validate("resume.doc", 2048, "application/msword")
            .expect("DOCが受理されるはず");
        assert_eq!(doc.kind, DocumentKind::Doc);

        let docx = UploadedFile::validate(
            "resume.docx",
            2048,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        )
        .expect("DOCXが受理されるはず");
        assert_eq!(docx.kind, DocumentKind::Docx);
    }

    #[test]
    fn test_reject_executable() {
        let err = UploadedFile::validate("resume.exe", 1024, "application/x-msdownload")
            .expect_err("実行ファイルは拒否されるはず");
        assert_eq!(err.to_string(), "Please upload a PDF, DOC, or DOCX file");
    }

    #[test]
    fn test_reject_empty_mime() {
        let err = UploadedFile::validate("resume", 1024, "").expect_err("空MIMEは拒否されるはず");
        assert!(matches!(err, Error::InvalidType));
    }

    #[test]
    fn test_reject_mime_with_parameters() {
        // パラメータ付きMIMEは完全一致しないので拒否
        let err = UploadedFile::validate("resume.pdf", 1024, "application/pdf; charset=utf-8")
            .expect_err("パラメータ付きMIMEは拒否されるはず");
        assert!(matches!(err, Error::InvalidType));
    }

    #[test]
    fn test_reject_oversize() {
        let six_mb = 6 * 1024 * 1024;
        let err = UploadedFile::validate("resume.pdf", six_mb, "application/pdf")
            .expect_err("6MBは拒否されるはず");
        assert_eq!(err.to_string(), "File size exceeds 5MB limit");
    }

    #[test]
    fn test_size_boundary() {
        // ちょうど 5,242,880 バイトは受理
        let file = UploadedFile::validate("resume.pdf", MAX_UPLOAD_BYTES, "application/pdf")
            .expect("上限ちょうどは受理されるはず");
        assert_eq!(file.size_bytes, 5_242_880);

        // 1バイト超過で拒否
        let err = UploadedFile::validate("resume.pdf", MAX_UPLOAD_BYTES + 1, "application/pdf")
            .expect_err("上限+1は拒否されるはず");
        assert!(matches!(err, Error::TooLarge));
    }

    #[test]
    fn test_type_checked_before_size() {
        // 形式・サイズ両方に違反 → 形式エラーが優先
        let err = UploadedFile::validate("movie.mp4", 100 * 1024 * 1024, "video/mp4")
            .expect_err("拒否されるはず");
        assert!(matches!(err, Error::InvalidType));
    }

    #[test]
    fn test_size_mb() {
        let file = UploadedFile::validate("resume.pdf", 2 * 1024 * 1024, "application/pdf")
            .expect("受理されるはず");
        assert!((file.size_mb() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_accept_extensions_constant() {
        assert_eq!(ACCEPT_EXTENSIONS, ".pdf,.doc,.docx");
    }
}
