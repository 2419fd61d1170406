//! Resume Screening Common Library
//!
//! Web(WASM)フロントエンドと共有される型とロジック

pub mod analyzer;
pub mod error;
pub mod export;
pub mod state;
pub mod types;
pub mod upload;

pub use analyzer::{build_analysis, ScoreRange, ANALYSIS_DELAY_MS};
pub use error::{Error, Result};
pub use export::{export_file_name, to_pretty_json, EXPORT_MIME, SAVED_NOTICE_MS, STORAGE_KEY};
pub use state::{ScreeningPhase, ScreeningState};
pub use types::{ResumeAnalysis, ScoreCategory, ScoreTier};
pub use upload::{DocumentKind, UploadedFile, ACCEPT_EXTENSIONS, MAX_UPLOAD_BYTES};
