//! 画面状態の遷移ロジック
//!
//! アップロード → 解析中 → 結果表示 の一連の流れを
//! UI フレームワークから切り離して管理する。
//! 各遷移メソッドは成立したかどうかを bool で返す。

use crate::types::ResumeAnalysis;
use crate::upload::UploadedFile;

/// 画面フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningPhase {
    /// 初期状態（ファイル未選択）
    Idle,
    /// 検証済みファイル選択済み
    Selected,
    /// 解析シミュレーション実行中
    Processing,
    /// 結果表示中
    Complete,
}

/// スクリーニング画面の状態
///
/// フィールドは非公開。遷移メソッド経由でのみ変化する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreeningState {
    file: Option<UploadedFile>,
    processing: bool,
    analysis: Option<ResumeAnalysis>,
    error: Option<String>,
    saved: bool,
}

impl ScreeningState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル選択（選択ダイアログ・ドロップ共通）
    ///
    /// 先に前回のエラーと解析結果をクリアしてから検証する。
    /// 検証失敗時はエラーメッセージを保持し、選択済みファイルは変更しない。
    pub fn select_file(&mut self, name: &str, size_bytes: u64, mime: &str) -> bool {
        self.error = None;
        self.analysis = None;

        match UploadedFile::validate(name, size_bytes, mime) {
            Ok(file) => {
                self.file = Some(file);
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// 解析開始
    ///
    /// ファイル未選択・解析中の二重起動は no-op。
    pub fn start_analysis(&mut self) -> bool {
        if self.file.is_none() || self.processing {
            return false;
        }
        self.processing = true;
        true
    }

    /// 解析完了（タイマー満了時に呼ばれる）
    ///
    /// 解析中でなければ無視する（リセット後に届いた完了通知など）。
    pub fn finish_analysis(&mut self, analysis: ResumeAnalysis) -> bool {
        if !self.processing {
            return false;
        }
        self.analysis = Some(analysis);
        self.processing = false;
        true
    }

    /// 初期状態に戻す
    pub fn reset(&mut self) {
        self.file = None;
        self.processing = false;
        self.analysis = None;
        self.error = None;
        self.saved = false;
    }

    /// 保存済み表示を立てる（結果がなければ no-op）
    pub fn mark_saved(&mut self) -> bool {
        if self.analysis.is_none() {
            return false;
        }
        self.saved = true;
        true
    }

    /// 保存済み表示を消す（通知タイマー満了時）
    pub fn clear_saved(&mut self) {
        self.saved = false;
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn analysis(&self) -> Option<&ResumeAnalysis> {
        self.analysis.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// 現在のフェーズ
    pub fn phase(&self) -> ScreeningPhase {
        if self.processing {
            ScreeningPhase::Processing
        } else if self.analysis.is_some() {
            ScreeningPhase::Complete
        } else if self.file.is_some() {
            ScreeningPhase::Selected
        } else {
            ScreeningPhase::Idle
        }
    }

    /// 解析開始ボタンが押せるか
    pub fn can_analyze(&self) -> bool {
        self.file.is_some() && !self.processing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::build_analysis;

    fn select_valid(state: &mut ScreeningState) {
        assert!(state.select_file("resume.pdf", 1024, "application/pdf"));
    }

    fn sample_analysis() -> ResumeAnalysis {
        build_analysis(|| 0.5)
    }

    #[test]
    fn test_initial_state() {
        let state = ScreeningState::new();
        assert_eq!(state.phase(), ScreeningPhase::Idle);
        assert!(state.file().is_none());
        assert!(state.analysis().is_none());
        assert!(state.error().is_none());
        assert!(!state.is_processing());
        assert!(!state.is_saved());
        assert!(!state.can_analyze());
    }

    #[test]
    fn test_select_valid_file() {
        let mut state = ScreeningState::new();
        select_valid(&mut state);
        assert_eq!(state.phase(), ScreeningPhase::Selected);
        assert_eq!(state.file().map(|f| f.name.as_str()), Some("resume.pdf"));
        assert!(state.error().is_none());
        assert!(state.can_analyze());
    }

    #[test]
    fn test_select_invalid_type_sets_error() {
        let mut state = ScreeningState::new();
        assert!(!state.select_file("resume.exe", 1024, "application/x-msdownload"));
        assert_eq!(state.error(), Some("Please upload a PDF, DOC, or DOCX file"));
        assert!(state.file().is_none());
        assert!(state.analysis().is_none());
        assert_eq!(state.phase(), ScreeningPhase::Idle);
    }

    #[test]
    fn test_select_oversize_sets_error() {
        let mut state = ScreeningState::new();
        assert!(!state.select_file("resume.pdf", 6 * 1024 * 1024, "application/pdf"));
        assert_eq!(state.error(), Some("File size exceeds 5MB limit"));
    }

    #[test]
    fn test_reselect_clears_error() {
        let mut state = ScreeningState::new();
        state.select_file("resume.exe", 1024, "application/x-msdownload");
        assert!(state.error().is_some());

        select_valid(&mut state);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_invalid_selection_keeps_previous_file() {
        let mut state = ScreeningState::new();
        select_valid(&mut state);

        // 不正ファイルを選んでもエラー表示のみで、前の選択は残る
        assert!(!state.select_file("movie.mp4", 1024, "video/mp4"));
        assert_eq!(state.error(), Some("Please upload a PDF, DOC, or DOCX file"));
        assert_eq!(state.file().map(|f| f.name.as_str()), Some("resume.pdf"));
    }

    #[test]
    fn test_start_analysis_requires_file() {
        let mut state = ScreeningState::new();
        assert!(!state.start_analysis());
        assert!(!state.is_processing());
    }

    #[test]
    fn test_start_analysis() {
        let mut state = ScreeningState::new();
        select_valid(&mut state);
        assert!(state.start_analysis());
        assert!(state.is_processing());
        assert_eq!(state.phase(), ScreeningPhase::Processing);
        assert!(!state.can_analyze());
    }

    #[test]
    fn test_double_start_is_noop() {
        let mut state = ScreeningState::new();
        select_valid(&mut state);
        assert!(state.start_analysis());
        assert!(!state.start_analysis());
        assert!(state.is_processing());
    }

    #[test]
    fn test_finish_analysis() {
        let mut state = ScreeningState::new();
        select_valid(&mut state);
        state.start_analysis();

        assert!(state.finish_analysis(sample_analysis()));
        assert!(!state.is_processing());
        assert!(state.analysis().is_some());
        assert_eq!(state.phase(), ScreeningPhase::Complete);
    }

    #[test]
    fn test_stale_finish_is_ignored() {
        let mut state = ScreeningState::new();
        // 解析中でなければ完了通知は捨てる
        assert!(!state.finish_analysis(sample_analysis()));
        assert!(state.analysis().is_none());
    }

    #[test]
    fn test_reset_clears_all() {
        let mut state = ScreeningState::new();
        select_valid(&mut state);
        state.start_analysis();
        state.finish_analysis(sample_analysis());
        state.mark_saved();

        state.reset();
        assert_eq!(state, ScreeningState::new());
        assert_eq!(state.phase(), ScreeningPhase::Idle);
    }

    #[test]
    fn test_mark_saved_requires_analysis() {
        let mut state = ScreeningState::new();
        assert!(!state.mark_saved());
        assert!(!state.is_saved());

        select_valid(&mut state);
        state.start_analysis();
        state.finish_analysis(sample_analysis());
        assert!(state.mark_saved());
        assert!(state.is_saved());

        state.clear_saved();
        assert!(!state.is_saved());
    }

    #[test]
    fn test_full_screening_flow() {
        let mut state = ScreeningState::new();

        assert!(state.select_file("resume.pdf", 1024 * 1024, "application/pdf"));
        assert!(state.start_analysis());
        assert!(state.finish_analysis(build_analysis(|| 0.5)));

        let analysis = state.analysis().expect("解析結果があるはず");
        let names: Vec<&str> = analysis
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Skills Match", "Knowledge Depth", "Experience Relevance"]
        );
        assert_eq!(state.phase(), ScreeningPhase::Complete);

        // 完了後の再完了通知は無視される
        assert!(!state.finish_analysis(build_analysis(|| 0.5)));
    }

    #[test]
    fn test_reselect_after_complete_clears_analysis() {
        let mut state = ScreeningState::new();
        select_valid(&mut state);
        state.start_analysis();
        state.finish_analysis(sample_analysis());
        assert_eq!(state.phase(), ScreeningPhase::Complete);

        // 新しい選択で結果画面からアップロード画面に戻る
        assert!(state.select_file("other.docx", 2048, "application/vnd.openxmlformats-officedocument.wordprocessingml.document"));
        assert!(state.analysis().is_none());
        assert_eq!(state.phase(), ScreeningPhase::Selected);
    }
}
