//! 解析結果の型定義
//!
//! common と Web(WASM) で共有される型:
//! - ScoreCategory: カテゴリ別スコア
//! - ResumeAnalysis: 模擬解析の最終出力
//! - ScoreTier: スコア帯（バッジ表示用）

use serde::{Deserialize, Serialize};

/// カテゴリ別スコア
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCategory {
    pub name: String,

    /// 0〜100 の整数スコア
    pub score: u8,

    pub description: String,

    /// 根拠の明細行（表示順を保持）
    pub details: Vec<String>,
}

/// 模擬解析結果
///
/// JSONフィールド名は camelCase
/// （overallScore / keySkills / experienceHighlights / recommendations）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub overall_score: u8,

    /// 固定3カテゴリ（Skills Match / Knowledge Depth / Experience Relevance）
    pub categories: Vec<ScoreCategory>,

    pub key_skills: Vec<String>,

    pub experience_highlights: Vec<String>,

    pub recommendations: Vec<String>,
}

/// スコア帯（バッジのCSSクラスに対応）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Strong,
    Moderate,
    Weak,
}

impl ScoreTier {
    /// スコアから帯を判定（80以上=strong / 60以上=moderate / 60未満=weak）
    pub fn of(score: u8) -> Self {
        if score >= 80 {
            ScoreTier::Strong
        } else if score >= 60 {
            ScoreTier::Moderate
        } else {
            ScoreTier::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Strong => "strong",
            ScoreTier::Moderate => "moderate",
            ScoreTier::Weak => "weak",
        }
    }
}

impl ScoreCategory {
    /// このカテゴリのスコア帯
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::of(self.score)
    }
}
