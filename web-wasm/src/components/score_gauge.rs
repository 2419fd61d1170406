//! スコアゲージコンポーネント（円形SVG）

use leptos::prelude::*;

/// ゲージ円周（r=45 の円に対する近似値）
const CIRCUMFERENCE: f64 = 283.0;

/// スコアに応じた stroke-dashoffset
fn dash_offset(score: u8) -> f64 {
    CIRCUMFERENCE - CIRCUMFERENCE * f64::from(score) / 100.0
}

#[component]
pub fn ScoreGauge(score: u8) -> impl IntoView {
    view! {
        <div class="score-gauge">
            <svg viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="45" fill="none" stroke="#e5e7eb" stroke-width="8" />
                <circle
                    cx="50"
                    cy="50"
                    r="45"
                    fill="none"
                    stroke="#3b82f6"
                    stroke-width="8"
                    stroke-dasharray="283"
                    stroke-dashoffset=dash_offset(score).to_string()
                    stroke-linecap="round"
                    transform="rotate(-90 50 50)"
                />
                <text
                    x="50"
                    y="50"
                    text-anchor="middle"
                    dy="7"
                    font-size="20"
                    font-weight="bold"
                    fill="#1f2937"
                >
                    {format!("{score}%")}
                </text>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_offset_empty() {
        assert!((dash_offset(0) - 283.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dash_offset_full() {
        assert!(dash_offset(100).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dash_offset_midrange() {
        // 283 - 283 * 87 / 100 = 36.79
        assert!((dash_offset(87) - 36.79).abs() < 1e-9);
    }
}
