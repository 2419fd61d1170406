//! 結果ダッシュボードコンポーネント
//!
//! 総合スコアゲージ・カテゴリ別分析・キー情報・推奨事項と
//! 保存/やり直しの操作を表示する。

use leptos::prelude::*;
use resume_screen_common::{ResumeAnalysis, ScoreCategory};

use crate::components::score_gauge::ScoreGauge;

#[component]
pub fn ResultsPanel<FR, FS>(
    analysis: Memo<Option<ResumeAnalysis>>,
    is_saved: Memo<bool>,
    on_reset: FR,
    on_save: FS,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
{
    view! {
        <div class="results">
            {move || {
                analysis
                    .get()
                    .map(|a| {
                        view! {
                            <div class="overall-score">
                                <h3 class="section-title">"Overall Compatibility"</h3>
                                <ScoreGauge score=a.overall_score />
                                <p class="overall-note">
                                    "This candidate shows strong alignment with the role requirements based on skills, experience, and qualifications."
                                </p>
                            </div>

                            <div class="categories">
                                <h3 class="section-title">"Category Analysis"</h3>
                                <div class="category-list">
                                    {a
                                        .categories
                                        .iter()
                                        .map(|category| {
                                            view! { <CategoryCard category=category.clone() /> }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <div class="info-grid">
                                <div class="info-card">
                                    <h3 class="info-title">"Key Skills"</h3>
                                    <div class="skill-list">
                                        {a
                                            .key_skills
                                            .iter()
                                            .map(|skill| {
                                                view! { <span class="skill-badge">{skill.clone()}</span> }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>

                                <div class="info-card">
                                    <h3 class="info-title">"Experience Highlights"</h3>
                                    <ul class="highlight-list">
                                        {a
                                            .experience_highlights
                                            .iter()
                                            .map(|highlight| view! { <li>{highlight.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>

                            <div class="info-card recommendations">
                                <h3 class="info-title">"Recommendations"</h3>
                                <ul class="recommendation-list">
                                    {a
                                        .recommendations
                                        .iter()
                                        .map(|rec| view! { <li>{rec.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
            }}

            <div class="action-buttons">
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Analyze Another Resume"
                </button>

                <button
                    class="btn btn-primary"
                    disabled=move || is_saved.get()
                    on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(())
                    }
                >
                    {move || if is_saved.get() { "Saved" } else { "Save Results" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn CategoryCard(category: ScoreCategory) -> impl IntoView {
    let tier = category.tier();

    view! {
        <div class="category-card">
            <div class="category-head">
                <h4 class="category-name">{category.name.clone()}</h4>
                <span class=format!("badge badge-{}", tier.as_str())>
                    {format!("{}%", category.score)}
                </span>
            </div>
            <p class="category-description">{category.description.clone()}</p>
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%", category.score)></div>
            </div>
            <ul class="detail-list">
                {category
                    .details
                    .iter()
                    .map(|detail| view! { <li class="detail-item">{detail.clone()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
