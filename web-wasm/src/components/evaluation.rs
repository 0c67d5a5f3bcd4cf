//! 評価エリア（肯定レビュー・チャート・否定レビュー）

use leptos::prelude::*;
use game_review_common::CategorySection;
use crate::components::donut_chart::DonutChart;

#[component]
pub fn Evaluation(section: CategorySection) -> impl IntoView {
    view! {
        <div class="review">
            <div class="review-positiveheader">"긍정적리뷰"<hr /></div>
            {section.positive_text}
        </div>
        <div class="chart-container">
            <DonutChart data=section.chart />
        </div>
        <div class="review">
            <div class="review-negativeheader">"부정적리뷰"<hr /></div>
            {section.negative_text}
        </div>
    }
}
