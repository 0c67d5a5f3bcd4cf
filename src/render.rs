//! 端末向けの表示
//!
//! Web版の画面構成（ゲーム名・肯定レビュー・チャート・否定レビュー）をテキストで再現する。

use game_review_common::{format_score, Category, ChartData, FetchPhase, ReviewState};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;
const FILLED: char = '█';
const EMPTY: char = '░';

/// スコアバー `[████░░░░]`
pub fn render_bar(chart: &ChartData, width: usize) -> String {
    let filled = ((chart.positive / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width * 3 + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar.push(']');
    bar
}

/// レビュー画面全体
pub fn render_review(state: &ReviewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", state.query());

    match state.phase() {
        FetchPhase::Loading => {
            let _ = writeln!(out, "불러오는 중...");
            return out;
        }
        FetchPhase::Failed => {
            if let Some(e) = state.error() {
                let _ = writeln!(out, "[오류] {}", e.user_message());
            }
        }
        FetchPhase::Idle | FetchPhase::Loaded => {}
    }

    match state.section() {
        Some(section) => {
            let _ = writeln!(out, "-- {} {} --", section.category.icon(), section.category.label());
            let _ = writeln!(out, "긍정적리뷰");
            let _ = writeln!(out, "  {}", section.positive_text);
            let _ = writeln!(
                out,
                "{} {}  (긍정 {}% / 부정 {}%)",
                render_bar(&section.chart, BAR_WIDTH),
                section.chart.center_label(),
                format_score(section.chart.positive),
                format_score(section.chart.negative),
            );
            let _ = writeln!(out, "부정적리뷰");
            let _ = writeln!(out, "  {}", section.negative_text);
        }
        None => out.push_str(&render_overview(state)),
    }

    out
}

/// カテゴリ未選択時のスコア一覧
pub fn render_overview(state: &ReviewState) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let score = state.result().and_then(|r| r.score(category));
        let chart = ChartData::from_positive(score.unwrap_or(0.0));
        let label = match score {
            Some(_) => format_score(chart.positive),
            None => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "{} {:<6} {} {}",
            category.icon(),
            category.label(),
            render_bar(&chart, BAR_WIDTH),
            label
        );
    }
    out
}
