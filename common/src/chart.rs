//! ドーナツチャートのデータ算出
//!
//! 選択カテゴリの `{category}Score` を肯定率、`100 - 肯定率` を否定率とする。
//! カテゴリ未選択時は 50/50 の中立データを返す。

use crate::types::{Category, ReviewResult};
use std::f64::consts::{FRAC_PI_2, PI};

pub const POSITIVE_LABEL: &str = "긍정적 리뷰";
pub const NEGATIVE_LABEL: &str = "부정적 리뷰";
pub const POSITIVE_COLOR: &str = "#4caf50";
pub const NEGATIVE_COLOR: &str = "#f44336";

const NEUTRAL_SCORE: f64 = 50.0;
const MAX_SCORE: f64 = 100.0;

/// チャート1スライス分の描画情報
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
    /// 開始角（ラジアン、12時方向が -π/2）
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Slice {
    /// ツールチップ文言 `"{label}: {value}%"`
    pub fn tooltip(&self) -> String {
        format!("{}: {}%", self.label, format_score(self.value))
    }
}

/// ドーナツチャートのデータ（肯定・否定の2値）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartData {
    pub positive: f64,
    pub negative: f64,
}

impl ChartData {
    /// カテゴリ未選択時の中立データ
    pub fn neutral() -> Self {
        Self::from_positive(NEUTRAL_SCORE)
    }

    /// 肯定率から生成（0〜100に丸める）
    pub fn from_positive(score: f64) -> Self {
        let positive = if score.is_finite() {
            score.clamp(0.0, MAX_SCORE)
        } else {
            0.0
        };
        Self {
            positive,
            negative: MAX_SCORE - positive,
        }
    }

    /// `[肯定, 否定]`
    pub fn values(&self) -> [f64; 2] {
        [self.positive, self.negative]
    }

    /// 中央に表示するラベル
    pub fn center_label(&self) -> String {
        format_score(self.positive)
    }

    /// 12時方向から時計回りに並べたスライス
    pub fn slices(&self) -> [Slice; 2] {
        let start = -FRAC_PI_2;
        let split = start + 2.0 * PI * (self.positive / MAX_SCORE);
        let end = start + 2.0 * PI;

        [
            Slice {
                label: POSITIVE_LABEL,
                value: self.positive,
                color: POSITIVE_COLOR,
                start_angle: start,
                end_angle: split,
            },
            Slice {
                label: NEGATIVE_LABEL,
                value: self.negative,
                color: NEGATIVE_COLOR,
                start_angle: split,
                end_angle: end,
            },
        ]
    }

    /// 角度（`atan2` の値）に該当するスライスの添字
    pub fn slice_at_angle(&self, angle: f64) -> Option<usize> {
        if !angle.is_finite() {
            return None;
        }
        let mut angle = angle;
        if angle < -FRAC_PI_2 {
            angle += 2.0 * PI;
        }
        self.slices()
            .iter()
            .position(|s| s.start_angle <= angle && angle < s.end_angle)
    }
}

impl Default for ChartData {
    fn default() -> Self {
        Self::neutral()
    }
}

/// 選択カテゴリとレスポンスからチャートデータを算出
///
/// - カテゴリ未選択: `[50, 50]`
/// - カテゴリ選択済み: スコア（未設定・レスポンス無しは0）と補数
pub fn chart_data(result: Option<&ReviewResult>, category: Option<Category>) -> ChartData {
    match category {
        None => ChartData::neutral(),
        Some(category) => {
            let score = result.and_then(|r| r.score(category)).unwrap_or(0.0);
            ChartData::from_positive(score)
        }
    }
}

/// スコア表示用フォーマット
///
/// 整数は小数点なし、それ以外は小数第2位まで（末尾の0は除去）。
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        let text = format!("{:.2}", score);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
