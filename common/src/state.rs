//! レビュー画面の状態管理
//!
//! 取得サイクル: `Idle -> Loading -> {Loaded | Failed}`
//! 新しい検索語ごとに `Loading` へ戻る。リトライ状態は持たない。
//!
//! 取得の取り消しはしないが、リクエストトークンで最後に発行した取得の結果だけを反映する。

use crate::chart::{chart_data, ChartData};
use crate::error::Error;
use crate::types::{Category, ReviewResult};

/// 発行済みリクエストの識別子（単調増加）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// 取得サイクルの段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// 選択カテゴリの表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub category: Category,
    pub positive_text: String,
    pub negative_text: String,
    pub chart: ChartData,
}

/// レビュー画面の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewState {
    query: String,
    selected: Option<Category>,
    loading: bool,
    error: Option<Error>,
    result: Option<ReviewResult>,
    issued: u64,
}

impl ReviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取得開始
    ///
    /// `loading` を立てて `error` と `result` をクリアし、新しいトークンを返す。
    /// 以前のトークンはこの時点で無効になる。
    pub fn begin_fetch(&mut self, query: &str) -> RequestToken {
        self.issued += 1;
        self.query = query.to_string();
        self.loading = true;
        self.error = None;
        self.result = None;
        log::debug!("fetch #{} started: {:?}", self.issued, self.query);
        RequestToken(self.issued)
    }

    /// 取得完了
    ///
    /// 最新のトークンでなければ何もしない。
    ///
    /// # Returns
    /// 状態に反映したら true
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<Option<ReviewResult>, Error>,
    ) -> bool {
        if !self.is_current(token) {
            log::warn!(
                "fetch #{} discarded: superseded by #{}",
                token.0,
                self.issued
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                log::debug!("fetch #{} loaded (empty body: {})", token.0, result.is_none());
                self.result = result;
            }
            Err(e) => {
                log::debug!("fetch #{} failed: {}", token.0, e);
                self.error = Some(e);
            }
        }
        true
    }

    /// トークンが最新か
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    /// カテゴリ選択（表示のみ、取得は発生しない）
    pub fn select_category(&mut self, category: Category) {
        self.selected = Some(category);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> Option<Category> {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn result(&self) -> Option<&ReviewResult> {
        self.result.as_ref()
    }

    /// 取得サイクルの段階
    pub fn phase(&self) -> FetchPhase {
        if self.loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Failed
        } else if self.issued > 0 {
            FetchPhase::Loaded
        } else {
            FetchPhase::Idle
        }
    }

    /// 現在のチャートデータ
    pub fn chart(&self) -> ChartData {
        chart_data(self.result.as_ref(), self.selected)
    }

    /// 選択カテゴリの表示内容（未選択なら None）
    pub fn section(&self) -> Option<CategorySection> {
        let category = self.selected?;
        let result = self.result.as_ref();

        let positive_text = result
            .and_then(|r| r.positive_review(category))
            .unwrap_or(category.positive_placeholder())
            .to_string();
        let negative_text = result
            .and_then(|r| r.negative_review(category))
            .unwrap_or(category.negative_placeholder())
            .to_string();

        Some(CategorySection {
            category,
            positive_text,
            negative_text,
            chart: self.chart(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse_review_response;

    fn loaded_state() -> ReviewState {
        let mut state = ReviewState::new();
        let token = state.begin_fetch("Hades");
        let body = r#"{"graphicScore": 70, "graphic": "A", "graphicNative": "B"}"#;
        assert!(state.complete(token, parse_review_response(200, body)));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = ReviewState::new();
        assert_eq!(state.phase(), FetchPhase::Idle);
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.result().is_none());
        assert!(state.selected().is_none());
        assert!(state.section().is_none());
    }

    #[test]
    fn test_begin_fetch_resets_state() {
        let mut state = loaded_state();
        state.select_category(Category::Graphic);

        state.begin_fetch("Celeste");

        assert_eq!(state.phase(), FetchPhase::Loading);
        assert!(state.is_loading());
        assert!(state.result().is_none());
        assert!(state.error().is_none());
        assert_eq!(state.query(), "Celeste");
        // カテゴリ選択は検索をまたいで保持
        assert_eq!(state.selected(), Some(Category::Graphic));
    }

    #[test]
    fn test_successful_fetch() {
        let mut state = loaded_state();
        assert_eq!(state.phase(), FetchPhase::Loaded);
        assert!(!state.is_loading());

        state.select_category(Category::Graphic);
        let section = state.section().unwrap();
        assert_eq!(section.chart.values(), [70.0, 30.0]);
        assert_eq!(section.chart.center_label(), "70");
        assert_eq!(section.positive_text, "A");
        assert_eq!(section.negative_text, "B");
    }

    #[test]
    fn test_missing_score_and_texts_use_fallbacks() {
        let mut state = loaded_state();
        state.select_category(Category::Sound);

        let section = state.section().unwrap();
        assert_eq!(section.chart.values(), [0.0, 100.0]);
        assert_eq!(section.positive_text, "사운드 긍정 리뷰");
        assert_eq!(section.negative_text, "사운드 부정 리뷰");
    }

    #[test]
    fn test_server_error() {
        let mut state = ReviewState::new();
        let token = state.begin_fetch("Hades");
        assert!(state.complete(token, parse_review_response(500, "")));

        assert_eq!(state.phase(), FetchPhase::Failed);
        assert!(!state.is_loading());
        assert!(matches!(state.error(), Some(Error::Network(_))));
        assert!(state.result().is_none());
    }

    #[test]
    fn test_parse_error() {
        let mut state = ReviewState::new();
        let token = state.begin_fetch("Hades");
        state.complete(token, parse_review_response(200, "<html>"));

        assert_eq!(state.phase(), FetchPhase::Failed);
        assert!(matches!(state.error(), Some(Error::Parse(_))));
        assert!(state.result().is_none());
    }

    #[test]
    fn test_null_body_is_not_an_error() {
        let mut state = ReviewState::new();
        let token = state.begin_fetch("Hades");
        state.complete(token, parse_review_response(200, "null"));

        assert_eq!(state.phase(), FetchPhase::Loaded);
        assert!(state.error().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_error_cleared_on_next_search() {
        let mut state = ReviewState::new();
        let token = state.begin_fetch("Hades");
        state.complete(token, Err(Error::Network("offline".into())));
        assert!(state.error().is_some());

        state.begin_fetch("Hades");
        assert!(state.error().is_none());
    }

    #[test]
    fn test_select_before_data_loaded() {
        let mut state = ReviewState::new();
        assert_eq!(state.chart().values(), [50.0, 50.0]);

        state.select_category(Category::Creativity);
        let section = state.section().unwrap();
        assert_eq!(section.chart.values(), [0.0, 100.0]);
        assert_eq!(section.positive_text, "창의성 긍정 리뷰");

        state.begin_fetch("Hades");
        assert_eq!(state.chart().values(), [0.0, 100.0]);
    }

    #[test]
    fn test_category_switch_keeps_result() {
        let mut state = loaded_state();
        let before = state.result().cloned();

        for category in Category::ALL {
            state.select_category(category);
            assert_eq!(state.phase(), FetchPhase::Loaded);
            assert_eq!(state.result().cloned(), before);
        }
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = ReviewState::new();
        let first = state.begin_fetch("Hades");
        let second = state.begin_fetch("Celeste");
        assert!(!state.is_current(first));
        assert!(state.is_current(second));

        // 新しい方が先に完了
        let fresh = parse_review_response(200, r#"{"storyScore": 90}"#);
        assert!(state.complete(second, fresh));

        // 古い方が後から完了しても反映しない
        let stale = parse_review_response(200, r#"{"storyScore": 10}"#);
        assert!(!state.complete(first, stale));

        state.select_category(Category::Story);
        assert_eq!(state.chart().values(), [90.0, 10.0]);
        assert_eq!(state.query(), "Celeste");
    }

    #[test]
    fn test_stale_completion_keeps_loading() {
        let mut state = ReviewState::new();
        let first = state.begin_fetch("Hades");
        let _second = state.begin_fetch("Celeste");

        assert!(!state.complete(first, Err(Error::Network("HTTP 500".into()))));
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }
}
