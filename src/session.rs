//! 端末版のレビュー画面
//!
//! Web版の ReviewView と同じ状態遷移を ReviewState で行う。

use crate::client::ReviewSource;
use game_review_common::{normalize_term, Category, ReviewState};

pub struct ReviewSession<S> {
    source: S,
    state: ReviewState,
}

impl<S: ReviewSource> ReviewSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ReviewState::new(),
        }
    }

    /// 検索して1回取得する
    ///
    /// # Returns
    /// 空白のみの入力なら取得せず false
    pub async fn search(&mut self, input: &str) -> bool {
        let Some(term) = normalize_term(input) else {
            return false;
        };
        let term = term.to_string();

        let token = self.state.begin_fetch(&term);
        let outcome = self.source.fetch(&term).await;
        self.state.complete(token, outcome);
        true
    }

    /// カテゴリ切替（取得は発生しない）
    pub fn select(&mut self, category: Category) {
        self.state.select_category(category);
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
