//! レビュー表示画面
//!
//! `query` パラメータが変わるたびに1回だけ取得する。
//! カテゴリ切替は表示のみで取得は発生しない。

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use wasm_bindgen_futures::spawn_local;
use game_review_common::{
    review_query, search::QUERY_PARAM, Category, FetchPhase, RequestToken, ReviewState,
    DEFAULT_API_BASE,
};
use crate::api::review::fetch_review;
use crate::components::{
    category_selector::CategorySelector,
    evaluation::Evaluation,
    header::Header,
    search_form::SearchForm,
};

#[component]
pub fn ReviewView() -> impl IntoView {
    let query_map = use_query_map();
    let query = Memo::new(move |_| {
        query_map
            .with(|params| params.get(QUERY_PARAM))
            .unwrap_or_default()
    });

    let state = RwSignal::new(ReviewState::new());
    let (search_term, set_search_term) = signal(String::new());
    let navigate = use_navigate();

    // 取得サイクル
    Effect::new(move |_| {
        let query = query.get();
        if query.is_empty() {
            return;
        }
        set_search_term.set(query.clone());

        let Some(token) = begin_review_fetch(state, &query) else {
            return;
        };
        spawn_local(async move {
            finish_review_fetch(state, token, DEFAULT_API_BASE, &query).await;
        });
    });

    // 同じ画面のまま `?query=...` だけ差し替える
    let on_search = move |value: String| {
        if let Some(search) = review_query(&value) {
            log::debug!("navigate: {}", search);
            navigate(&search, Default::default());
        }
    };

    let on_select = move |category: Category| {
        state.update(|s| s.select_category(category));
    };

    let selected = Signal::derive(move || state.with(|s| s.selected()));
    let section = Signal::derive(move || state.with(|s| s.section()));
    let status = move || {
        state.with(|s| match s.phase() {
            FetchPhase::Loading => Some(("status loading", "불러오는 중...")),
            FetchPhase::Failed => s.error().map(|e| ("status error", e.user_message())),
            FetchPhase::Idle | FetchPhase::Loaded => None,
        })
    };

    view! {
        <Header>
            <CategorySelector selected=selected on_select=on_select />
            <div class="search-container">
                <SearchForm
                    value=search_term
                    set_value=set_search_term
                    input_id="gamename"
                    placeholder="게임 이름"
                    on_submit=on_search
                />
            </div>
        </Header>

        <div class="main-content">
            <div class="game-name" id="gameName">
                {move || query.get()}
            </div>

            {move || status().map(|(class, message)| view! { <p class=class>{message}</p> })}

            <div class="evaluation-container">
                {move || section.get().map(|section| view! { <Evaluation section=section /> })}
            </div>
        </div>
    }
}

/// 取得開始（画面破棄後は None）
fn begin_review_fetch(state: RwSignal<ReviewState>, query: &str) -> Option<RequestToken> {
    state.try_update(|s| s.begin_fetch(query))
}

/// 1回取得して結果を反映する
///
/// # Returns
/// 反映されたら true。古いトークンや画面破棄後の完了は捨てて false
async fn finish_review_fetch(
    state: RwSignal<ReviewState>,
    token: RequestToken,
    base: &str,
    query: &str,
) -> bool {
    let outcome = fetch_review(base, query).await;
    if let Err(e) = &outcome {
        log::error!("review fetch failed for {:?}: {}", query, e);
    }
    state
        .try_update(|s| s.complete(token, outcome))
        .unwrap_or(false)
}
