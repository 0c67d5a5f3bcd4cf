//! 検索画面

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use game_review_common::review_path;
use crate::components::header::Header;
use crate::components::search_form::SearchForm;

#[component]
pub fn SearchEntry() -> impl IntoView {
    let (term, set_term) = signal(String::new());
    let navigate = use_navigate();

    // 空白のみの入力は何もしない
    let on_search = move |value: String| {
        if let Some(path) = review_path(&value) {
            log::debug!("navigate: {}", path);
            navigate(&path, Default::default());
        }
    };

    view! {
        <Header />
        <div class="searchContainer">
            <label for="game-name" class="search-label">"게임 이름을 적어주세요"</label>
            <SearchForm
                value=term
                set_value=set_term
                input_id="game-name"
                placeholder="Value"
                on_submit=on_search
            />
        </div>
    }
}
