use leptos::prelude::*;
use leptos_router::components::A;
use game_review_common::search::SEARCH_PATH;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"페이지를 찾을 수 없습니다."</p>
            <A href=SEARCH_PATH>"검색으로 돌아가기"</A>
        </div>
    }
}
