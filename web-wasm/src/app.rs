//! メインアプリケーションコンポーネント
//!
//! ルーティング:
//! - `/` 検索画面
//! - `/review?query=...` レビュー表示画面

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use crate::components::{
    not_found::NotFound,
    review_view::ReviewView,
    search_entry::SearchEntry,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=SearchEntry />
                    <Route path=path!("/review") view=ReviewView />
                </Routes>
            </main>
        </Router>
    }
}
