//! ヘッダーコンポーネント

use leptos::prelude::*;

pub const PROJECT_NAME: &str = "게임 리뷰 탐색기";

#[component]
pub fn Header(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="projectName">{PROJECT_NAME}</div>
            {children.map(|children| children())}
        </header>
    }
}
