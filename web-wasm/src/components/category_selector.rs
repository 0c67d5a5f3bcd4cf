//! カテゴリ選択ボタン

use leptos::prelude::*;
use game_review_common::Category;

#[component]
pub fn CategorySelector<F>(
    selected: Signal<Option<Category>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(Category) + 'static + Clone,
{
    view! {
        <div class="keywords-container">
            {Category::ALL
                .into_iter()
                .map(|category| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            type="button"
                            class="keyword-button"
                            class:active=move || selected.get() == Some(category)
                            on:click=move |_| on_select(category)
                        >
                            <span class="keyword-icon">{category.icon()}</span>
                            {format!("  {}", category.label())}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
