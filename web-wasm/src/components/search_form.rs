//! 検索フォームコンポーネント
//!
//! 入力値は親が持つ。送信時の遷移判定も親に任せる。

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn SearchForm<F>(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    input_id: &'static str,
    placeholder: &'static str,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <form
            class="search-form"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit(value.get_untracked());
            }
        >
            <input
                type="text"
                id=input_id
                name="gamename"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    set_value.set(event_target_value(&ev));
                }
            />
            <button type="submit" class="btn btn-primary">"Search"</button>
        </form>
    }
}
