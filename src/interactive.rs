//! 対話モード
//!
//! 検索画面 → レビュー画面の流れを端末で再現する。
//! カテゴリ切替では再取得しない。

use crate::client::ReviewSource;
use crate::error::Result;
use crate::progress::fetch_spinner;
use crate::render::render_review;
use crate::session::ReviewSession;
use dialoguer::{Input, Select};
use game_review_common::{normalize_term, Category};

/// カテゴリ選択後のアクション
pub enum ReviewAction {
    /// カテゴリ切替
    Select(Category),
    /// 別のゲームを検索
    NewSearch,
    /// 終了
    Quit,
}

impl ReviewAction {
    /// メニュー項目（カテゴリ4つ + 新規検索 + 終了）
    pub fn menu() -> Vec<(String, ReviewAction)> {
        let mut items: Vec<(String, ReviewAction)> = Category::ALL
            .into_iter()
            .map(|c| (format!("{} {}", c.icon(), c.label()), ReviewAction::Select(c)))
            .collect();
        items.push(("🔍 새 검색".to_string(), ReviewAction::NewSearch));
        items.push(("종료".to_string(), ReviewAction::Quit));
        items
    }
}

/// 対話モード実行
pub async fn run_interactive<S: ReviewSource>(session: &mut ReviewSession<S>) -> Result<()> {
    loop {
        let input: String = Input::new()
            .with_prompt("게임 이름을 적어주세요")
            .allow_empty(true)
            .interact_text()?;

        // 空白のみは無視して再入力
        if normalize_term(&input).is_none() {
            continue;
        }
        let spinner = fetch_spinner(&input);
        session.search(&input).await;
        spinner.finish_and_clear();
        println!("\n{}", render_review(session.state()));

        let menu = ReviewAction::menu();
        let labels: Vec<String> = menu.iter().map(|(label, _)| label.clone()).collect();
        loop {
            let default = session
                .state()
                .selected()
                .and_then(|c| Category::ALL.iter().position(|x| *x == c))
                .unwrap_or(0);
            let index = Select::new()
                .with_prompt("카테고리")
                .items(&labels)
                .default(default)
                .interact()?;

            match &menu[index].1 {
                ReviewAction::Select(category) => {
                    session.select(*category);
                    println!("\n{}", render_review(session.state()));
                }
                ReviewAction::NewSearch => break,
                ReviewAction::Quit => return Ok(()),
            }
        }
    }
}
