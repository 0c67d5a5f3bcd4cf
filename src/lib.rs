//! 게임 리뷰 탐색기 - 端末クライアント
//!
//! Web版と同じ game_review_common のロジックでレビューAPIを取得・表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod interactive;
pub mod progress;
pub mod render;
pub mod session;
